// Title bar component
//
// Renders the app name, today's day, and the view tabs.

use crate::catalog::today_weekday;
use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();

    let mut spans = vec![
        Span::styled(
            " ☪ wird ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", today_weekday().display_name()),
            Style::default().fg(palette.muted),
        ),
    ];

    // View tabs: [1 Today] [2 Days] [3 Favorites] [4 Settings]
    for (i, view) in View::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, view.name());
        let style = if *view == app.view {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
