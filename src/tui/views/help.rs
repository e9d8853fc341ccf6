// Help modal
//
// A centered keybinding reference over the current view. Any of Esc, q or ?
// closes it.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("←/→, h/l", "Previous / next dua"),
    ("Space", "Next dua"),
    ("Enter", "Complete session / start again"),
    ("mouse drag", "Swipe between duas"),
    ("f", "Toggle favorite"),
    ("x", "Clear all favorites (Favorites view)"),
    ("y", "Copy dua to clipboard"),
    ("j/k, ↑/↓", "Move list cursor"),
    ("1-4", "Switch view (Today, Days, Favorites, Settings)"),
    ("Tab", "Next view"),
    ("Esc", "Back / close"),
    ("?", "This help"),
    ("q", "Quit"),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();

    let width = 58.min(area.width.saturating_sub(4));
    let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let modal_area = Rect::new(x, y, width, height);

    let mut lines = vec![Line::from("")];
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {keys:<12}"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(palette.foreground)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background))
        .title(" Keys ");

    f.render_widget(Clear, modal_area);
    f.render_widget(Paragraph::new(lines).block(block), modal_area);
}
