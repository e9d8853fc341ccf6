// Session progress bar
//
// A gauge showing how far through today's list the user is, with a
// "current / total" label.

use crate::session::SessionController;
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, session: &SessionController, palette: &Palette) {
    let label = match session.current_index() {
        Some(i) => format!("{} / {}", i + 1, session.len()),
        None if session.is_completed() => format!("{0} / {0}", session.len()),
        None => "– / –".to_string(),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .gauge_style(
            Style::default()
                .fg(palette.progress_filled)
                .bg(palette.progress_empty),
        )
        .percent(session.progress_percentage())
        .label(label);

    f.render_widget(gauge, area);
}
