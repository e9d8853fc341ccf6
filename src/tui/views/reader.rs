// Reader view - today's session
//
// Three states: nothing to read (Idle with an empty day), the dua card
// (Active), and the completion screen (Completed).

use crate::session::SessionState;
use crate::tui::app::App;
use crate::tui::components::dua_card;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();

    match app.session.state() {
        SessionState::Idle => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No duas for today",
                    Style::default().fg(palette.muted),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Browse other days with 2",
                    Style::default().fg(palette.muted),
                )),
            ];
            f.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                centered_vertically(area, 4),
            );
        }
        SessionState::Active(_) => {
            if let Some(dua) = app.session.current_dua() {
                let is_favorite = app.state.is_favorite(&dua.id);
                dua_card::render(
                    f,
                    area,
                    dua,
                    app.state.language(),
                    app.state.font_size(),
                    is_favorite,
                    app.slide_offset,
                    &palette,
                );
            }

            // Edge markers: which directions have somewhere to go
            let mid_y = area.y + area.height / 2;
            if !app.session.is_first() && area.width > 2 {
                f.render_widget(
                    Paragraph::new(Span::styled("‹", Style::default().fg(palette.muted))),
                    Rect::new(area.x, mid_y, 1, 1),
                );
            }
            if !app.session.is_last() && area.width > 2 {
                f.render_widget(
                    Paragraph::new(Span::styled("›", Style::default().fg(palette.muted))),
                    Rect::new(area.right() - 1, mid_y, 1, 1),
                );
            }
        }
        SessionState::Completed => {
            let lines = vec![
                Line::from(Span::styled(
                    "✓ All done for today",
                    Style::default()
                        .fg(palette.success)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} duas read", app.session.len()),
                    Style::default().fg(palette.foreground),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to start again",
                    Style::default().fg(palette.muted),
                )),
            ];
            f.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                centered_vertically(area, 5),
            );
        }
    }
}

/// A horizontally full, vertically centered strip of the given height.
fn centered_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}
