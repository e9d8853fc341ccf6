// Status bar component
//
// Bottom line: key hints for the current view, session counters, and the
// most recent warning or error from the log buffer.

use crate::tui::app::{App, View};
use crate::util::truncate_utf8_safe;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn hints(app: &App) -> &'static str {
    match app.view {
        View::Reader => {
            if app.session.is_completed() {
                " Enter start again · f fav · y copy · Tab view · q quit "
            } else if app.session.is_only_one() {
                " Enter complete · f fav · y copy · Tab view · q quit "
            } else if app.session.is_last() {
                " ←/→ navigate · Enter complete · f fav · y copy · q quit "
            } else {
                " ←/→ navigate · Space next · f fav · y copy · q quit "
            }
        }
        View::Days => " j/k select · Enter open · Esc back · ←/→ navigate · q quit ",
        View::Favorites => " j/k select · f remove · x clear all · y copy · q quit ",
        View::Settings => " j/k select · ←/→ change · Tab view · q quit ",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();

    let counters = format!(
        " viewed {} · moves {} ",
        app.counters.duas_viewed, app.counters.navigations
    );

    let mut spans = vec![
        Span::styled(hints(app), Style::default().fg(palette.muted)),
        Span::styled(
            counters,
            Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
        ),
    ];

    // Surface the latest warning or error so problems are visible without
    // leaving the alternate screen
    if let Some(entry) = app.log_buffer.last_noteworthy() {
        let color = match entry.level {
            crate::logging::LogLevel::Error => palette.error,
            _ => palette.warning,
        };
        let budget = (area.width as usize).saturating_sub(
            spans.iter().map(|s| s.content.len()).sum::<usize>() + 10,
        );
        if budget > 8 {
            spans.push(Span::styled(
                format!(
                    "│ {} {}: {}",
                    entry.level.as_str(),
                    entry.target,
                    truncate_utf8_safe(&entry.message, budget)
                ),
                Style::default().fg(color),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
