// Settings view
//
// Three rows: translation language, theme, font size. Changes apply
// immediately; persistence is handled by AppState.

use crate::storage::prefs::{FontSize, ThemePref};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn theme_label(theme: ThemePref) -> &'static str {
    match theme {
        ThemePref::System => "System",
        ThemePref::Light => "Light",
        ThemePref::Dark => "Dark",
    }
}

fn font_size_label(size: FontSize) -> &'static str {
    match size {
        FontSize::Small => "Small",
        FontSize::Normal => "Normal",
        FontSize::Large => "Large",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();

    let rows: [(&str, String); 3] = [
        ("Language", app.state.language().display_name().to_string()),
        ("Theme", theme_label(app.state.theme()).to_string()),
        ("Font size", font_size_label(app.state.font_size()).to_string()),
    ];

    let mut lines = vec![Line::from("")];
    for (i, (name, value)) in rows.iter().enumerate() {
        let selected = i == app.settings_cursor;
        let cursor = if selected { "▸ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.foreground)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {cursor}{name:<12}"), name_style),
            Span::styled("◂ ", Style::default().fg(palette.muted)),
            Span::styled(value.clone(), Style::default().fg(palette.foreground)),
            Span::styled(" ▸", Style::default().fg(palette.muted)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Changes are saved automatically",
        Style::default().fg(palette.muted),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Settings ");

    f.render_widget(Paragraph::new(lines).block(block), area);
}
