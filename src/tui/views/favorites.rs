// Favorites view
//
// Left: the saved list in insertion order. Right: a card preview of the
// selected dua. Ids that no longer resolve against the catalog (the data
// file changed) are shown dimmed rather than silently dropped; the stored
// list is left untouched.

use crate::catalog::find_by_id;
use crate::tui::app::App;
use crate::tui::components::dua_card;
use crate::util::truncate_utf8_safe;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let favorites = app.state.favorites();

    if favorites.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                "No favorites yet",
                Style::default().fg(palette.muted),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press f on any dua to save it here",
                Style::default().fg(palette.muted),
            )),
        ];
        let y = area.y + area.height / 2;
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            Rect::new(area.x, y.min(area.bottom().saturating_sub(3)), area.width, 3),
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(area);

    let items: Vec<ListItem> = favorites
        .iter()
        .map(|id| match find_by_id(app.catalog, id) {
            Some(dua) => {
                let label = dua.translations.get(app.state.language());
                let label = if label.is_empty() { &dua.arabic } else { label };
                ListItem::new(Line::from(vec![
                    Span::styled("★ ", Style::default().fg(palette.favorite)),
                    Span::styled(
                        truncate_utf8_safe(label, 28).to_string(),
                        Style::default().fg(palette.foreground),
                    ),
                ]))
            }
            None => ListItem::new(Line::from(Span::styled(
                format!("? {id}"),
                Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
            ))),
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(format!(" Favorites ({}) ", favorites.len())),
        )
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.favorites_cursor.min(favorites.len() - 1)));
    f.render_stateful_widget(list, chunks[0], &mut state);

    // Preview of the selected dua
    if let Some(dua) = app.current_dua() {
        dua_card::render(
            f,
            chunks[1],
            dua,
            app.state.language(),
            app.state.font_size(),
            true,
            0.0,
            &palette,
        );
    }
}
