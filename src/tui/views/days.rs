// Days view - browse the whole week
//
// Collapsed: a list of the seven days (friday first, matching the data's
// ordering) with dua counts. Expanded: the selected day's duas rendered as
// cards, navigable like the reader but without progress tracking.

use crate::catalog::{duas_for_day, today_weekday, Weekday};
use crate::tui::app::App;
use crate::tui::components::dua_card;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.day_browse {
        Some(browse) => render_browse(f, area, app, browse.day, browse.index),
        None => render_list(f, area, app),
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let today = today_weekday();

    let items: Vec<ListItem> = Weekday::ALL
        .iter()
        .map(|day| {
            let count = duas_for_day(app.catalog, *day).len();
            let marker = if *day == today { " ← today" } else { "" };
            let line = Line::from(vec![
                Span::styled(
                    format!("  {:<10}", day.display_name()),
                    Style::default().fg(palette.foreground),
                ),
                Span::styled(
                    format!("{count} duas"),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(marker, Style::default().fg(palette.accent)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.days_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_browse(f: &mut Frame, area: Rect, app: &App, day: Weekday, index: usize) {
    let palette = app.palette();
    let duas = duas_for_day(app.catalog, day);

    let Some(dua) = duas.get(index) else {
        return;
    };

    // Header line: day name and position
    let header = Rect::new(area.x, area.y, area.width, 1);
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{} · {} / {}", day.display_name(), index + 1, duas.len()),
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Center),
        header,
    );

    let card_area = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    dua_card::render(
        f,
        card_area,
        dua,
        app.state.language(),
        app.state.font_size(),
        app.state.is_favorite(&dua.id),
        app.slide_offset,
        &palette,
    );
}
