// View rendering
//
// One file per view, with the shared frame layout here:
//   title bar (3) / body (rest) / progress gauge (3, Reader only) / status (1)
// The help modal and toast render on top of whatever view is active.

pub mod days;
pub mod favorites;
pub mod help;
pub mod reader;
pub mod settings;

use super::app::{App, View};
use super::components::{progress_bar, status_bar, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.palette();

    if app.use_theme_background {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            f.area(),
        );
    }

    let show_gauge = app.view == View::Reader;
    let constraints = if show_gauge {
        vec![
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    match app.view {
        View::Reader => reader::render(f, chunks[1], app),
        View::Days => days::render(f, chunks[1], app),
        View::Favorites => favorites::render(f, chunks[1], app),
        View::Settings => settings::render(f, chunks[1], app),
    }

    if show_gauge {
        progress_bar::render(f, chunks[2], &app.session, &palette);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    if app.show_help {
        help::render(f, f.area(), app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &palette);
    }
}
