// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, timer ticks)
// - Layered key dispatch: help modal, global keys, then view keys
// - Mouse drags interpreted as swipes by the gesture tracker

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod views;

use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// the way out, including when the loop errors.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on terminal input and the animation tick at once,
/// waking only when something happens.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // ~30 FPS while the slide animation runs; idle frames are cheap
    let mut tick_interval = tokio::time::interval(Duration::from_millis(33));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event).await,
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for animations and toast expiry
            _ = tick_interval.tick() => {
                app.tick_animation();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Help modal → Global → View-specific
async fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: help modal absorbs everything
    if app.show_help {
        if app.handle_key_press(key_event.code) {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
            ) {
                app.show_help = false;
            }
        }
        return;
    }

    // Layer 2: global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: view-specific keys
    if !app.handle_key_press(key_event.code) {
        return;
    }

    match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => match app.view {
            View::Reader | View::Days => app.navigate_previous(),
            View::Settings => app.settings_cycle(-1),
            View::Favorites => {}
        },
        KeyCode::Right | KeyCode::Char('l') => match app.view {
            View::Reader | View::Days => app.navigate_next(),
            View::Settings => app.settings_cycle(1),
            View::Favorites => {}
        },
        KeyCode::Char(' ') => {
            if app.view == View::Reader {
                app.navigate_next();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => match app.view {
            View::Days => app.days_cursor_move(1),
            View::Favorites => app.favorites_cursor_move(1),
            View::Settings => app.settings_cursor_move(1),
            View::Reader => {}
        },
        KeyCode::Up | KeyCode::Char('k') => match app.view {
            View::Days => app.days_cursor_move(-1),
            View::Favorites => app.favorites_cursor_move(-1),
            View::Settings => app.settings_cursor_move(-1),
            View::Reader => {}
        },
        KeyCode::Enter => match app.view {
            View::Reader => app.confirm().await,
            View::Days => app.days_open(),
            _ => {}
        },
        KeyCode::Char('x') => {
            if app.view == View::Favorites && !app.state.favorites().is_empty() {
                app.state.clear_favorites();
                app.favorites_cursor = 0;
                app.show_toast("Favorites cleared");
            }
        }
        KeyCode::Esc => {
            // Collapse the expanded day first, then fall back to the reader
            if !app.days_close() && app.view != View::Reader {
                app.set_view(View::Reader);
            }
        }
        _ => {}
    }
}

/// Handle global keys - returns true if handled.
/// Global keys work the same regardless of current view.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('1') => {
            if app.handle_key_press(key) {
                app.set_view(View::Reader);
            }
            true
        }
        KeyCode::Char('2') => {
            if app.handle_key_press(key) {
                app.set_view(View::Days);
            }
            true
        }
        KeyCode::Char('3') => {
            if app.handle_key_press(key) {
                app.set_view(View::Favorites);
            }
            true
        }
        KeyCode::Char('4') => {
            if app.handle_key_press(key) {
                app.set_view(View::Settings);
            }
            true
        }
        KeyCode::Tab => {
            if app.handle_key_press(key) {
                app.set_view(app.view.next());
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.show_help = true;
            }
            true
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            if app.handle_key_press(key) {
                app.toggle_favorite_current();
            }
            true
        }
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                if !app.clipboard_enabled {
                    app.show_toast("Clipboard disabled in config");
                } else if let Some(text) = app.copy_text() {
                    if clipboard::copy_to_clipboard(&text).is_ok() {
                        app.show_toast("✓ Copied to clipboard");
                    } else {
                        app.show_toast("✗ Failed to copy");
                    }
                }
            }
            true
        }
        _ => false,
    }
}

/// Handle mouse input
///
/// Left-button drags feed the swipe tracker; the wheel maps to whatever the
/// current view treats as up/down.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.swipe_begin(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.swipe_drag(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.swipe_release(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::ScrollDown => match app.view {
            View::Reader => app.navigate_next(),
            View::Days if app.day_browse.is_some() => app.navigate_next(),
            View::Days => app.days_cursor_move(1),
            View::Favorites => app.favorites_cursor_move(1),
            View::Settings => app.settings_cursor_move(1),
        },
        MouseEventKind::ScrollUp => match app.view {
            View::Reader => app.navigate_previous(),
            View::Days if app.day_browse.is_some() => app.navigate_previous(),
            View::Days => app.days_cursor_move(-1),
            View::Favorites => app.favorites_cursor_move(-1),
            View::Settings => app.settings_cursor_move(-1),
        },
        _ => {}
    }
}
