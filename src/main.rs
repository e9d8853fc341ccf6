// wird - daily duas in the terminal
//
// The catalog ships with the binary (seven days of duas, translated into
// several languages); the session controller tracks where the user is in
// today's list and persists it across runs.
//
// Architecture:
// - Catalog: bundled JSON normalized into an immutable in-memory list
// - Session: today's reading position as a small state machine
// - Storage: one-file-per-key store for favorites, progress, settings
// - TUI (ratatui): card-based reader with keyboard and swipe navigation
// - Analytics: mpsc channel feeding a JSONL writer task

mod analytics;
mod app_state;
mod catalog;
mod cli;
mod config;
mod events;
mod gesture;
mod logging;
mod session;
mod storage;
mod theme;
mod tui;
mod util;

use analytics::{generate_session_id, Analytics, AnalyticsWriter};
use anyhow::Result;
use app_state::AppState;
use cli::CliAction;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use session::SessionController;
use storage::KvStore;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    let action = match cli::handle_cli() {
        CliAction::Handled => return Ok(()),
        action => action,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if matches!(action, CliAction::PrintToday) {
        config.enable_tui = false;
    }

    // Initialize tracing with conditional output
    // In TUI mode: capture logs to buffer (prevents garbling the display)
    // In headless mode: output logs to stdout
    // File logging: optionally write to rotating log files (in addition)
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer);

    let session_id = generate_session_id();
    tracing::debug!("Session ID: {}", session_id);

    // Persistent store and catalog
    let store = KvStore::open(config.store_dir.clone());
    tracing::debug!(store = %store.root().display(), "store opened");
    let catalog = catalog::load_catalog(config.data_file.as_deref());

    // Analytics pipeline: bounded channel into a JSONL writer task. Disabled
    // analytics means a sink that drops everything; callers never branch.
    let (analytics, writer_handle) = if config.features.analytics {
        let (event_tx, event_rx) = mpsc::channel(1000);
        match AnalyticsWriter::new(config.log_dir.clone(), session_id.clone(), event_rx) {
            Ok(writer) => {
                let handle = tokio::spawn(async move {
                    if let Err(e) = writer.run().await {
                        tracing::warn!("analytics writer stopped: {e:#}");
                    }
                });
                (Analytics::new(event_tx), Some(handle))
            }
            Err(e) => {
                tracing::warn!("analytics disabled: {e:#}");
                (Analytics::disabled(), None)
            }
        }
    } else {
        (Analytics::disabled(), None)
    };

    // User preferences and today's session
    let state = AppState::load(store.clone(), analytics.clone()).await;
    let mut session = SessionController::new(
        catalog::today_duas(catalog),
        store.clone(),
        analytics.clone(),
    );
    session.load().await;

    if config.enable_tui {
        let app = tui::app::App::new(
            session,
            state,
            catalog,
            log_buffer.clone(),
            config.use_theme_background,
            config.features.clipboard,
        );
        tui::run_tui(app).await?;
    } else {
        print_today(&session, &state);
        drop(session);
        drop(state);
    }

    // Drop the last senders so the writer task drains and exits
    drop(analytics);
    if let Some(handle) = writer_handle {
        let _ = handle.await;
    }

    Ok(())
}

/// Print today's duas to stdout (no TUI).
fn print_today(session: &SessionController, state: &AppState) {
    let day = catalog::today_weekday();
    println!("{}", day.display_name());
    println!();

    if session.is_empty() {
        println!("No duas for today.");
        return;
    }

    for dua in session.duas() {
        let marker = if state.is_favorite(&dua.id) { "★ " } else { "" };
        println!("{}{}", marker, dua.arabic);
        let translation = dua.translations.get(state.language());
        if !translation.is_empty() {
            println!("{translation}");
        }
        if !dua.reference.is_empty() {
            println!("— {}", dua.reference);
        }
        println!();
    }
}

/// Initialize the tracing subscriber.
///
/// Returns the non-blocking writer guard when file logging is enabled; it
/// must stay alive for the rest of the program so logs flush.
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("wird={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let file_writer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                Some(tracing_appender::non_blocking(appender))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    // File layer uses JSON format for structured log parsing. Built inside
    // each branch: a layer's type is tied to the subscriber stack it
    // extends, and the two stacks differ.
    if config.enable_tui {
        let file_layer = file_writer.as_ref().map(|(non_blocking, _)| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking.clone())
                .with_ansi(false)
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .with(file_layer)
            .init();
    } else {
        let file_layer = file_writer.as_ref().map(|(non_blocking, _)| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking.clone())
                .with_ansi(false)
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .with(file_layer)
            .init();
    }

    file_writer.map(|(_, guard)| guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both subscriber stacks must accept their own file-layer instance and
    // install cleanly; the TUI stack routes events into the log buffer.
    #[test]
    fn test_tui_and_headless_log_stacks_install() {
        let dir = std::env::temp_dir().join(format!("wird-logs-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let appender = tracing_appender::rolling::never(&dir, "test.log");
        let (non_blocking, _guard) = tracing_appender::non_blocking(appender);

        let buffer = LogBuffer::new();
        {
            let file_layer = Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking.clone())
                    .with_ansi(false),
            );
            let stack = tracing_subscriber::registry()
                .with(EnvFilter::new("wird=debug"))
                .with(TuiLogLayer::new(buffer.clone()))
                .with(file_layer);
            let _default = tracing::subscriber::set_default(stack);
            tracing::warn!("captured by the tui buffer");
        }
        assert!(buffer.last_noteworthy().is_some());

        {
            let file_layer = Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            );
            let stack = tracing_subscriber::registry()
                .with(EnvFilter::new("wird=debug"))
                .with(tracing_subscriber::fmt::layer())
                .with(file_layer);
            let _default = tracing::subscriber::set_default(stack);
            tracing::info!("headless stack live");
        }
    }
}
