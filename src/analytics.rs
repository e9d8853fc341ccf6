// Analytics module - typed event sink and JSONL writer
//
// `Analytics` is the cheap, cloneable sender half handed to the session
// controller and the TUI; it never blocks and degrades to a no-op when the
// feature is disabled. `AnalyticsWriter` runs as a background task appending
// one JSON object per line to a per-session file:
//   wird-<YYYYMMDD-HHMMSS-XXXX>.jsonl
// Example: jq '.type' logs/wird-20260827-091500-a7b3.jsonl

use crate::events::AppEvent;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Generate a unique session id for the analytics file name.
/// Format: YYYYMMDD-HHMMSS-XXXX (timestamp + 4 random hex chars).
pub fn generate_session_id() -> String {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let timestamp = Utc::now().format("%Y%m%d-%H%M%S");
    // RandomState gives a random value without adding a dependency
    let random = RandomState::new().build_hasher().finish();
    format!("{}-{:04x}", timestamp, random & 0xFFFF)
}

/// Sender half of the analytics pipeline.
#[derive(Debug, Clone)]
pub struct Analytics {
    tx: Option<mpsc::Sender<AppEvent>>,
}

impl Analytics {
    pub fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sink that drops everything (analytics disabled in config, tests).
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Send an event without blocking. A full channel drops the event with
    /// a warning; analytics must never stall the UI.
    pub fn send(&self, event: AppEvent) {
        if let Some(tx) = &self.tx {
            if tx.try_send(event).is_err() {
                tracing::warn!("analytics channel full, dropping event");
            }
        }
    }

    // Typed helpers. Indices are converted to 1-based here, in one place.

    pub fn dua_view(&self, id: &str, index: usize, total: usize) {
        self.send(AppEvent::DuaView {
            timestamp: Utc::now(),
            id: id.to_string(),
            index: index + 1,
            total,
        });
    }

    pub fn dua_navigated(&self, from_index: usize, to_index: usize) {
        self.send(AppEvent::DuaNavigated {
            timestamp: Utc::now(),
            from_index: from_index + 1,
            to_index: to_index + 1,
        });
    }

    pub fn session_completed(&self, date: &str, total: usize, duration_seconds: u64) {
        self.send(AppEvent::SessionCompleted {
            timestamp: Utc::now(),
            date: date.to_string(),
            total,
            duration_seconds,
        });
    }

    pub fn session_restarted(&self, date: &str) {
        self.send(AppEvent::SessionRestarted {
            timestamp: Utc::now(),
            date: date.to_string(),
        });
    }

    pub fn favorite_toggled(&self, id: &str, added: bool) {
        self.send(AppEvent::FavoriteToggled {
            timestamp: Utc::now(),
            id: id.to_string(),
            added,
        });
    }

    pub fn error(&self, message: &str, context: Option<&str>) {
        self.send(AppEvent::Error {
            timestamp: Utc::now(),
            message: message.to_string(),
            context: context.map(str::to_string),
        });
    }
}

/// Background task writing events to a per-session JSONL file.
pub struct AnalyticsWriter {
    log_dir: PathBuf,
    session_id: String,
    event_rx: mpsc::Receiver<AppEvent>,
}

impl AnalyticsWriter {
    pub fn new(
        log_dir: PathBuf,
        session_id: String,
        event_rx: mpsc::Receiver<AppEvent>,
    ) -> Result<Self> {
        fs::create_dir_all(&log_dir).context("Failed to create analytics directory")?;
        Ok(Self {
            log_dir,
            session_id,
            event_rx,
        })
    }

    fn file_path(&self) -> PathBuf {
        self.log_dir.join(format!("wird-{}.jsonl", self.session_id))
    }

    /// Run the write loop until the channel closes. Idiomatic worker-task
    /// shape: process the stream, log per-event failures, keep going.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!(file = %self.file_path().display(), "analytics writer started");

        let mut counters = crate::events::SessionCounters::default();
        while let Some(event) = self.event_rx.recv().await {
            counters.record(&event);
            if let Err(e) = self.write_event(&event) {
                tracing::error!(error = %e, "failed to write analytics event");
            }
        }

        tracing::info!(
            viewed = counters.duas_viewed,
            navigations = counters.navigations,
            favorites = counters.favorites_toggled,
            completions = counters.sessions_completed,
            "analytics writer shutting down"
        );
        Ok(())
    }

    fn write_event(&self, event: &AppEvent) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_path())
            .context("Failed to open analytics file")?;

        let json = serde_json::to_string(event).context("Failed to serialize event")?;
        writeln!(file, "{}", json).context("Failed to write analytics file")?;

        // Flush immediately so events survive a crash
        file.flush().context("Failed to flush analytics file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_shape() {
        let id = generate_session_id();
        // YYYYMMDD-HHMMSS-XXXX
        assert_eq!(id.len(), 20);
        assert_eq!(id.matches('-').count(), 2);
    }

    #[tokio::test]
    async fn test_disabled_sink_is_silent() {
        let analytics = Analytics::disabled();
        // Must not panic or block
        analytics.dua_view("monday-0", 0, 3);
        analytics.error("nothing", None);
    }

    #[tokio::test]
    async fn test_writer_appends_jsonl() {
        let dir = std::env::temp_dir().join(format!("wird-analytics-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let (tx, rx) = mpsc::channel(16);
        let writer = AnalyticsWriter::new(dir.clone(), "test-session".into(), rx).unwrap();
        let path = writer.file_path();

        let analytics = Analytics::new(tx);
        analytics.dua_view("friday-0", 0, 2);
        analytics.dua_navigated(0, 1);
        drop(analytics); // close the channel so run() returns

        writer.run().await.unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"type\":\"dua_view\""));
        // 1-based conversion happens in the helper
        assert!(lines[0].contains("\"index\":1"));
        assert!(lines[1].contains("\"type\":\"dua_navigated\""));
    }
}
