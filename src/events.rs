// Events that flow from the reading session to the analytics writer
//
// These represent user-level interactions: viewing a dua, navigating, and
// finishing or restarting a session. Using an enum keeps communication
// between async tasks type-safe and pattern-matchable; the serde tag makes
// the JSONL output self-describing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Main analytics event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A dua was displayed. Indices are 1-based for analytics.
    DuaView {
        timestamp: DateTime<Utc>,
        id: String,
        index: usize,
        total: usize,
    },

    /// The user navigated between duas. Indices are 1-based.
    DuaNavigated {
        timestamp: DateTime<Utc>,
        from_index: usize,
        to_index: usize,
    },

    /// The user finished today's session.
    SessionCompleted {
        timestamp: DateTime<Utc>,
        date: String,
        total: usize,
        duration_seconds: u64,
    },

    /// A completed session was restarted from the beginning.
    SessionRestarted {
        timestamp: DateTime<Utc>,
        date: String,
    },

    /// A dua was added to or removed from favorites.
    FavoriteToggled {
        timestamp: DateTime<Utc>,
        id: String,
        added: bool,
    },

    /// A recoverable error occurred somewhere in the core.
    Error {
        timestamp: DateTime<Utc>,
        message: String,
        context: Option<String>,
    },
}

/// Per-session counters shown in the status bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCounters {
    pub duas_viewed: usize,
    pub navigations: usize,
    pub favorites_toggled: usize,
    pub sessions_completed: usize,
}

impl SessionCounters {
    /// Update counters from an event as it is emitted.
    pub fn record(&mut self, event: &AppEvent) {
        match event {
            AppEvent::DuaView { .. } => self.duas_viewed += 1,
            AppEvent::DuaNavigated { .. } => self.navigations += 1,
            AppEvent::FavoriteToggled { .. } => self.favorites_toggled += 1,
            AppEvent::SessionCompleted { .. } => self.sessions_completed += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = AppEvent::DuaView {
            timestamp: Utc::now(),
            id: "monday-0".into(),
            index: 1,
            total: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"dua_view\""));
        assert!(json.contains("\"id\":\"monday-0\""));
    }

    #[test]
    fn test_counters_record() {
        let mut counters = SessionCounters::default();
        counters.record(&AppEvent::DuaView {
            timestamp: Utc::now(),
            id: "x".into(),
            index: 1,
            total: 1,
        });
        counters.record(&AppEvent::DuaNavigated {
            timestamp: Utc::now(),
            from_index: 1,
            to_index: 2,
        });
        counters.record(&AppEvent::Error {
            timestamp: Utc::now(),
            message: "m".into(),
            context: None,
        });
        assert_eq!(counters.duas_viewed, 1);
        assert_eq!(counters.navigations, 1);
        assert_eq!(counters.favorites_toggled, 0);
    }
}
