// Session module - today's reading session
//
// Tracks where the user is within today's day subset and keeps that position
// durable across restarts. State machine:
//
//   Idle --load--> Active(clamp(saved, 0, len-1))   (or Completed if the
//                                                    day's sentinel is set)
//   Active(i) --next/previous/goto--> Active(j)      bounds-checked
//   Active(len-1) --complete--> Completed
//   Completed --start_again--> Active(0)
//
// In-memory state is the source of truth for the running process. Accepted
// index changes persist in the background without blocking navigation, but
// the writes are chained so they land in order, and completion and restart
// drain the chain before touching the per-day keys; a progress write that
// settled after the clear would resurrect a stale index. Keys are
// date-namespaced, so each day is independent and midnight starts fresh.
// This controller is the only writer of the per-day keys.

use crate::analytics::Analytics;
use crate::catalog::Dua;
use crate::storage::{prefs, KvStore};
use crate::util::date_key_today;
use std::time::Instant;


/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not yet loaded, or nothing to read today.
    #[default]
    Idle,
    /// Reading, positioned at this index into the day subset.
    Active(usize),
    /// The user finished today's list and confirmed completion.
    Completed,
}

pub struct SessionController {
    duas: Vec<Dua>,
    state: SessionState,
    store: KvStore,
    analytics: Analytics,
    started_at: Instant,
    /// Tail of the chained progress writes, if any are still in flight.
    pending_write: Option<tokio::task::JoinHandle<()>>,
}

impl SessionController {
    pub fn new(duas: Vec<Dua>, store: KvStore, analytics: Analytics) -> Self {
        Self {
            duas,
            state: SessionState::Idle,
            store,
            analytics,
            started_at: Instant::now(),
            pending_write: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived state
    // ─────────────────────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn duas(&self) -> &[Dua] {
        &self.duas
    }

    pub fn len(&self) -> usize {
        self.duas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.duas.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::Active(i) => Some(i),
            _ => None,
        }
    }

    pub fn current_dua(&self) -> Option<&Dua> {
        self.current_index().and_then(|i| self.duas.get(i))
    }

    pub fn is_first(&self) -> bool {
        self.state == SessionState::Active(0)
    }

    pub fn is_last(&self) -> bool {
        !self.duas.is_empty() && self.state == SessionState::Active(self.duas.len() - 1)
    }

    pub fn is_only_one(&self) -> bool {
        self.duas.len() == 1
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Fraction read so far, in [0, 1].
    pub fn progress(&self) -> f64 {
        match (self.current_index(), self.duas.len()) {
            (Some(i), len) if len > 0 => (i + 1) as f64 / len as f64,
            _ if self.is_completed() => 1.0,
            _ => 0.0,
        }
    }

    pub fn progress_percentage(&self) -> u16 {
        (self.progress() * 100.0).round() as u16
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Resume today's session from the store.
    ///
    /// A persisted index is clamped into `[0, len-1]` rather than trusted:
    /// the catalog may have shrunk since it was written. With nothing to
    /// read the session stays `Idle`.
    pub async fn load(&mut self) {
        if self.duas.is_empty() {
            tracing::info!("no duas for today, session stays idle");
            return;
        }

        if prefs::is_today_completed(&self.store).await {
            self.state = SessionState::Completed;
            tracing::debug!("today's session already completed");
            return;
        }

        let saved = prefs::get_today_progress(&self.store).await;
        let index = saved.min(self.duas.len() - 1);
        if saved != index {
            tracing::warn!(saved, clamped = index, "persisted progress out of range, clamping");
        }

        self.state = SessionState::Active(index);
        self.emit_view();
        tracing::debug!(index, total = self.duas.len(), "session resumed");
    }

    /// Advance to the next dua. No-op at the last index (completion is a
    /// separate, explicit transition). Returns whether the move was accepted.
    pub fn next(&mut self) -> bool {
        match self.state {
            SessionState::Active(i) if i + 1 < self.duas.len() => {
                self.set_index(i, i + 1);
                true
            }
            _ => false,
        }
    }

    /// Go back one dua. No-op at index 0.
    pub fn previous(&mut self) -> bool {
        match self.state {
            SessionState::Active(i) if i > 0 => {
                self.set_index(i, i - 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to an arbitrary index. Out-of-range targets are rejected and
    /// logged; state is left unchanged.
    pub fn goto_index(&mut self, target: usize) -> bool {
        match self.state {
            SessionState::Active(i) => {
                if target >= self.duas.len() {
                    tracing::error!(
                        target,
                        len = self.duas.len(),
                        "navigation target out of range, rejected"
                    );
                    self.analytics
                        .error("navigation target out of range", Some("session.goto_index"));
                    return false;
                }
                if target != i {
                    self.set_index(i, target);
                }
                true
            }
            _ => false,
        }
    }

    /// Accepted index change: update memory, persist in the background, emit
    /// analytics. Memory is authoritative; a lost write only costs resume
    /// accuracy on the next launch. Each write awaits its predecessor so
    /// the progress key always holds the most recent accepted index.
    fn set_index(&mut self, from: usize, to: usize) {
        self.state = SessionState::Active(to);

        let store = self.store.clone();
        let prev = self.pending_write.take();
        self.pending_write = Some(tokio::spawn(async move {
            if let Some(prev) = prev {
                let _ = prev.await;
            }
            prefs::set_today_progress(&store, to).await;
        }));

        self.analytics.dua_navigated(from, to);
        self.emit_view();
    }

    /// Wait for any in-flight progress writes to settle.
    async fn drain_progress_writes(&mut self) {
        if let Some(handle) = self.pending_write.take() {
            let _ = handle.await;
        }
    }

    /// Finish the session. Only valid on the last dua: persists the
    /// completion sentinel and clears the transient progress counter.
    pub async fn complete(&mut self) -> bool {
        if !self.is_last() {
            return false;
        }

        self.state = SessionState::Completed;
        self.drain_progress_writes().await;
        prefs::set_today_completed(&self.store).await;
        prefs::clear_today_progress(&self.store).await;

        let duration = self.started_at.elapsed().as_secs();
        self.analytics
            .session_completed(&date_key_today(), self.duas.len(), duration);
        tracing::info!(total = self.duas.len(), duration, "session completed");
        true
    }

    /// Reopen a completed session from the beginning.
    pub async fn start_again(&mut self) -> bool {
        if self.state != SessionState::Completed {
            return false;
        }

        self.drain_progress_writes().await;
        prefs::reset_today(&self.store).await;
        self.state = SessionState::Active(0);
        self.started_at = Instant::now();

        self.analytics.session_restarted(&date_key_today());
        self.emit_view();
        true
    }

    fn emit_view(&self) {
        if let Some(dua) = self.current_dua() {
            if let Some(index) = self.current_index() {
                self.analytics.dua_view(&dua.id, index, self.duas.len());
            }
        }
    }
}
