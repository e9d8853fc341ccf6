// TUI application state
//
// Holds the session controller, user preferences, and per-view UI state
// (cursors, the swipe tracker, the card slide animation, toasts).

use super::components::toast::Toast;
use super::input::InputHandler;
use crate::app_state::AppState;
use crate::catalog::{self, Dua, Weekday};
use crate::events::SessionCounters;
use crate::gesture::{SwipeIntent, SwipeTracker};
use crate::logging::LogBuffer;
use crate::session::SessionController;
use crate::storage::prefs::{FontSize, ThemePref};
use crate::theme::{palette, Palette};
use crossterm::event::KeyCode;

/// Horizontal distance (in cells) the card starts from when sliding in.
const SLIDE_DISTANCE: f64 = 24.0;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Reader, // Today's session
    Days,      // Browse all days
    Favorites, // Saved duas
    Settings,  // Language, theme, font size
}

impl View {
    /// Get the next view in cycle (Tab)
    pub fn next(self) -> Self {
        match self {
            View::Reader => View::Days,
            View::Days => View::Favorites,
            View::Favorites => View::Settings,
            View::Settings => View::Reader,
        }
    }

    /// Get display name for the title bar tabs
    pub fn name(&self) -> &'static str {
        match self {
            View::Reader => "Today",
            View::Days => "Days",
            View::Favorites => "Favorites",
            View::Settings => "Settings",
        }
    }

    pub const ALL: [View; 4] = [View::Reader, View::Days, View::Favorites, View::Settings];
}

/// Browsing position inside the Days view (a day expanded into its duas).
#[derive(Debug, Clone, Copy)]
pub struct DayBrowse {
    pub day: Weekday,
    pub index: usize,
}

/// Main application state for the TUI
pub struct App {
    /// Today's reading session
    pub session: SessionController,

    /// User preferences and favorites
    pub state: AppState,

    /// Full catalog (all days), for Days and Favorites views
    pub catalog: &'static [Dua],

    /// Current view being displayed
    pub view: View,

    /// Whether the help modal is open
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Mouse drag interpreter for swipe navigation
    pub swipe: SwipeTracker,

    /// Horizontal offset of the dua card while sliding in (decays each tick)
    pub slide_offset: f64,

    /// Transient notification, if one is showing
    pub toast: Option<Toast>,

    /// Per-session counters for the status bar
    pub counters: SessionCounters,

    /// Log buffer for surfacing warnings in the status bar
    pub log_buffer: LogBuffer,

    /// Paint the theme background (from config)
    pub use_theme_background: bool,

    /// Clipboard feature flag (from config)
    pub clipboard_enabled: bool,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    // Days view: cursor over the 7 days, or a day expanded into its duas
    pub days_cursor: usize,
    pub day_browse: Option<DayBrowse>,

    // Favorites view cursor
    pub favorites_cursor: usize,

    // Settings view: 0 = language, 1 = theme, 2 = font size
    pub settings_cursor: usize,
}

impl App {
    pub fn new(
        session: SessionController,
        state: AppState,
        catalog: &'static [Dua],
        log_buffer: LogBuffer,
        use_theme_background: bool,
        clipboard_enabled: bool,
    ) -> Self {
        Self {
            session,
            state,
            catalog,
            view: View::default(),
            show_help: false,
            should_quit: false,
            swipe: SwipeTracker::default(),
            slide_offset: 0.0,
            toast: None,
            counters: SessionCounters::default(),
            log_buffer,
            use_theme_background,
            clipboard_enabled,
            input_handler: InputHandler::default(),
            days_cursor: 0,
            day_browse: None,
            favorites_cursor: 0,
            settings_cursor: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input plumbing
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Views and notifications
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.day_browse = None;
            self.slide_offset = 0.0;
            self.swipe.reset();
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// The resolved palette for the current theme preference.
    pub fn palette(&self) -> Palette {
        palette(self.state.is_dark())
    }

    /// Advance animations; called on every tick.
    pub fn tick_animation(&mut self) {
        // Exponential decay toward rest, snapping when close enough. A
        // claimed drag holds the card at the pointer instead.
        if self.slide_offset != 0.0 && !self.swipe.is_claimed() {
            self.slide_offset *= 0.6;
            if self.slide_offset.abs() < 0.5 {
                self.slide_offset = 0.0;
            }
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Whether the card is still sliding. Gestures are ignored mid-slide so
    /// a fast flick cannot double-navigate.
    pub fn is_animating(&self) -> bool {
        self.slide_offset != 0.0
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Move forward in whichever view has a notion of "next".
    pub fn navigate_next(&mut self) {
        if self.is_animating() {
            return;
        }
        match self.view {
            View::Reader => {
                if self.session.next() {
                    self.counters.navigations += 1;
                    self.counters.duas_viewed += 1;
                    self.slide_offset = SLIDE_DISTANCE;
                }
            }
            View::Days => {
                if let Some(browse) = &mut self.day_browse {
                    let len = catalog::duas_for_day(self.catalog, browse.day).len();
                    if browse.index + 1 < len {
                        browse.index += 1;
                        self.slide_offset = SLIDE_DISTANCE;
                    }
                }
            }
            _ => {}
        }
    }

    /// Move backward in whichever view has a notion of "previous".
    pub fn navigate_previous(&mut self) {
        if self.is_animating() {
            return;
        }
        match self.view {
            View::Reader => {
                if self.session.previous() {
                    self.counters.navigations += 1;
                    self.slide_offset = -SLIDE_DISTANCE;
                }
            }
            View::Days => {
                if let Some(browse) = &mut self.day_browse {
                    if browse.index > 0 {
                        browse.index -= 1;
                        self.slide_offset = -SLIDE_DISTANCE;
                    }
                }
            }
            _ => {}
        }
    }

    /// Enter on the last dua completes the session; Enter on the completion
    /// screen starts it again.
    pub async fn confirm(&mut self) {
        if self.view != View::Reader {
            return;
        }
        if self.session.is_completed() {
            if self.session.start_again().await {
                self.counters.duas_viewed += 1;
                self.show_toast("Starting again");
            }
        } else if self.session.is_last() && self.session.complete().await {
            self.counters.sessions_completed += 1;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Swipe gestures (mouse drag)
    // ─────────────────────────────────────────────────────────────────────

    pub fn swipe_begin(&mut self, x: u16, y: u16) {
        if self.is_animating() {
            return;
        }
        self.swipe.begin(x as i32, y as i32);
    }

    pub fn swipe_drag(&mut self, x: u16, y: u16) {
        if let Some(dx) = self.swipe.drag(x as i32, y as i32) {
            // Live preview: the card follows the drag
            self.slide_offset = dx as f64;
        }
    }

    pub fn swipe_release(&mut self, x: u16, y: u16) {
        let layout = self.state.direction();
        match self.swipe.release(x as i32, y as i32, layout) {
            // Accepted: drop the drag preview so the move starts its own slide
            Some(SwipeIntent::Next) => {
                self.slide_offset = 0.0;
                self.navigate_next();
            }
            Some(SwipeIntent::Previous) => {
                self.slide_offset = 0.0;
                self.navigate_previous();
            }
            // Cancelled: keep the offset where the pointer left it and let
            // the tick ease the card back to rest
            Some(SwipeIntent::Cancel) | None => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Current dua, favorites, clipboard
    // ─────────────────────────────────────────────────────────────────────

    /// The dua the user is looking at, if the current view shows one.
    pub fn current_dua(&self) -> Option<&Dua> {
        match self.view {
            View::Reader => self.session.current_dua(),
            View::Days => {
                let browse = self.day_browse?;
                let duas = catalog::duas_for_day(self.catalog, browse.day);
                let id = &duas.get(browse.index)?.id;
                catalog::find_by_id(self.catalog, id)
            }
            View::Favorites => {
                let id = self.state.favorites().get(self.favorites_cursor)?;
                catalog::find_by_id(self.catalog, id)
            }
            View::Settings => None,
        }
    }

    /// Toggle the favorite flag of the dua under the cursor.
    pub fn toggle_favorite_current(&mut self) {
        let Some(id) = self.current_dua().map(|d| d.id.clone()) else {
            return;
        };
        let added = self.state.toggle_favorite(&id);
        self.counters.favorites_toggled += 1;
        if added {
            self.show_toast("★ Added to favorites");
        } else {
            self.show_toast("Removed from favorites");
            // Keep the cursor valid after removal from the Favorites list
            let len = self.state.favorites().len();
            if self.favorites_cursor >= len && len > 0 {
                self.favorites_cursor = len - 1;
            }
        }
    }

    /// Plain-text rendering of the current dua for the clipboard.
    pub fn copy_text(&self) -> Option<String> {
        let dua = self.current_dua()?;
        let translation = dua.translations.get(self.state.language());
        let mut text = dua.arabic.clone();
        if !translation.is_empty() {
            text.push_str("\n\n");
            text.push_str(translation);
        }
        if !dua.reference.is_empty() {
            text.push_str("\n\n");
            text.push_str(&dua.reference);
        }
        Some(text)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Days view
    // ─────────────────────────────────────────────────────────────────────

    pub fn days_cursor_move(&mut self, delta: i32) {
        if self.day_browse.is_some() {
            return;
        }
        let len = Weekday::ALL.len() as i32;
        self.days_cursor = (self.days_cursor as i32 + delta).rem_euclid(len) as usize;
    }

    /// Expand the day under the cursor into its duas.
    pub fn days_open(&mut self) {
        let day = Weekday::ALL[self.days_cursor];
        if !catalog::duas_for_day(self.catalog, day).is_empty() {
            self.day_browse = Some(DayBrowse { day, index: 0 });
        }
    }

    /// Collapse back to the day list. Returns false if already there.
    pub fn days_close(&mut self) -> bool {
        self.day_browse.take().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Favorites view
    // ─────────────────────────────────────────────────────────────────────

    pub fn favorites_cursor_move(&mut self, delta: i32) {
        let len = self.state.favorites().len();
        if len == 0 {
            return;
        }
        self.favorites_cursor =
            (self.favorites_cursor as i32 + delta).rem_euclid(len as i32) as usize;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Settings view
    // ─────────────────────────────────────────────────────────────────────

    pub fn settings_cursor_move(&mut self, delta: i32) {
        self.settings_cursor = (self.settings_cursor as i32 + delta).rem_euclid(3) as usize;
    }

    /// Cycle the value of the setting under the cursor.
    pub fn settings_cycle(&mut self, delta: i32) {
        match self.settings_cursor {
            0 => {
                let langs = crate::catalog::Language::ALL;
                let i = langs
                    .iter()
                    .position(|l| *l == self.state.language())
                    .unwrap_or(0);
                let next = (i as i32 + delta).rem_euclid(langs.len() as i32) as usize;
                self.state.set_language(langs[next]);
            }
            1 => {
                let themes = ThemePref::ALL;
                let i = themes
                    .iter()
                    .position(|t| *t == self.state.theme())
                    .unwrap_or(0);
                let next = (i as i32 + delta).rem_euclid(themes.len() as i32) as usize;
                self.state.set_theme(themes[next]);
            }
            _ => {
                let sizes = FontSize::ALL;
                let i = sizes
                    .iter()
                    .position(|s| *s == self.state.font_size())
                    .unwrap_or(0);
                let next = (i as i32 + delta).rem_euclid(sizes.len() as i32) as usize;
                self.state.set_font_size(sizes[next]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Analytics;
    use crate::storage::KvStore;

    fn temp_store(name: &str) -> KvStore {
        let dir = std::env::temp_dir().join(format!("wird-app-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        KvStore::open(dir)
    }

    async fn app(name: &str) -> App {
        let store = temp_store(name);
        let analytics = Analytics::disabled();
        let state = AppState::load(store.clone(), analytics.clone()).await;
        let catalog = catalog::load_catalog(None);
        let mut session = SessionController::new(catalog::today_duas(catalog), store, analytics);
        session.load().await;
        App::new(session, state, catalog, LogBuffer::new(), false, false)
    }

    #[tokio::test]
    async fn test_cancelled_swipe_eases_back_instead_of_snapping() {
        let mut app = app("cancel-ease").await;

        // Past the capture distance (2) but under the swipe threshold (6)
        app.swipe_begin(10, 5);
        app.swipe_drag(14, 5);
        assert_eq!(app.slide_offset, 4.0);

        app.swipe_release(14, 5);

        // The card keeps the drag offset at release and decays per tick
        assert_eq!(app.slide_offset, 4.0);
        app.tick_animation();
        assert!(app.slide_offset > 0.0 && app.slide_offset < 4.0);

        while app.is_animating() {
            app.tick_animation();
        }
        assert_eq!(app.slide_offset, 0.0);
    }

    #[tokio::test]
    async fn test_accepted_swipe_navigates_with_fresh_slide() {
        let mut app = app("accept").await;
        assert_eq!(app.session.current_index(), Some(0));

        // dx = -10 crosses the threshold: next under LTR
        app.swipe_begin(20, 5);
        app.swipe_drag(10, 5);
        app.swipe_release(10, 5);

        assert_eq!(app.session.current_index(), Some(1));
        assert_eq!(app.slide_offset, SLIDE_DISTANCE);
    }

    #[tokio::test]
    async fn test_unclaimed_release_leaves_offset_alone() {
        let mut app = app("unclaimed").await;

        // Vertical drag never claims; release must not disturb the card
        app.swipe_begin(10, 5);
        app.swipe_drag(11, 15);
        app.swipe_release(11, 15);

        assert_eq!(app.slide_offset, 0.0);
        assert_eq!(app.session.current_index(), Some(0));
    }
}
