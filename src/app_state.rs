// Application state - user preferences and favorites
//
// One explicit state object, loaded once at startup and threaded by
// reference into the components that need it. No ambient singletons.
// Setters mutate memory first (authoritative for this process) and spawn
// the paired persistence write; write failures are logged by the store and
// never roll back the in-memory value.

use crate::analytics::Analytics;
use crate::catalog::{direction, Language, TextDirection};
use crate::storage::{prefs, KvStore};

pub struct AppState {
    language: Language,
    theme: prefs::ThemePref,
    font_size: prefs::FontSize,
    /// Favorite dua ids. Insertion-ordered and deduplicated; persisted
    /// whole on every mutation.
    favorites: Vec<String>,
    store: KvStore,
    analytics: Analytics,
}

impl AppState {
    /// Load settings and favorites from the store. Missing or corrupt data
    /// falls back to defaults.
    pub async fn load(store: KvStore, analytics: Analytics) -> Self {
        let (settings, favorites) =
            tokio::join!(prefs::get_settings(&store), prefs::get_favorites(&store));

        tracing::debug!(
            language = settings.language.code(),
            theme = settings.theme.code(),
            font_size = settings.font_size.code(),
            favorites = favorites.len(),
            "application state loaded"
        );

        Self {
            language: settings.language,
            theme: settings.theme,
            font_size: settings.font_size,
            favorites,
            store,
            analytics,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> prefs::ThemePref {
        self.theme
    }

    pub fn font_size(&self) -> prefs::FontSize {
        self.font_size
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        let store = self.store.clone();
        tokio::spawn(async move { prefs::set_language(&store, language).await });
    }

    pub fn set_theme(&mut self, theme: prefs::ThemePref) {
        self.theme = theme;
        let store = self.store.clone();
        tokio::spawn(async move { prefs::set_theme(&store, theme).await });
    }

    pub fn set_font_size(&mut self, font_size: prefs::FontSize) {
        self.font_size = font_size;
        let store = self.store.clone();
        tokio::spawn(async move { prefs::set_font_size(&store, font_size).await });
    }

    /// Layout direction for the current language.
    pub fn direction(&self) -> TextDirection {
        direction(self.language)
    }

    /// Resolve the theme preference to dark/light. `System` maps to dark:
    /// there is no reliable terminal background query, and dark terminals
    /// dominate.
    pub fn is_dark(&self) -> bool {
        match self.theme {
            prefs::ThemePref::Light => false,
            prefs::ThemePref::Dark | prefs::ThemePref::System => true,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────

    pub fn is_favorite(&self, dua_id: &str) -> bool {
        self.favorites.iter().any(|id| id == dua_id)
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Toggle membership: add if absent, remove if present. Returns whether
    /// the id was added. The whole list is persisted on every mutation.
    pub fn toggle_favorite(&mut self, dua_id: &str) -> bool {
        let added = match self.favorites.iter().position(|id| id == dua_id) {
            Some(pos) => {
                self.favorites.remove(pos);
                false
            }
            None => {
                self.favorites.push(dua_id.to_string());
                true
            }
        };

        self.analytics.favorite_toggled(dua_id, added);

        let store = self.store.clone();
        let snapshot = self.favorites.clone();
        tokio::spawn(async move { prefs::save_favorites(&store, &snapshot).await });

        added
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        let store = self.store.clone();
        tokio::spawn(async move { prefs::clear_favorites(&store).await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> KvStore {
        let dir = std::env::temp_dir().join(format!("wird-state-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        KvStore::open(dir)
    }

    #[tokio::test]
    async fn test_defaults_on_fresh_store() {
        let state = AppState::load(temp_store("fresh"), Analytics::disabled()).await;
        assert_eq!(state.language(), Language::English);
        assert!(state.favorites().is_empty());
        assert!(state.is_dark()); // system resolves dark
    }

    #[tokio::test]
    async fn test_toggle_favorite_pairing() {
        let mut state = AppState::load(temp_store("toggle"), Analytics::disabled()).await;

        assert!(state.toggle_favorite("monday-0")); // added
        assert!(state.is_favorite("monday-0"));

        assert!(!state.toggle_favorite("monday-0")); // removed
        assert!(!state.is_favorite("monday-0"));
    }

    #[tokio::test]
    async fn test_toggle_deduplicates() {
        let mut state = AppState::load(temp_store("dedup"), Analytics::disabled()).await;
        state.toggle_favorite("a");
        state.toggle_favorite("b");
        state.toggle_favorite("a");
        state.toggle_favorite("a");
        assert_eq!(state.favorites(), &["b".to_string(), "a".to_string()]);
    }

    #[tokio::test]
    async fn test_setters_update_memory_immediately() {
        let mut state = AppState::load(temp_store("setters"), Analytics::disabled()).await;
        state.set_language(Language::Urdu);
        state.set_theme(prefs::ThemePref::Light);
        state.set_font_size(prefs::FontSize::Large);

        assert_eq!(state.language(), Language::Urdu);
        assert!(!state.is_dark());
        assert_eq!(state.font_size(), prefs::FontSize::Large);
        assert_eq!(state.direction(), TextDirection::Rtl);
    }
}
