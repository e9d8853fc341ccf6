// Typed persistence layer over the key-value store
//
// Key space (stable, shared with earlier releases):
//   favorites                     -> JSON array of dua ids
//   language / theme / fontSize   -> enum code strings
//   todayProgress_<YYYY-MM-DD>    -> stringified integer
//   completed_<YYYY-MM-DD>       -> "true" sentinel
//
// Progress and completion keys are namespaced by the local date, so each
// day's session is independent and midnight rolls over naturally.

use super::KvStore;
use crate::catalog::Language;
use crate::util::date_key_today;

const KEY_FAVORITES: &str = "favorites";
const KEY_LANGUAGE: &str = "language";
const KEY_THEME: &str = "theme";
const KEY_FONT_SIZE: &str = "fontSize";

fn progress_key() -> String {
    format!("todayProgress_{}", date_key_today())
}

fn completed_key() -> String {
    format!("completed_{}", date_key_today())
}

// ─────────────────────────────────────────────────────────────────────────────
// Preference enums
// ─────────────────────────────────────────────────────────────────────────────

/// Color scheme preference. `System` resolves at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePref {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePref {
    pub const ALL: [ThemePref; 3] = [ThemePref::System, ThemePref::Light, ThemePref::Dark];

    pub fn code(&self) -> &'static str {
        match self {
            ThemePref::System => "system",
            ThemePref::Light => "light",
            ThemePref::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<ThemePref> {
        ThemePref::ALL.iter().copied().find(|t| t.code() == code)
    }
}

/// Reading text size. Affects card width and line spacing in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Normal, FontSize::Large];

    pub fn code(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Normal => "normal",
            FontSize::Large => "large",
        }
    }

    pub fn from_code(code: &str) -> Option<FontSize> {
        FontSize::ALL.iter().copied().find(|f| f.code() == code)
    }
}

/// User preferences loaded together at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub language: Language,
    pub theme: ThemePref,
    pub font_size: FontSize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Favorites
// ─────────────────────────────────────────────────────────────────────────────

/// Load the favorites id list. Corrupt or absent data yields an empty list.
pub async fn get_favorites(store: &KvStore) -> Vec<String> {
    match store.get(KEY_FAVORITES).await {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "favorites data corrupt, resetting to empty");
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

/// Persist the whole favorites list (the set is small; writes are whole-value).
pub async fn save_favorites(store: &KvStore, ids: &[String]) {
    match serde_json::to_string(ids) {
        Ok(json) => store.set(KEY_FAVORITES, &json).await,
        Err(e) => tracing::warn!(error = %e, "failed to serialize favorites"),
    }
}

pub async fn clear_favorites(store: &KvStore) {
    store.remove(KEY_FAVORITES).await;
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Load all settings in parallel. Unknown or missing codes fall back to
/// defaults (en / system / normal).
pub async fn get_settings(store: &KvStore) -> Settings {
    let (language, theme, font_size) = tokio::join!(
        store.get(KEY_LANGUAGE),
        store.get(KEY_THEME),
        store.get(KEY_FONT_SIZE),
    );

    Settings {
        language: language
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default(),
        theme: theme
            .as_deref()
            .and_then(ThemePref::from_code)
            .unwrap_or_default(),
        font_size: font_size
            .as_deref()
            .and_then(FontSize::from_code)
            .unwrap_or_default(),
    }
}

pub async fn set_language(store: &KvStore, language: Language) {
    store.set(KEY_LANGUAGE, language.code()).await;
}

pub async fn set_theme(store: &KvStore, theme: ThemePref) {
    store.set(KEY_THEME, theme.code()).await;
}

pub async fn set_font_size(store: &KvStore, font_size: FontSize) {
    store.set(KEY_FONT_SIZE, font_size.code()).await;
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-day progress
// ─────────────────────────────────────────────────────────────────────────────

/// Last-viewed index for today. Absent or unparseable values read as 0;
/// range clamping against today's subset belongs to the session controller.
pub async fn get_today_progress(store: &KvStore) -> usize {
    match store.get(&progress_key()).await {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "progress value corrupt, defaulting to 0");
            0
        }),
        None => 0,
    }
}

pub async fn set_today_progress(store: &KvStore, index: usize) {
    store.set(&progress_key(), &index.to_string()).await;
}

pub async fn clear_today_progress(store: &KvStore) {
    store.remove(&progress_key()).await;
}

pub async fn is_today_completed(store: &KvStore) -> bool {
    store.get(&completed_key()).await.as_deref() == Some("true")
}

pub async fn set_today_completed(store: &KvStore) {
    store.set(&completed_key(), "true").await;
}

/// Clear both per-day keys ("start again").
pub async fn reset_today(store: &KvStore) {
    store.remove(&progress_key()).await;
    store.remove(&completed_key()).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> KvStore {
        let dir = std::env::temp_dir().join(format!("wird-prefs-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        KvStore::open(dir)
    }

    #[tokio::test]
    async fn test_favorites_round_trip() {
        let store = temp_store("favs");
        assert!(get_favorites(&store).await.is_empty());

        let ids = vec!["monday-0".to_string(), "friday-1".to_string()];
        save_favorites(&store, &ids).await;
        assert_eq!(get_favorites(&store).await, ids);

        clear_favorites(&store).await;
        assert!(get_favorites(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_favorites_reads_empty() {
        let store = temp_store("favs-corrupt");
        store.set("favorites", "not json").await;
        assert!(get_favorites(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_settings_defaults() {
        let store = temp_store("settings-default");
        let settings = get_settings(&store).await;
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.theme, ThemePref::System);
        assert_eq!(settings.font_size, FontSize::Normal);
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let store = temp_store("settings");
        set_language(&store, Language::Urdu).await;
        set_theme(&store, ThemePref::Dark).await;
        set_font_size(&store, FontSize::Large).await;

        let settings = get_settings(&store).await;
        assert_eq!(settings.language, Language::Urdu);
        assert_eq!(settings.theme, ThemePref::Dark);
        assert_eq!(settings.font_size, FontSize::Large);
    }

    #[tokio::test]
    async fn test_unknown_setting_code_falls_back() {
        let store = temp_store("settings-unknown");
        store.set("language", "klingon").await;
        assert_eq!(get_settings(&store).await.language, Language::English);
    }

    #[tokio::test]
    async fn test_progress_round_trip() {
        let store = temp_store("progress");
        assert_eq!(get_today_progress(&store).await, 0);

        set_today_progress(&store, 4).await;
        assert_eq!(get_today_progress(&store).await, 4);

        clear_today_progress(&store).await;
        assert_eq!(get_today_progress(&store).await, 0);
    }

    #[tokio::test]
    async fn test_completed_flag_and_reset() {
        let store = temp_store("completed");
        assert!(!is_today_completed(&store).await);

        set_today_completed(&store).await;
        set_today_progress(&store, 2).await;
        assert!(is_today_completed(&store).await);

        reset_today(&store).await;
        assert!(!is_today_completed(&store).await);
        assert_eq!(get_today_progress(&store).await, 0);
    }

    #[tokio::test]
    async fn test_yesterday_key_is_independent() {
        let store = temp_store("day-boundary");
        // Write under an explicit non-today key, the way yesterday's run
        // would have left it
        store.set("todayProgress_2000-01-01", "4").await;
        // Today's read never consults the other day's key
        assert_eq!(get_today_progress(&store).await, 0);
    }
}
