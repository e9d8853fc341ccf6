//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/wird/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! This covers machine-level concerns only: paths, logging, feature flags.
//! User preferences (language, theme, font size) live in the persistent
//! store and are edited from the Settings view.

use serde::Deserialize;
use std::path::PathBuf;

mod serialization;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    /// Override for the bundled dua dataset. `None` uses the compiled-in data.
    pub data_file: Option<PathBuf>,

    /// Directory for the persistent key-value store (favorites, progress,
    /// settings).
    pub store_dir: PathBuf,

    /// Directory for analytics JSONL and optional tracing log files.
    pub log_dir: PathBuf,

    /// Whether to run the TUI (disabled = print today's duas and exit).
    pub enable_tui: bool,

    /// Paint the theme's background color (false = terminal default).
    pub use_theme_background: bool,

    /// Feature flags for optional modules.
    pub features: Features,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Feature flags for optional modules.
#[derive(Debug, Clone)]
pub struct Features {
    /// Write analytics events to JSONL files.
    pub analytics: bool,
    /// Enable copy-to-clipboard.
    pub clipboard: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            analytics: true,
            clipboard: true,
        }
    }
}

/// Log file rotation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is unset.
    pub level: String,
    /// Also write tracing output to rotating files.
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: default_state_dir().join("logs"),
            file_prefix: "wird".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let state_dir = default_state_dir();
        Self {
            data_file: None,
            store_dir: state_dir.join("store"),
            log_dir: state_dir.join("logs"),
            enable_tui: true,
            use_theme_background: true,
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// State directory: ~/.local/share/wird, falling back to the working
/// directory when no home is available.
fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".local").join("share").join("wird"))
        .unwrap_or_else(|| PathBuf::from("./wird-data"))
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub data_file: Option<String>,
    pub store_dir: Option<String>,
    pub log_dir: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileFeatures {
    pub analytics: Option<bool>,
    pub clipboard: Option<bool>,
}

impl Features {
    fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Features::default();
        Self {
            analytics: file.analytics.unwrap_or(defaults.analytics),
            clipboard: file.clipboard.unwrap_or(defaults.clipboard),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = LoggingConfig::default();
        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file.file_rotation.unwrap_or(defaults.file_rotation),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/wird/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("wird").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist, so users
    /// can discover the available options.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = Self::default().to_toml();
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists.
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults while the
    /// user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file");
                    eprintln!("  File: {}", path.display());
                    eprintln!("  {}", e);
                    eprintln!("  To reset, run: wird config --reset");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Error: cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults.
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Config::default();

        // Data file: env > file > bundled
        let data_file = std::env::var("WIRD_DATA_FILE")
            .ok()
            .or(file.data_file)
            .map(PathBuf::from);

        // Store directory: env > file > default
        let store_dir = std::env::var("WIRD_STORE_DIR")
            .ok()
            .or(file.store_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.store_dir);

        // Log directory: env > file > default
        let log_dir = std::env::var("WIRD_LOG_DIR")
            .ok()
            .or(file.log_dir)
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("WIRD_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        Self {
            data_file,
            store_dir,
            log_dir,
            enable_tui,
            use_theme_background,
            features: Features::from_file(file.features),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
