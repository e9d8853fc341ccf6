//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{Config, LogRotation};

impl LogRotation {
    fn as_str(&self) -> &str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

impl Config {
    /// Generate a commented TOML template reflecting this config.
    ///
    /// Written to ~/.config/wird/config.toml on first run so users can see
    /// the available options without reading docs.
    pub fn to_toml(&self) -> String {
        let data_file_line = match &self.data_file {
            Some(path) => format!("data_file = \"{}\"", path.display()),
            None => "# data_file = \"/path/to/duas.json\"".to_string(),
        };

        format!(
            r#"# wird configuration
#
# User preferences (language, theme, font size) are edited inside the app
# and stored separately; this file covers paths and machine-level options.

# Override the bundled dua dataset with a JSON file of the same shape
{data_file_line}

# Directory for the persistent store (favorites, progress, settings)
store_dir = "{store_dir}"

# Directory for session analytics (JSONL) and optional log files
log_dir = "{log_dir}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Feature flags
[features]
analytics = {analytics}
clipboard = {clipboard}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-TUI buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            data_file_line = data_file_line,
            store_dir = self.store_dir.display(),
            log_dir = self.log_dir.display(),
            use_bg = self.use_theme_background,
            analytics = self.features.analytics,
            clipboard = self.features.clipboard,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
