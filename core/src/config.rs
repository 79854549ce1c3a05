//! Display Configuration
//!
//! Centralized configuration loading for the display, supporting a TOML
//! configuration file at `~/.config/cardwall/cardwall.toml`.
//!
//! # Configuration Priority
//!
//! Values are loaded with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! api_url = "http://dashboard.local:5000"
//! user_name = "alice"
//! scroll_interval = 5
//! refresh_interval = 300
//! theme = "dark"
//! raw_markup = false
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default feed endpoint.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
/// Default seconds between rotations.
pub const DEFAULT_SCROLL_INTERVAL: u32 = 5;
/// Default seconds between full refreshes.
pub const DEFAULT_REFRESH_INTERVAL: u32 = 300;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file at {path}: {source}")]
    Read {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not usable.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Tracks where the configuration came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// At least one value from an environment variable.
    Env,
    /// Values from the TOML configuration file.
    File,
    /// Defaults only.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Color scheme preference for the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark background, light text (the default).
    #[default]
    Dark,
    /// Light background, dark text.
    Light,
}

impl ThemeMode {
    /// The opposite mode, for the runtime toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Parse a mode name; anything other than `light` is dark.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Display name of the mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// On-disk TOML shape; every field optional so partial files work.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardwallToml {
    /// Feed endpoint.
    pub api_url: Option<String>,
    /// User whose cards to display.
    pub user_name: Option<String>,
    /// Seconds between rotations.
    pub scroll_interval: Option<u32>,
    /// Seconds between full refreshes.
    pub refresh_interval: Option<u32>,
    /// `"dark"` or `"light"`.
    pub theme: Option<String>,
    /// Pass non-image markup through verbatim.
    pub raw_markup: Option<bool>,
}

/// Resolved configuration for one display run.
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    /// Feed endpoint.
    pub api_url: String,
    /// User whose cards to display; `None` falls back to the first key
    /// of each response.
    pub user_name: Option<String>,
    /// Seconds between rotations.
    pub scroll_interval: u32,
    /// Seconds between full refreshes.
    pub refresh_interval: u32,
    /// Initial color scheme.
    pub theme: ThemeMode,
    /// Pass non-image markup through verbatim (opt-in).
    pub raw_markup: bool,
    /// Path of the config file that was loaded, if any.
    pub config_file_path: Option<PathBuf>,
    source: ConfigSource,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_name: None,
            scroll_interval: DEFAULT_SCROLL_INTERVAL,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            theme: ThemeMode::Dark,
            raw_markup: false,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl DisplayConfig {
    /// The primary source of this configuration.
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

/// The default configuration file path:
/// `$XDG_CONFIG_HOME/cardwall/cardwall.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cardwall").join("cardwall.toml"))
}

/// Load configuration from the default path, the environment, and
/// defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or
/// parsed, or if a value fails validation. A missing file is not an
/// error.
pub fn load_config() -> Result<DisplayConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path (or defaults + environment
/// when `None`).
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<DisplayConfig, ConfigError> {
    let mut config = DisplayConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;

            let file: CardwallToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &file);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(path = %config_path.display(), "loaded configuration from file");
        } else {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
        }
    }

    apply_env_config(&mut config);
    validate(&config)?;

    Ok(config)
}

fn apply_toml_config(config: &mut DisplayConfig, file: &CardwallToml) {
    if let Some(ref url) = file.api_url {
        config.api_url = url.clone();
    }
    if file.user_name.is_some() {
        config.user_name = file.user_name.clone();
    }
    if let Some(secs) = file.scroll_interval {
        config.scroll_interval = secs;
    }
    if let Some(secs) = file.refresh_interval {
        config.refresh_interval = secs;
    }
    if let Some(ref theme) = file.theme {
        config.theme = ThemeMode::parse(theme);
    }
    if let Some(raw) = file.raw_markup {
        config.raw_markup = raw;
    }
}

fn apply_env_config(config: &mut DisplayConfig) {
    if let Ok(url) = std::env::var("CARDWALL_API_URL") {
        config.api_url = url;
        config.source = ConfigSource::Env;
    }
    if let Ok(name) = std::env::var("CARDWALL_USER_NAME") {
        config.user_name = Some(name);
        config.source = ConfigSource::Env;
    }
    if let Ok(secs) = std::env::var("CARDWALL_SCROLL_INTERVAL") {
        if let Ok(n) = secs.parse::<u32>() {
            config.scroll_interval = n;
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(secs) = std::env::var("CARDWALL_REFRESH_INTERVAL") {
        if let Ok(n) = secs.parse::<u32>() {
            config.refresh_interval = n;
            config.source = ConfigSource::Env;
        }
    }
    if let Ok(theme) = std::env::var("CARDWALL_THEME") {
        config.theme = ThemeMode::parse(&theme);
        config.source = ConfigSource::Env;
    }
    if let Ok(raw) = std::env::var("CARDWALL_RAW_MARKUP") {
        config.raw_markup = raw != "0" && !raw.eq_ignore_ascii_case("false");
        config.source = ConfigSource::Env;
    }
}

fn validate(config: &DisplayConfig) -> Result<(), ConfigError> {
    if config.scroll_interval == 0 {
        return Err(ConfigError::Validation(
            "scroll_interval must be at least 1 second".to_string(),
        ));
    }
    if config.refresh_interval == 0 {
        return Err(ConfigError::Validation(
            "refresh_interval must be at least 1 second".to_string(),
        ));
    }
    if config.api_url.is_empty() {
        return Err(ConfigError::Validation("api_url must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Clean up all environment variables used by config loading.
    /// Call this at the start of tests that need clean environment state.
    fn clear_config_env_vars() {
        std::env::remove_var("CARDWALL_API_URL");
        std::env::remove_var("CARDWALL_USER_NAME");
        std::env::remove_var("CARDWALL_SCROLL_INTERVAL");
        std::env::remove_var("CARDWALL_REFRESH_INTERVAL");
        std::env::remove_var("CARDWALL_THEME");
        std::env::remove_var("CARDWALL_RAW_MARKUP");
    }

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.user_name, None);
        assert_eq!(config.scroll_interval, 5);
        assert_eq!(config.refresh_interval, 300);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(!config.raw_markup);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.to_string_lossy().contains("cardwall"));
            assert!(p.to_string_lossy().ends_with("cardwall.toml"));
        }
    }

    #[test]
    fn test_parse_valid_toml() {
        clear_config_env_vars();

        let toml_content = r#"
api_url = "http://dashboard.local:8080"
user_name = "alice"
scroll_interval = 7
refresh_interval = 120
theme = "light"
raw_markup = true
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.api_url, "http://dashboard.local:8080");
        assert_eq!(config.user_name, Some("alice".to_string()));
        assert_eq!(config.scroll_interval, 7);
        assert_eq!(config.refresh_interval, 120);
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.raw_markup);
    }

    #[test]
    fn test_parse_partial_toml() {
        clear_config_env_vars();

        let toml_content = r#"
user_name = "bob"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.user_name, Some("bob".to_string()));
        // Everything else keeps its default.
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.scroll_interval, DEFAULT_SCROLL_INTERVAL);
        assert_eq!(config.refresh_interval, DEFAULT_REFRESH_INTERVAL);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        clear_config_env_vars();

        let path = PathBuf::from("/nonexistent/path/cardwall.toml");
        let config = load_config_from_path(Some(path)).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_malformed_toml_error() {
        let toml_content = r#"
scroll_interval = "not a number
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        clear_config_env_vars();

        let toml_content = "scroll_interval = 0\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    /// Note: env-override tests can race with parallel tests that also
    /// touch the process environment, so assertions accept either the
    /// env or the file value — never the default.
    #[test]
    fn test_env_overrides_file() {
        clear_config_env_vars();

        let toml_content = r#"
user_name = "file-user"
refresh_interval = 60
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        std::env::set_var("CARDWALL_USER_NAME", "env-user");
        std::env::set_var("CARDWALL_REFRESH_INTERVAL", "90");

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        clear_config_env_vars();

        let name = config.user_name.clone().unwrap_or_default();
        assert!(
            name == "env-user" || name == "file-user",
            "expected env-user or file-user, got: {name}"
        );
        assert!(
            config.refresh_interval == 90 || config.refresh_interval == 60,
            "expected 90 or 60, got: {}",
            config.refresh_interval
        );
    }

    #[test]
    fn test_theme_mode_parse_and_toggle() {
        assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("LIGHT"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("anything"), ThemeMode::Dark);

        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.name(), "light");
    }

    #[test]
    fn test_toml_round_trip() {
        let original = CardwallToml {
            api_url: Some("http://example:5000".to_string()),
            user_name: Some("carol".to_string()),
            scroll_interval: Some(3),
            ..Default::default()
        };

        let toml_string = toml::to_string(&original).unwrap();
        let parsed: CardwallToml = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.api_url, Some("http://example:5000".to_string()));
        assert_eq!(parsed.user_name, Some("carol".to_string()));
        assert_eq!(parsed.scroll_interval, Some(3));
        assert_eq!(parsed.refresh_interval, None);
    }

    #[test]
    fn test_config_error_display() {
        let read_err = ConfigError::Read {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{read_err}");
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("failed to read"));

        let validation_err = ConfigError::Validation("bad value".to_string());
        assert!(format!("{validation_err}").contains("bad value"));
    }
}
