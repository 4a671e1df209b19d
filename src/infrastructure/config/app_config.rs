//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "cityguide";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "colesattac";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Language used for screen titles and labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ru => write!(f, "ru"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Interface language.
    #[serde(default)]
    pub locale: Locale,

    /// Catalog file to load instead of the built-in places.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint footer.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,

    /// Show the address under each place name in the place list.
    #[serde(default = "default_true")]
    pub show_address_in_list: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_key_hints: true,
            show_address_in_list: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(locale) = args.locale {
            self.locale = locale;
        }
        if let Some(catalog) = args.catalog {
            self.catalog_path = Some(catalog);
        }
        if let Some(show_key_hints) = args.show_key_hints {
            self.ui.show_key_hints = show_key_hints;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Anchors a relative `catalog_path` read from a config file at `base`.
    pub fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(path) = self.catalog_path.as_mut()
            && path.is_relative()
        {
            *path = base.join(&*path);
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("cityguide.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            locale: Locale::default(),
            catalog_path: None,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            locale = "ru"
            catalog_path = "/tmp/places.toml"

            [ui]
            show_key_hints = false

            [theme]
            accent_color = "#ff8800"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/places.toml")));
        assert!(!config.ui.show_key_hints);
        assert!(config.ui.show_address_in_list); // default_true
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.locale, Locale::En);
        assert!(config.catalog_path.is_none());
        assert!(config.ui.show_key_hints);
        assert_eq!(config.theme.accent_color, "Cyan");
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config: AppConfig = toml::from_str("locale = \"ru\"").unwrap();
        let args = CliArgs::parse_from([
            "cityguide",
            "--locale",
            "en",
            "--catalog",
            "places.toml",
            "--log-level",
            "debug",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.catalog_path, Some(PathBuf::from("places.toml")));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.theme.accent_color, "Cyan");
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_resolve_relative_catalog_path() {
        let mut config: AppConfig = toml::from_str("catalog_path = \"data/places.toml\"").unwrap();
        config.resolve_relative_paths(Path::new("/etc/cityguide"));
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/cityguide/data/places.toml"))
        );

        let mut config: AppConfig = toml::from_str("catalog_path = \"/srv/places.toml\"").unwrap();
        config.resolve_relative_paths(Path::new("/etc/cityguide"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/places.toml")));
    }
}
