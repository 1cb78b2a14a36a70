//! Configuration System
//!
//! Handles loading the dashboard configuration from TOML. Every field has a
//! default, so an empty file (or no file at all) yields the stock page.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub elements: ElementIds,

    #[serde(default)]
    pub chart: ChartSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Preference persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Key the theme preference is stored under
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_theme_key() -> String {
    "theme".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: default_theme_key(),
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// Theme used when nothing valid is stored
    #[serde(default)]
    pub default: Theme,
}

/// DOM ids of the elements the page wires up
#[derive(Debug, Clone, Deserialize)]
pub struct ElementIds {
    #[serde(default = "default_sidebar_toggle")]
    pub sidebar_toggle: String,

    #[serde(default = "default_wrapper")]
    pub wrapper: String,

    #[serde(default = "default_chart_canvas")]
    pub chart_canvas: String,

    #[serde(default = "default_theme_toggle")]
    pub theme_toggle: String,

    /// Class flipped on the wrapper by the sidebar toggle
    #[serde(default = "default_layout_toggled_class")]
    pub layout_toggled_class: String,
}

fn default_sidebar_toggle() -> String {
    "sidebar-toggle".to_string()
}

fn default_wrapper() -> String {
    "wrapper".to_string()
}

fn default_chart_canvas() -> String {
    "salesChart".to_string()
}

fn default_theme_toggle() -> String {
    "theme-toggle".to_string()
}

fn default_layout_toggled_class() -> String {
    "sidebar-toggled".to_string()
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            sidebar_toggle: default_sidebar_toggle(),
            wrapper: default_wrapper(),
            chart_canvas: default_chart_canvas(),
            theme_toggle: default_theme_toggle(),
            layout_toggled_class: default_layout_toggled_class(),
        }
    }
}

/// Chart styling that does not depend on the theme
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSettings {
    /// Height in pixels over which the fill fades out
    #[serde(default = "default_gradient_height")]
    pub gradient_height: f64,

    /// Prefix of y-axis tick labels
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Bezier curve tension of the line
    #[serde(default = "default_tension")]
    pub tension: f64,

    #[serde(default = "default_point_hover_radius")]
    pub point_hover_radius: u32,
}

fn default_gradient_height() -> f64 {
    400.0
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_tension() -> f64 {
    0.4
}

fn default_point_hover_radius() -> u32 {
    7
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            gradient_height: default_gradient_height(),
            currency_symbol: default_currency_symbol(),
            tension: default_tension(),
            point_hover_radius: default_point_hover_radius(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether log lines are emitted as JSON objects
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl DashboardConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML text (used for the embedded web config)
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            error: e.to_string(),
        })
    }

    /// Load from default locations, falling back to built-in defaults
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("seller-dashboard").join("dashboard.toml")),
            Some(PathBuf::from("./dashboard.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config");
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply `SELLER_DASHBOARD_*` environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Storage overrides
        if let Some(key) = var("SELLER_DASHBOARD_THEME_KEY") {
            self.storage.theme_key = key;
        }

        // Theme overrides
        if let Some(theme) = var("SELLER_DASHBOARD_DEFAULT_THEME") {
            match theme.parse() {
                Ok(theme) => self.theme.default = theme,
                Err(e) => tracing::warn!("Ignoring SELLER_DASHBOARD_DEFAULT_THEME: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("SELLER_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SELLER_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Seller Dashboard Configuration

[storage]
# localStorage key holding the theme preference
theme_key = "theme"

[theme]
# Theme used when no valid preference is stored ("dark" or "light")
default = "dark"

[elements]
sidebar_toggle = "sidebar-toggle"
wrapper = "wrapper"
chart_canvas = "salesChart"
theme_toggle = "theme-toggle"
layout_toggled_class = "sidebar-toggled"

[chart]
# Height (px) over which the area fill fades to transparent
gradient_height = 400.0
# Prefix for y-axis tick labels
currency_symbol = "$"
tension = 0.4
point_hover_radius = 7

[logging]
# Log level (trace, debug, info, warn, error)
level = "info"
# Log format (pretty, json)
format = "pretty"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.storage.theme_key, "theme");
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.elements.chart_canvas, "salesChart");
        assert_eq!(config.elements.layout_toggled_class, "sidebar-toggled");
        assert_eq!(config.chart.gradient_height, 400.0);
        assert_eq!(config.chart.currency_symbol, "$");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = DashboardConfig::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config.storage.theme_key, "theme");
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.chart.tension, 0.4);
        assert_eq!(config.chart.point_hover_radius, 7);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = DashboardConfig::from_toml_str(include_str!("../dashboard.toml")).unwrap();
        let defaults = DashboardConfig::default();
        assert_eq!(config.storage.theme_key, defaults.storage.theme_key);
        assert_eq!(config.theme.default, defaults.theme.default);
        assert_eq!(config.elements.theme_toggle, defaults.elements.theme_toggle);
        assert_eq!(config.chart.currency_symbol, defaults.chart.currency_symbol);
    }

    #[test]
    fn test_partial_config() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [theme]
            default = "light"

            [chart]
            currency_symbol = "€"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme.default, Theme::Light);
        assert_eq!(config.chart.currency_symbol, "€");
        assert_eq!(config.chart.gradient_height, 400.0);
        assert_eq!(config.elements.wrapper, "wrapper");
    }

    #[test]
    fn test_invalid_theme_rejected() {
        let result = DashboardConfig::from_toml_str("[theme]\ndefault = \"sepia\"\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ntheme_key = \"seller-theme\"").unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.storage.theme_key, "seller-theme");
    }

    #[test]
    fn test_json_log_format() {
        let config = DashboardConfig::from_toml_str("[logging]\nformat = \"json\"\n").unwrap();
        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SELLER_DASHBOARD_THEME_KEY", "seller-theme"),
            ("SELLER_DASHBOARD_DEFAULT_THEME", "light"),
            ("SELLER_DASHBOARD_LOG_LEVEL", "debug"),
            ("SELLER_DASHBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = DashboardConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.theme_key, "seller-theme");
        assert_eq!(config.theme.default, Theme::Light);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_theme_override_ignored() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(|name| {
            (name == "SELLER_DASHBOARD_DEFAULT_THEME").then(|| "sepia".to_string())
        });
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.storage.theme_key, "theme");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DashboardConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
