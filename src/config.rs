//! Configuration management for Taskaz
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_API_URL, TOAST_DEFAULT_SECONDS,
    TOAST_MAX_SECONDS, TOAST_MIN_SECONDS,
};
use crate::icons::IconTheme;
use crate::ui::routes::Route;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Backend connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Taskaz REST API
    pub base_url: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long toast notifications stay on screen, in seconds
    pub toast_seconds: u64,
    /// Route opened on startup: "/" or "/task-lists/{id}"
    pub start_route: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for due dates further than a month away
    pub date_format: String,
    /// Time format for due dates
    pub time_format: String,
    /// Show descriptions on cards
    pub show_descriptions: bool,
    /// Icon theme: "unicode", "emoji" or "ascii"
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_seconds: TOAST_DEFAULT_SECONDS,
            start_route: Route::Dashboard.path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%b %-d, %Y".to_string(),
            time_format: "%H:%M".to_string(),
            show_descriptions: true,
            icon_theme: IconTheme::Unicode,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(base_url)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL (from `TASKAZ_API_URL`) and re-validate
    pub fn apply_api_url_override(&mut self, base_url: String) -> Result<()> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.api.base_url = trimmed.to_string();
        self.validate()
            .with_context(|| format!("Invalid {} override", API_URL_ENV))
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate API base URL
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        // Validate UI settings
        if !(TOAST_MIN_SECONDS..=TOAST_MAX_SECONDS).contains(&self.ui.toast_seconds) {
            anyhow::bail!(
                "toast_seconds must be between {} and {} seconds, got {}",
                TOAST_MIN_SECONDS,
                TOAST_MAX_SECONDS,
                self.ui.toast_seconds
            );
        }
        self.start_route()?;

        // Validate date/time formats
        validate_format(&self.display.date_format, "date_format")?;
        validate_format(&self.display.time_format, "time_format")?;

        // Validate logging
        self.log_level()?;

        Ok(())
    }

    /// Parsed start route
    pub fn start_route(&self) -> Result<Route> {
        Route::parse(&self.ui.start_route).with_context(|| format!("Invalid start_route '{}'", self.ui.start_route))
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.logging.level)
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.logging.level))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Taskaz Configuration File\n# Generated on {}\n# {} overrides [api] base_url\n\n",
            chrono::Local::now().format("%Y-%m-%d"),
            API_URL_ENV
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

/// A chrono format string is invalid when rendering it yields an error item.
fn validate_format(format: &str, field: &str) -> Result<()> {
    use chrono::format::{Item, StrftimeItems};

    if format.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", field);
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("Invalid {} '{}'", field, format);
    }
    Ok(())
}
