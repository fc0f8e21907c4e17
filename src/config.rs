//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::wizard::{ExportKind, ExportSettings};

/// Log levels accepted by `[logging] level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory artifacts are written to when `--out-dir` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Export defaults used when a project manifest has no `[export]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Artifact kind
    pub format: ExportKind,
    /// Bundle README, style guide and component docs
    pub include_documentation: bool,
    /// Bundle HTML examples
    pub include_examples: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportKind::Bundle,
            include_documentation: true,
            include_examples: true,
        }
    }
}

impl ExportConfig {
    /// The defaults as wizard export settings.
    pub fn settings(&self) -> ExportSettings {
        ExportSettings {
            format: self.format,
            include_documentation: self.include_documentation,
            include_examples: self.include_examples,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/tokenforge/config.toml`
/// - macOS: `~/Library/Application Support/tokenforge/config.toml`
/// - Windows: `%APPDATA%\tokenforge\config.toml`
///
/// `TOKENFORGE_CONFIG_DIR` replaces the platform directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging defaults
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `TOKENFORGE_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `tokenforge`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::parse(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid configuration TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "Saved config");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `logging.level` is one of [`LOG_LEVELS`]
    /// - `paths.output_dir` is not an existing regular file
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        if let Some(dir) = &self.paths.output_dir {
            if dir.is_file() {
                anyhow::bail!("Output directory is a file: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Sets the log level with validation.
    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        let previous = std::mem::replace(&mut self.logging.level, level.to_lowercase());
        if let Err(error) = self.validate() {
            self.logging.level = previous;
            return Err(error);
        }
        Ok(())
    }

    /// Output directory for artifacts, defaulting to the current directory.
    pub fn output_dir(&self) -> PathBuf {
        self.paths
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
