//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::CenteringOptions;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "KITCHEN_LAYOUT_CONFIG_DIR";

/// Catalog file locations. Unset paths use the embedded catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LibraryConfig {
    /// Material catalog (JSON or JSON5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<PathBuf>,
    /// Module catalog (JSON or JSON5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<PathBuf>,
}

/// Default centering applied by `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CenteringConfig {
    /// Center generated scenes in the room
    pub enabled: bool,
    /// Extra X translation
    pub offset_x: f64,
    /// Y translation
    pub offset_y: f64,
    /// Extra Z translation
    pub offset_z: f64,
}

impl CenteringConfig {
    /// Engine options for these settings.
    #[must_use]
    pub const fn to_options(self) -> CenteringOptions {
        CenteringOptions {
            enabled: self.enabled,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            offset_z: self.offset_z,
        }
    }
}

/// Output formatting preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KitchenLayout/config.toml`
/// - macOS: `~/Library/Application Support/KitchenLayout/config.toml`
/// - Windows: `%APPDATA%\KitchenLayout\config.toml`
///
/// `KITCHEN_LAYOUT_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - configured catalog paths must exist
/// - centering offsets must be finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog locations
    #[serde(default)]
    pub libraries: LibraryConfig,
    /// Default centering
    #[serde(default)]
    pub centering: CenteringConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
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
    /// - Linux: `~/.config/KitchenLayout/`
    /// - macOS: `~/Library/Application Support/KitchenLayout/`
    /// - Windows: `%APPDATA%\KitchenLayout\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("KitchenLayout");

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
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, or defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        // Atomic rename
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - configured material and module catalogs exist
    /// - centering offsets are finite numbers
    pub fn validate(&self) -> Result<()> {
        let catalogs = [
            ("material", &self.libraries.materials),
            ("module", &self.libraries.modules),
        ];
        for (kind, path) in catalogs {
            if let Some(path) = path {
                if !path.is_file() {
                    anyhow::bail!("{kind} library does not exist: {}", path.display());
                }
            }
        }

        let centering = &self.centering;
        if ![centering.offset_x, centering.offset_y, centering.offset_z]
            .iter()
            .all(|offset| offset.is_finite())
        {
            anyhow::bail!("centering offsets must be finite numbers");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.libraries.materials, None);
        assert!(!config.centering.enabled);
        assert!(config.output.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_library_paths() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("materials.json");

        let mut config = Config::new();
        config.libraries.materials = Some(path.clone());
        assert!(config.validate().is_err());

        fs::write(&path, "{}").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_offsets() {
        let mut config = Config::new();
        config.centering.offset_x = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.centering.enabled = true;
        config.centering.offset_z = -50.0;
        config.output.pretty = false;
        config.save_to(&config_file)?;

        assert!(config_file.exists());
        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.centering.to_options().offset_z, -50.0);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_returns_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("config.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[centering]\nenabled = true\n")?;

        let loaded = Config::load_from(&config_file)?;
        assert!(loaded.centering.enabled);
        assert_eq!(loaded.centering.offset_x, 0.0);
        assert!(loaded.output.pretty);
        Ok(())
    }
}
