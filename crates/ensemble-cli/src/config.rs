use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for ensemble.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. Environment variables (ENSEMBLE_* prefix)
/// 2. Config file (~/.config/ensemble/config.toml)
/// 3. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory where band JSON files are kept.
    ///
    /// Can be set via:
    /// - ENV: ENSEMBLE_DATA_DIR
    /// - Config: data_dir = "/path/to/bands"
    /// - Default: ~/.local/share/ensemble
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/ensemble/config.toml
    /// Reads environment variables with ENSEMBLE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("ensemble");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Get the default data directory for band files.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ensemble")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/ensemble/config.toml
/// - macOS: ~/Library/Application Support/ensemble/config.toml
/// - Windows: %APPDATA%\ensemble\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ensemble")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Ensemble Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. Environment variables (ENSEMBLE_* prefix)
# 2. This config file
# 3. Built-in defaults (lowest priority)

# Directory where band JSON files are kept
#
# Band file arguments that don't resolve as given are looked up here.
#
# Can also be set via:
# - Environment: ENSEMBLE_DATA_DIR=/path/to/bands
#
# Default: Platform-specific data directory
#data_dir = "/path/to/bands"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.data_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }
}
