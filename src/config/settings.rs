//! TOML-based configuration for chartplan.
//!
//! Supports a config file (chartplan.toml):
//! ```toml
//! [runtime]
//! debounce_ms = 500
//!
//! [store]
//! namespace = "charts"
//! path = "./data/charts"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Reactive runtime configuration.
    pub runtime: RuntimeSettings,

    /// Persistence configuration.
    pub store: StoreSettings,
}

/// Reactive runtime configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RuntimeSettings {
    /// Quiescence window for coalescing config/model changes, in
    /// milliseconds.
    pub debounce_ms: u64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

/// Persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Namespace the chart documents are scoped to.
    pub namespace: String,

    /// Directory for chart documents. Defaults to the user config dir.
    pub path: Option<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            namespace: "charts".to_string(),
            path: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `CHARTPLAN_CONFIG`
    /// 2. `./chartplan.toml`
    /// 3. `~/.config/chartplan/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("CHARTPLAN_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("chartplan.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("chartplan").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }

    /// The debounce window as a `Duration`.
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.runtime.debounce_ms)
    }
}
