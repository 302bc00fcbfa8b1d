//! Host configuration file support.
//!
//! Reads refresh intervals and the widget title from a TOML file. The bell
//! schedule itself is compiled in and cannot be configured here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{HallPassError, HallPassResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HALLPASS_CONFIG";

/// Configuration loaded from `hallpass.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HallPassConfig {
    #[serde(default)]
    pub timers: TimerSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Refresh cadence of the two recurring tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(default = "default_period_refresh_secs")]
    pub period_refresh_secs: u64,
    #[serde(default = "default_elapsed_refresh_secs")]
    pub elapsed_refresh_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_period_refresh_secs() -> u64 {
    30
}

fn default_elapsed_refresh_secs() -> u64 {
    1
}

fn default_title() -> String {
    "Bathroom Pass".to_string()
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            period_refresh_secs: default_period_refresh_secs(),
            elapsed_refresh_secs: default_elapsed_refresh_secs(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl TimerSettings {
    pub fn period_refresh(&self) -> Duration {
        Duration::from_secs(self.period_refresh_secs)
    }

    pub fn elapsed_refresh(&self) -> Duration {
        Duration::from_secs(self.elapsed_refresh_secs)
    }
}

impl HallPassConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> HallPassResult<Self> {
        let config: HallPassConfig = toml::from_str(content).map_err(|e| {
            HallPassError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(HallPassConfig)` if successful
    /// * `Err(HallPassError)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> HallPassResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            HallPassError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Uses `$HALLPASS_CONFIG` when set, otherwise searches for
    /// `hallpass.toml` in:
    /// 1. Current directory
    /// 2. `hallpass/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(HallPassConfig))` if a file was found and parsed
    /// * `Ok(None)` if no file exists in the standard locations
    /// * `Err(HallPassError)` if a file was found but is invalid
    pub fn from_default_location() -> HallPassResult<Option<Self>> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(explicit).map(Some);
        }

        let search_paths = [
            PathBuf::from("hallpass.toml"),
            PathBuf::from("hallpass/hallpass.toml"),
            PathBuf::from("../hallpass.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Load from the default location, falling back to built-in defaults.
    pub fn load_or_default() -> HallPassResult<Self> {
        Ok(Self::from_default_location()?.unwrap_or_default())
    }

    pub fn validate(&self) -> HallPassResult<()> {
        if self.timers.period_refresh_secs == 0 {
            return Err(HallPassError::ConfigurationError(
                "timers.period_refresh_secs must be greater than zero".to_string(),
            ));
        }
        if self.timers.elapsed_refresh_secs == 0 {
            return Err(HallPassError::ConfigurationError(
                "timers.elapsed_refresh_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
