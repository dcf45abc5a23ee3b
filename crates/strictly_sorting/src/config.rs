//! Coach configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strictly_bubble::{DEFAULT_LEN, DEFAULT_MAX, DEFAULT_MIN, ListSpec};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_sorting.toml";

/// Settings for list generation, auto-play pacing and logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct CoachConfig {
    /// Number of elements in generated lists.
    #[serde(default = "default_list_len")]
    list_len: usize,

    /// Smallest value in generated lists.
    #[serde(default = "default_min_value")]
    min_value: u32,

    /// Largest value in generated lists.
    #[serde(default = "default_max_value")]
    max_value: u32,

    /// Pause between auto-play snapshots, in milliseconds.
    #[serde(default = "default_auto_delay_ms")]
    auto_delay_ms: u64,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    #[setters(into)]
    log_file: PathBuf,
}

#[instrument]
fn default_list_len() -> usize {
    DEFAULT_LEN
}

#[instrument]
fn default_min_value() -> u32 {
    DEFAULT_MIN
}

#[instrument]
fn default_max_value() -> u32 {
    DEFAULT_MAX
}

#[instrument]
fn default_auto_delay_ms() -> u64 {
    250
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_sorting.log")
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            list_len: default_list_len(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            auto_delay_ms: default_auto_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl CoachConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(list_len = config.list_len, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the list settings can produce a list.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value > self.max_value {
            return Err(ConfigError::new(format!(
                "min_value {} is greater than max_value {}",
                self.min_value, self.max_value
            )));
        }
        let available = (self.max_value - self.min_value) as u64 + 1;
        if self.list_len as u64 > available {
            return Err(ConfigError::new(format!(
                "list_len {} needs more distinct values than {}..={} holds",
                self.list_len, self.min_value, self.max_value
            )));
        }
        Ok(())
    }

    /// The list shape generated lists should have.
    pub fn list_spec(&self) -> ListSpec {
        ListSpec::new(self.list_len, self.min_value, self.max_value)
    }

    /// Pause between auto-play snapshots.
    pub fn auto_delay(&self) -> Duration {
        Duration::from_millis(self.auto_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
