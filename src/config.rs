//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Name shown for the human (X).
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the computer (O).
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Print every state change as a JSON line.
    #[serde(default)]
    json_events: bool,
}

fn default_human_name() -> String {
    "You".to_string()
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_thinking_delay_ms() -> u64 {
    500
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            human = %config.human_name,
            computer = %config.computer_name,
            delay_ms = config.thinking_delay_ms,
            "Config loaded"
        );
        Ok(config)
    }

    /// Overrides the thinking delay.
    pub fn with_thinking_delay_ms(mut self, ms: u64) -> Self {
        self.thinking_delay_ms = ms;
        self
    }

    /// Enables or disables JSON event output.
    pub fn with_json_events(mut self, enabled: bool) -> Self {
        self.json_events = enabled;
        self
    }

    /// Thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            computer_name: default_computer_name(),
            thinking_delay_ms: default_thinking_delay_ms(),
            json_events: false,
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
