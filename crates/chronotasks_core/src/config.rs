//! Core configuration.
//!
//! # Responsibility
//! - Hold tunables for the store: achievement threshold, transition delay,
//!   id strictness and demo seeding.
//! - Parse and validate TOML configuration text.
//!
//! # Invariants
//! - `achievement_threshold` is at least 1 after validation.
//! - Missing keys take defaults; unknown keys are rejected.

use crate::achievement::DEFAULT_ACHIEVEMENT_THRESHOLD;
use crate::transition::DEFAULT_TRANSITION_DELAY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Qualifying completions needed per achievement unlock.
    pub achievement_threshold: u32,
    /// Dimension transition delay in milliseconds.
    pub transition_delay_ms: u64,
    /// Surface `NotFound` for unknown task ids instead of a silent no-op.
    pub strict_ids: bool,
    /// Seed the six built-in demo tasks on startup.
    pub seed_demo_tasks: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            achievement_threshold: DEFAULT_ACHIEVEMENT_THRESHOLD,
            transition_delay_ms: DEFAULT_TRANSITION_DELAY.as_millis() as u64,
            strict_ids: false,
            seed_demo_tasks: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "failed to parse config: {message}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl CoreConfig {
    /// Parses TOML text and validates the result.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.achievement_threshold == 0 {
            return Err(ConfigError::Invalid(
                "achievement_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}
