//! Planner configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Planning behavior knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Deadline for the oracle call in seconds; on expiry the planner
    /// orders the tour locally
    pub oracle_timeout_secs: u64,
    /// Maximum number of layouts kept in the shared model cache
    pub max_cached_layouts: usize,
}

impl PlannerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With oracle deadline
    #[inline]
    #[must_use]
    pub fn with_oracle_timeout_secs(mut self, secs: u64) -> Self {
        self.oracle_timeout_secs = secs;
        self
    }

    /// With layout cache capacity
    #[inline]
    #[must_use]
    pub fn with_max_cached_layouts(mut self, max: usize) -> Self {
        self.max_cached_layouts = max;
        self
    }

    /// Oracle deadline as a [`Duration`]
    #[inline]
    #[must_use]
    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_secs(self.oracle_timeout_secs)
    }

    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to defaults.
    ///
    /// # Errors
    /// [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            oracle_timeout_secs: 20,
            max_cached_layouts: 64,
        }
    }
}
