//! Configuration type definitions.

use crate::constants::{DEFAULT_MAX_DURATION, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default merge settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default merge settings, overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Largest gap in seconds between blocks that still merges them.
    pub threshold: f64,

    /// Largest span in seconds a merged block may reach.
    pub max_duration: f64,

    /// Keep blocks with fewer than two meaningful characters.
    pub keep_single_char: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_duration: DEFAULT_MAX_DURATION,
            keep_single_char: false,
        }
    }
}

/// How results are reported on stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain text for people.
    #[default]
    Human,
    /// One JSON envelope per event.
    Json,
}

impl OutputMode {
    /// Whether output is machine-readable.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}
