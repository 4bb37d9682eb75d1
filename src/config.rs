//! Range configuration parameters
//!
//! Tunables for the range model. The binary runs with the defaults;
//! `from_json` exists for hosts that want to override them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of stovetop burners. Fixed by the hardware.
pub const BURNER_COUNT: usize = 4;

/// Core range configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Oven temperature (Celsius) restored whenever the oven is turned off
    pub ambient_temp_c: i32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self { ambient_temp_c: 23 }
    }
}

impl RangeConfig {
    /// Parse a JSON config document. Missing fields take their default
    /// values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|_| ConfigError::Corrupted)
    }
}
