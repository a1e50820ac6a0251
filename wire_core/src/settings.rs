//! # Calculator Settings
//!
//! User preferences for the presentation layer, stored as JSON. Every field
//! has a default so a partial file (or none at all) is valid.
//!
//! The engine's code constants (125% continuous factor, 40% fill, ...) are
//! not settings; they live next to the calculations that use them.
//!
//! ## Example
//!
//! ```json
//! {
//!   "default_ambient_temp_f": 95.0,
//!   "voltage_drop_limit_percent": 2.0,
//!   "output": "Json"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::validation;

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable report tables
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Calculator preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ambient temperature used when none is entered (°F)
    pub default_ambient_temp_f: f64,

    /// Voltage drop above this percentage is flagged in reports
    pub voltage_drop_limit_percent: f64,

    /// Default output format
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_ambient_temp_f: 86.0,
            voltage_drop_limit_percent: 3.0,
            output: OutputFormat::Human,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read settings", path.display().to_string(), e.to_string())
        })?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Read settings from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check that the stored values are usable.
    pub fn validate(&self) -> CalcResult<()> {
        validation::ambient_temp("default_ambient_temp_f", self.default_ambient_temp_f)?;
        validation::positive(
            "voltage_drop_limit_percent",
            self.voltage_drop_limit_percent,
            "Voltage drop limit must be positive",
        )?;
        Ok(())
    }
}
