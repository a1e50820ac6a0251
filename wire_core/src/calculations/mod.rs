//! # Scenario Engines
//!
//! Each engine orchestrates the selectors in [`crate::sizing`] into a full
//! sizing for one workflow. Every engine follows the pattern:
//!
//! - `*Input` - scalar inputs (JSON-serializable) with `validate()`
//! - `*SizingResult` - selections, `None` where the tables run out
//! - `size(input)` - pure sizing of pre-validated input
//! - `calculate(input) -> Result<*SizingResult, CalcError>` - validate, then size
//!
//! ## Available Engines
//!
//! - [`load`] - branch circuit for a single load (A, kW or HP)
//! - [`pv`] - string, combiner and inverter-output runs of a PV system

pub mod load;
pub mod pv;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use load::{LoadInput, LoadQuantity, LoadSizingResult};
pub use pv::{PvAcResult, PvDcResult, PvInput, PvSizingResult};

/// Enum wrapper for all calculation types.
///
/// Lets a caller hold either workflow's input and dispatch on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Single-load branch circuit
    Load(LoadInput),
    /// Photovoltaic system
    Pv(PvInput),
}

impl CalculationItem {
    /// Label for this calculation
    pub fn label(&self) -> String {
        match self {
            CalculationItem::Load(l) => l.description.clone(),
            CalculationItem::Pv(p) => format!("{:.0} W PV system", p.system_watts),
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Load(_) => "Load",
            CalculationItem::Pv(_) => "PV",
        }
    }

    /// Every validation problem for the wrapped input
    pub fn validation_errors(&self) -> Vec<CalcError> {
        match self {
            CalculationItem::Load(l) => l.validation_errors(),
            CalculationItem::Pv(p) => p.validation_errors(),
        }
    }

    /// Validate and run the matching engine
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Load(l) => load::calculate(l).map(CalculationOutput::Load),
            CalculationItem::Pv(p) => pv::calculate(p).map(CalculationOutput::Pv),
        }
    }
}

/// Result of [`CalculationItem::calculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Load(LoadSizingResult),
    Pv(PvSizingResult),
}

impl CalculationOutput {
    pub fn is_complete(&self) -> bool {
        match self {
            CalculationOutput::Load(r) => r.is_complete(),
            CalculationOutput::Pv(r) => r.is_complete(),
        }
    }

    pub fn voltage_drop_ok(&self, limit_percent: f64) -> bool {
        match self {
            CalculationOutput::Load(r) => r.voltage_drop_ok(limit_percent),
            CalculationOutput::Pv(r) => r.voltage_drop_ok(limit_percent),
        }
    }

    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        match self {
            CalculationOutput::Load(r) => r.format_report(),
            CalculationOutput::Pv(r) => r.format_report(),
        }
    }
}
