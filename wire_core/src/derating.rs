//! # Ampacity Derating
//!
//! Adjusted ampacity for a conductor under the installation's conditions:
//!
//! ```text
//! I' = floor(I_base × C_t × C_f)
//! ```
//!
//! | Factor | Description                           | Reference             |
//! |--------|---------------------------------------|-----------------------|
//! | C_t    | Ambient temperature correction        | NEC 310.15(B)(1)      |
//! | C_f    | More than three conductors in raceway | NEC 310.15(C)(1)      |
//!
//! The product is truncated to whole amperes, never rounded up.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::tables::{nec_ref, Gauge, TEMPERATURE_BANDS};

/// Ambient temperature correction factor.
///
/// Picks the band with the highest threshold at or below `ambient_temp_f`.
/// Temperatures below every threshold use 1.0.
///
/// ```rust
/// use wire_core::derating::temperature_factor;
///
/// assert_eq!(temperature_factor(86.0), 1.0);
/// assert_eq!(temperature_factor(87.0), 0.91);
/// assert_eq!(temperature_factor(60.0), 1.0);
/// ```
pub fn temperature_factor(ambient_temp_f: f64) -> f64 {
    TEMPERATURE_BANDS
        .iter()
        .rev()
        .find(|band| ambient_temp_f >= band.min_temp_f)
        .map(|band| band.factor)
        .unwrap_or(1.0)
}

/// Conductor-count band in a single raceway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillBand {
    /// 3 or fewer conductors
    UpToThree,
    /// 4-6 conductors
    FourToSix,
    /// 7-9 conductors
    SevenToNine,
    /// 10-20 conductors
    TenToTwenty,
    /// More than 20 conductors (outside the adjustment table)
    OverTwenty,
}

impl FillBand {
    /// Band for the given number of conductors
    pub fn for_count(conductor_count: u32) -> Self {
        match conductor_count {
            0..=3 => FillBand::UpToThree,
            4..=6 => FillBand::FourToSix,
            7..=9 => FillBand::SevenToNine,
            10..=20 => FillBand::TenToTwenty,
            _ => FillBand::OverTwenty,
        }
    }

    /// Adjustment factor
    pub fn factor(self) -> f64 {
        match self {
            FillBand::UpToThree => 1.0,
            FillBand::FourToSix => 0.8,
            FillBand::SevenToNine => 0.7,
            FillBand::TenToTwenty => 0.5,
            // Not tabulated; no adjustment is applied.
            FillBand::OverTwenty => 1.0,
        }
    }
}

/// Conductor-count adjustment factor.
pub fn fill_factor(conductor_count: u32) -> f64 {
    FillBand::for_count(conductor_count).factor()
}

/// Derated ampacity of `gauge` at `ambient_temp_f` with `conductor_count`
/// conductors sharing the raceway (A, truncated).
///
/// ```rust
/// use wire_core::derating::ampacity;
/// use wire_core::tables::Gauge;
///
/// // #8: 55 A × 0.91 × 0.8 = 40.04 → 40 A
/// assert_eq!(ampacity(Gauge::Awg8, 90.0, 4), 40);
/// ```
pub fn ampacity(gauge: Gauge, ambient_temp_f: f64, conductor_count: u32) -> u32 {
    derate(gauge, ambient_temp_f, conductor_count).adjusted_ampacity_a
}

/// Full derating breakdown for a gauge.
pub fn derate(gauge: Gauge, ambient_temp_f: f64, conductor_count: u32) -> DeratingSummary {
    let base = gauge.base_ampacity();
    let c_t = temperature_factor(ambient_temp_f);
    let c_f = fill_factor(conductor_count);
    let adjusted = (base as f64 * c_t * c_f).floor() as u32;
    trace!(%gauge, base, c_t, c_f, adjusted, "derated ampacity");

    DeratingSummary {
        gauge,
        base_ampacity_a: base,
        ambient_temp_f,
        temperature_factor: c_t,
        conductor_count,
        fill_factor: c_f,
        adjusted_ampacity_a: adjusted,
    }
}

/// How a conductor's ampacity was derated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeratingSummary {
    pub gauge: Gauge,
    /// Table ampacity (A)
    pub base_ampacity_a: u32,
    pub ambient_temp_f: f64,
    /// C_t
    pub temperature_factor: f64,
    pub conductor_count: u32,
    /// C_f
    pub fill_factor: f64,
    /// floor(base × C_t × C_f) (A)
    pub adjusted_ampacity_a: u32,
}

impl DeratingSummary {
    /// Combined derate factor C_t × C_f
    pub fn net_factor(&self) -> f64 {
        self.temperature_factor * self.fill_factor
    }

    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        format!(
            "Ampacity Derating ({})\n\
             ================================================\n\
             Base ampacity           = {} A    {}\n\
             C_t  ({:.0}°F ambient)    = {:.2}    {}\n\
             C_f  ({} conductors)     = {:.2}    {}\n\
             ------------------------------------------------\n\
             Adjusted ampacity       = {} A",
            self.gauge,
            self.base_ampacity_a, nec_ref::AMPACITY,
            self.ambient_temp_f, self.temperature_factor, nec_ref::TEMPERATURE_CORRECTION,
            self.conductor_count, self.fill_factor, nec_ref::CONDUCTOR_ADJUSTMENT,
            self.adjusted_ampacity_a,
        )
    }
}
