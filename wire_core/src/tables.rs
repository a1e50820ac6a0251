//! # NEC Lookup Tables
//!
//! Static reference data for copper THHN/THWN-2 conductors in EMT.
//!
//! ## Tables
//!
//! | Table                | Keyed by       | Source               |
//! |----------------------|----------------|----------------------|
//! | Ampacity             | [`Gauge`]      | NEC Table 310.16     |
//! | Outer diameter       | [`Gauge`]      | NEC Ch. 9 Table 5    |
//! | DC resistance        | [`Gauge`]      | NEC Ch. 9 Table 8    |
//! | EMT internal area    | [`ConduitSize`]| NEC Ch. 9 Table 4    |
//! | Temperature derate   | ambient °F     | NEC 310.15(B)(1)     |
//! | Standard breakers    | amperes        | NEC 240.6(A)         |
//! | Equipment ground     | breaker rating | NEC Table 250.122    |
//!
//! The three per-gauge tables live in a single ordered sequence of
//! [`GaugeRecord`]s, so every gauge has exactly one ampacity, diameter and
//! resistance, in size order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::units::{Inches, SqIn};

// ============================================================================
// NEC Code Section References
// ============================================================================

/// NEC code section references for the tables and rules applied.
pub mod nec_ref {
    /// Allowable ampacities of insulated conductors
    pub const AMPACITY: &str = "NEC Table 310.16";
    /// Ambient temperature correction factors
    pub const TEMPERATURE_CORRECTION: &str = "NEC 310.15(B)(1)";
    /// Adjustment for more than three current-carrying conductors
    pub const CONDUCTOR_ADJUSTMENT: &str = "NEC 310.15(C)(1)";
    /// Percent of cross section of conduit for conductors
    pub const CONDUIT_FILL: &str = "NEC Ch. 9 Table 1";
    /// EMT dimensions
    pub const EMT_AREA: &str = "NEC Ch. 9 Table 4";
    /// Conductor dimensions
    pub const CONDUCTOR_DIAMETER: &str = "NEC Ch. 9 Table 5";
    /// Conductor properties
    pub const CONDUCTOR_RESISTANCE: &str = "NEC Ch. 9 Table 8";
    /// Standard ampere ratings
    pub const BREAKER_RATINGS: &str = "NEC 240.6(A)";
    /// Minimum size equipment grounding conductors
    pub const EQUIPMENT_GROUND: &str = "NEC Table 250.122";
    /// Continuous loads at 125%
    pub const CONTINUOUS_LOAD: &str = "NEC 210.19(A)(1)";
    /// PV source circuit current (125% × 125%)
    pub const PV_CIRCUIT_CURRENT: &str = "NEC 690.8";
}

// ============================================================================
// Wire Gauge
// ============================================================================

/// Copper conductor size, smallest to largest.
///
/// Variant order is physical size order, so `Ord` compares by size:
/// `Gauge::Awg14 < Gauge::Awg4_0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gauge {
    #[serde(rename = "14")]
    Awg14,
    #[serde(rename = "12")]
    Awg12,
    #[serde(rename = "10")]
    Awg10,
    #[serde(rename = "8")]
    Awg8,
    #[serde(rename = "6")]
    Awg6,
    #[serde(rename = "4")]
    Awg4,
    #[serde(rename = "3")]
    Awg3,
    #[serde(rename = "2")]
    Awg2,
    #[serde(rename = "1")]
    Awg1,
    #[serde(rename = "1/0")]
    Awg1_0,
    #[serde(rename = "2/0")]
    Awg2_0,
    #[serde(rename = "3/0")]
    Awg3_0,
    #[serde(rename = "4/0")]
    Awg4_0,
}

impl Gauge {
    /// All gauges in increasing physical size
    pub const ALL: [Gauge; 13] = [
        Gauge::Awg14,
        Gauge::Awg12,
        Gauge::Awg10,
        Gauge::Awg8,
        Gauge::Awg6,
        Gauge::Awg4,
        Gauge::Awg3,
        Gauge::Awg2,
        Gauge::Awg1,
        Gauge::Awg1_0,
        Gauge::Awg2_0,
        Gauge::Awg3_0,
        Gauge::Awg4_0,
    ];

    /// Largest tabulated gauge
    pub const LARGEST: Gauge = Gauge::Awg4_0;

    /// Table row for this gauge
    pub fn record(self) -> &'static GaugeRecord {
        &GAUGE_TABLE[self as usize]
    }

    /// Base ampacity at 30°C with three or fewer conductors (A)
    pub fn base_ampacity(self) -> u32 {
        self.record().ampacity_a
    }

    /// Outer diameter including insulation
    pub fn outer_diameter(self) -> Inches {
        Inches(self.record().outer_diameter_in)
    }

    /// DC resistance (Ω per 1000 ft)
    pub fn resistance_per_kft(self) -> f64 {
        self.record().resistance_ohm_per_kft
    }

    /// Size name as written on drawings ("12", "1/0", "4/0")
    pub fn display_name(self) -> &'static str {
        match self {
            Gauge::Awg14 => "14",
            Gauge::Awg12 => "12",
            Gauge::Awg10 => "10",
            Gauge::Awg8 => "8",
            Gauge::Awg6 => "6",
            Gauge::Awg4 => "4",
            Gauge::Awg3 => "3",
            Gauge::Awg2 => "2",
            Gauge::Awg1 => "1",
            Gauge::Awg1_0 => "1/0",
            Gauge::Awg2_0 => "2/0",
            Gauge::Awg3_0 => "3/0",
            Gauge::Awg4_0 => "4/0",
        }
    }

    /// Full conductor callout, e.g. "#10 AWG Copper, THWN-2"
    pub fn conductor_label(self) -> String {
        format!("#{} AWG Copper, THWN-2", self.display_name())
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AWG", self.display_name())
    }
}

impl FromStr for Gauge {
    type Err = CalcError;

    /// Accepts "10", "#10", "10 AWG", and both aught spellings ("00" or "2/0").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let bare = upper.trim_start_matches('#').trim_end_matches("AWG").trim();
        let gauge = match bare {
            "14" => Gauge::Awg14,
            "12" => Gauge::Awg12,
            "10" => Gauge::Awg10,
            "8" => Gauge::Awg8,
            "6" => Gauge::Awg6,
            "4" => Gauge::Awg4,
            "3" => Gauge::Awg3,
            "2" => Gauge::Awg2,
            "1" => Gauge::Awg1,
            "0" | "1/0" => Gauge::Awg1_0,
            "00" | "2/0" => Gauge::Awg2_0,
            "000" | "3/0" => Gauge::Awg3_0,
            "0000" | "4/0" => Gauge::Awg4_0,
            _ => return Err(CalcError::unknown_gauge(trimmed)),
        };
        Ok(gauge)
    }
}

/// One row of the per-gauge conductor table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeRecord {
    pub gauge: Gauge,
    /// Allowable ampacity, 90°C column (A)
    pub ampacity_a: u32,
    /// THHN/THWN-2 outer diameter (in)
    pub outer_diameter_in: f64,
    /// Uncoated copper DC resistance (Ω/1000 ft)
    pub resistance_ohm_per_kft: f64,
}

const fn row(gauge: Gauge, ampacity_a: u32, outer_diameter_in: f64, resistance_ohm_per_kft: f64) -> GaugeRecord {
    GaugeRecord {
        gauge,
        ampacity_a,
        outer_diameter_in,
        resistance_ohm_per_kft,
    }
}

/// Conductor table in size order. Indexed by `Gauge as usize`.
pub const GAUGE_TABLE: [GaugeRecord; 13] = [
    row(Gauge::Awg14, 25, 0.108, 3.14),
    row(Gauge::Awg12, 30, 0.126, 1.98),
    row(Gauge::Awg10, 40, 0.146, 1.24),
    row(Gauge::Awg8, 55, 0.186, 0.778),
    row(Gauge::Awg6, 75, 0.224, 0.491),
    row(Gauge::Awg4, 95, 0.260, 0.308),
    row(Gauge::Awg3, 115, 0.278, 0.245),
    row(Gauge::Awg2, 130, 0.320, 0.194),
    row(Gauge::Awg1, 145, 0.360, 0.154),
    row(Gauge::Awg1_0, 195, 0.400, 0.122),
    row(Gauge::Awg2_0, 225, 0.440, 0.077),
    row(Gauge::Awg3_0, 260, 0.488, 0.061),
    row(Gauge::Awg4_0, 305, 0.528, 0.049),
];

// ============================================================================
// Conduit Trade Sizes
// ============================================================================

/// EMT trade size, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConduitSize {
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "3/4")]
    ThreeQuarter,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "1-1/4")]
    OneAndQuarter,
    #[serde(rename = "1-1/2")]
    OneAndHalf,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "2-1/2")]
    TwoAndHalf,
    #[serde(rename = "3")]
    Three,
}

impl ConduitSize {
    /// All trade sizes in increasing order
    pub const ALL: [ConduitSize; 8] = [
        ConduitSize::Half,
        ConduitSize::ThreeQuarter,
        ConduitSize::One,
        ConduitSize::OneAndQuarter,
        ConduitSize::OneAndHalf,
        ConduitSize::Two,
        ConduitSize::TwoAndHalf,
        ConduitSize::Three,
    ];

    /// Total internal area (in²)
    pub fn internal_area(self) -> SqIn {
        SqIn(CONDUIT_TABLE[self as usize].internal_area_sq_in)
    }

    /// Trade size label ("3/4", "1-1/4")
    pub fn label(self) -> &'static str {
        match self {
            ConduitSize::Half => "1/2",
            ConduitSize::ThreeQuarter => "3/4",
            ConduitSize::One => "1",
            ConduitSize::OneAndQuarter => "1-1/4",
            ConduitSize::OneAndHalf => "1-1/2",
            ConduitSize::Two => "2",
            ConduitSize::TwoAndHalf => "2-1/2",
            ConduitSize::Three => "3",
        }
    }

    /// Report callout, e.g. "3/4-inch (Schedule 40 PVC or EMT)"
    pub fn description(self) -> String {
        format!("{}-inch (Schedule 40 PVC or EMT)", self.label())
    }
}

impl fmt::Display for ConduitSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.label())
    }
}

impl FromStr for ConduitSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.trim().trim_end_matches('"').trim_end_matches("-inch").trim();
        ConduitSize::ALL
            .into_iter()
            .find(|size| size.label() == bare)
            .ok_or_else(|| CalcError::unknown_conduit_size(s.trim()))
    }
}

/// One row of the EMT area table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConduitRecord {
    pub size: ConduitSize,
    pub internal_area_sq_in: f64,
}

/// EMT internal areas in trade-size order. Indexed by `ConduitSize as usize`.
pub const CONDUIT_TABLE: [ConduitRecord; 8] = [
    ConduitRecord { size: ConduitSize::Half, internal_area_sq_in: 0.122 },
    ConduitRecord { size: ConduitSize::ThreeQuarter, internal_area_sq_in: 0.213 },
    ConduitRecord { size: ConduitSize::One, internal_area_sq_in: 0.346 },
    ConduitRecord { size: ConduitSize::OneAndQuarter, internal_area_sq_in: 0.598 },
    ConduitRecord { size: ConduitSize::OneAndHalf, internal_area_sq_in: 0.832 },
    ConduitRecord { size: ConduitSize::Two, internal_area_sq_in: 1.342 },
    ConduitRecord { size: ConduitSize::TwoAndHalf, internal_area_sq_in: 2.036 },
    ConduitRecord { size: ConduitSize::Three, internal_area_sq_in: 2.978 },
];

// ============================================================================
// Temperature Derate Bands
// ============================================================================

/// Ambient temperature band: applies at or above `min_temp_f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBand {
    pub min_temp_f: f64,
    pub factor: f64,
}

/// Ascending by threshold; factors are non-increasing.
pub const TEMPERATURE_BANDS: [TemperatureBand; 6] = [
    TemperatureBand { min_temp_f: 78.0, factor: 1.0 },
    TemperatureBand { min_temp_f: 87.0, factor: 0.91 },
    TemperatureBand { min_temp_f: 96.0, factor: 0.82 },
    TemperatureBand { min_temp_f: 105.0, factor: 0.71 },
    TemperatureBand { min_temp_f: 114.0, factor: 0.58 },
    TemperatureBand { min_temp_f: 122.0, factor: 0.41 },
];

// ============================================================================
// Overcurrent Protection and Grounding
// ============================================================================

/// Standard inverse-time breaker ratings (A), ascending
pub const BREAKER_LADDER: [u32; 18] = [
    15, 20, 25, 30, 35, 40, 45, 50, 60, 70, 80, 90, 100, 110, 125, 150, 175, 200,
];

/// One row of the equipment-grounding-conductor table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundRecord {
    /// Largest breaker rating this row covers (A)
    pub max_breaker_a: u32,
    pub gauge: Gauge,
}

/// Ascending by `max_breaker_a`.
pub const GROUND_TABLE: [GroundRecord; 8] = [
    GroundRecord { max_breaker_a: 15, gauge: Gauge::Awg14 },
    GroundRecord { max_breaker_a: 20, gauge: Gauge::Awg12 },
    GroundRecord { max_breaker_a: 60, gauge: Gauge::Awg10 },
    GroundRecord { max_breaker_a: 100, gauge: Gauge::Awg8 },
    GroundRecord { max_breaker_a: 200, gauge: Gauge::Awg6 },
    GroundRecord { max_breaker_a: 300, gauge: Gauge::Awg4 },
    GroundRecord { max_breaker_a: 400, gauge: Gauge::Awg3 },
    GroundRecord { max_breaker_a: 500, gauge: Gauge::Awg2 },
];

/// Ground size for breakers above the last table row
pub const GROUND_FALLBACK: Gauge = Gauge::Awg1_0;
