//! # Unit Types
//!
//! Lightweight newtype wrappers for the electrical quantities the engine
//! converts between. Serialization is transparent so JSON stays plain numbers.
//!
//! ## Units
//!
//! - Current: amperes (A)
//! - Potential: volts (V)
//! - Power: watts (W), kilowatts (kW), horsepower (HP, 746 W)
//! - Length: inches (in), for conductor diameters
//! - Area: square inches (in²)
//!
//! ## Example
//!
//! ```rust
//! use wire_core::units::{Horsepower, Kilowatts, Watts};
//!
//! let motor: Watts = Horsepower(2.0).into();
//! assert_eq!(motor.0, 1492.0);
//!
//! let heater: Watts = Kilowatts(5.5).into();
//! assert_eq!(heater.0, 5500.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Watts per mechanical horsepower
pub const WATTS_PER_HP: f64 = 746.0;

// ============================================================================
// Electrical Units
// ============================================================================

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

/// Potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

/// Mechanical power in horsepower
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Horsepower(pub f64);

impl From<Kilowatts> for Watts {
    fn from(kw: Kilowatts) -> Self {
        Watts(kw.0 * 1000.0)
    }
}

impl From<Horsepower> for Watts {
    fn from(hp: Horsepower) -> Self {
        Watts(hp.0 * WATTS_PER_HP)
    }
}

impl Watts {
    /// Current drawn at the given voltage, I = P / V
    pub fn current_at(self, voltage: Volts) -> Amps {
        Amps(self.0 / voltage.0)
    }
}

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

impl Inches {
    /// Area of a circle with this diameter
    pub fn circle_area(self) -> SqIn {
        let radius = self.0 / 2.0;
        SqIn(std::f64::consts::PI * radius * radius)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Amps);
impl_arithmetic!(Volts);
impl_arithmetic!(Watts);
impl_arithmetic!(Kilowatts);
impl_arithmetic!(Horsepower);
impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);

// ============================================================================
// Rounding
// ============================================================================

/// Round up (toward +∞) at the given number of decimal places.
///
/// Every sizing step rounds conservatively: 32.3875 A at one decimal is
/// 32.4 A, never 32.3 A.
///
/// ```rust
/// use wire_core::units::round_up;
///
/// assert_eq!(round_up(32.3875, 1), 32.4);
/// assert_eq!(round_up(1.231, 2), 1.24);
/// ```
pub fn round_up(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).ceil() / scale
}

/// Round to the nearest value at the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_conversions() {
        let w: Watts = Kilowatts(7.2).into();
        assert!((w.0 - 7200.0).abs() < 1e-9);

        let hp: Watts = Horsepower(7.5).into();
        assert!((hp.0 - 5595.0).abs() < 1e-9);
    }

    #[test]
    fn test_current_at_voltage() {
        let i = Watts(4800.0).current_at(Volts(240.0));
        assert_eq!(i, Amps(20.0));
    }

    #[test]
    fn test_circle_area() {
        // 0.146" OD (#10 THHN): π × 0.073² ≈ 0.01674 in²
        let area = Inches(0.146).circle_area();
        assert!((area.0 - 0.016742).abs() < 1e-5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Amps(10.0);
        let b = Amps(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 1.25).0, 12.5);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_round_up_is_ceiling() {
        assert_eq!(round_up(50.0, 1), 50.0);
        assert_eq!(round_up(18.3456, 1), 18.4);
        assert_eq!(round_up(25.90277, 2), 25.91);
        assert_eq!(round_up(0.01, 1), 0.1);
    }

    #[test]
    fn test_round_to_nearest() {
        assert_eq!(round_to(11.7647, 2), 11.76);
        assert_eq!(round_to(14.705, 1), 14.7);
        assert_eq!(round_to(442.0, 1), 442.0);
    }

    #[test]
    fn test_serialization_transparent() {
        let json = serde_json::to_string(&Amps(40.5)).unwrap();
        assert_eq!(json, "40.5");
        let roundtrip: Amps = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Amps(40.5));
    }
}
