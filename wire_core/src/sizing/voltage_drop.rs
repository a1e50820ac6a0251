//! Percent voltage drop over a conductor run.
//!
//! ```text
//! DC, AC 1φ:  VD = 2  × I × R × L / (1000 × V)
//! AC 3φ:      VD = √3 × I × R × L / (1000 × V)
//! ```
//!
//! R is the table DC resistance in Ω/1000 ft and L the one-way length in
//! feet. The result is a percentage rounded up to hundredths.

use crate::circuit::Circuit;
use crate::tables::Gauge;
use crate::units::round_up;

/// Path-length multiplier for the circuit
fn path_factor(circuit: Circuit) -> f64 {
    if circuit.is_three_phase() {
        3f64.sqrt()
    } else {
        2.0
    }
}

/// Voltage drop in volts (unrounded)
pub fn voltage_drop_volts(length_ft: f64, current_a: f64, gauge: Gauge, circuit: Circuit) -> f64 {
    path_factor(circuit) * current_a * gauge.resistance_per_kft() * length_ft / 1000.0
}

/// Percent voltage drop, rounded up to two decimals.
///
/// ```rust
/// use wire_core::circuit::{Circuit, Phase};
/// use wire_core::sizing::voltage_drop;
/// use wire_core::tables::Gauge;
///
/// // 2 × 40 A × 0.778 Ω × 120 ft / (1000 × 240 V) = 3.112% → 3.12%
/// let vd = voltage_drop(120.0, 40.0, Gauge::Awg8, 240.0, Circuit::Ac(Phase::Single));
/// assert_eq!(vd, 3.12);
/// ```
pub fn voltage_drop(length_ft: f64, current_a: f64, gauge: Gauge, voltage_v: f64, circuit: Circuit) -> f64 {
    let fraction = voltage_drop_volts(length_ft, current_a, gauge, circuit) / voltage_v;
    round_up(fraction * 100.0, 2)
}
