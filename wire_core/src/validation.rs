//! Field-level input checks.
//!
//! Small gating helpers used by the scenario inputs' `validate` methods.
//! Each returns the first problem with a field as a [`CalcError`]; inputs
//! gather them with [`collect`] so a form can show every message at once.

use crate::errors::{CalcError, CalcResult};

/// Lowest ambient temperature accepted (°F)
pub const MIN_AMBIENT_TEMP_F: f64 = 60.0;

/// Highest ambient temperature accepted (°F)
pub const MAX_AMBIENT_TEMP_F: f64 = 140.0;

/// Value must be finite and strictly positive.
pub fn positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

/// Value must be finite and within `[min, max]`.
pub fn in_range(field: &str, value: f64, min: f64, max: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

/// Ambient temperature must be within 60-140°F.
pub fn ambient_temp(field: &str, value: f64) -> CalcResult<()> {
    in_range(
        field,
        value,
        MIN_AMBIENT_TEMP_F,
        MAX_AMBIENT_TEMP_F,
        "Ambient temp must be 60–140°F",
    )
}

/// Text must contain something other than whitespace.
pub fn non_blank(field: &str, value: &str) -> CalcResult<()> {
    if value.trim().is_empty() {
        return Err(CalcError::missing_field(field));
    }
    Ok(())
}

/// Keep only the failures from a set of checks, in order.
pub fn collect<I>(checks: I) -> Vec<CalcError>
where
    I: IntoIterator<Item = CalcResult<()>>,
{
    checks.into_iter().filter_map(Result::err).collect()
}
