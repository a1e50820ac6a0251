//! Overcurrent device selection.

use crate::tables::BREAKER_LADDER;

/// Largest standard breaker in the ladder (A)
pub const MAX_BREAKER_A: u32 = BREAKER_LADDER[BREAKER_LADDER.len() - 1];

/// Next standard breaker rating at or above `required_amps`.
///
/// Returns `None` ("N/A") above 200 A. The ladder stops there; a larger
/// requirement is a range limitation, not an error, and no rating is made up.
pub fn select_breaker(required_amps: f64) -> Option<u32> {
    BREAKER_LADDER
        .iter()
        .copied()
        .find(|&rating| required_amps <= rating as f64)
}
