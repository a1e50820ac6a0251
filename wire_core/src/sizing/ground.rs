//! Equipment grounding conductor selection.

use crate::tables::{Gauge, GROUND_FALLBACK, GROUND_TABLE};

/// Minimum equipment grounding conductor for a breaker rating.
///
/// Breakers above the last table row (500 A) get the 1/0 fallback.
///
/// ```rust
/// use wire_core::sizing::select_ground;
/// use wire_core::tables::Gauge;
///
/// assert_eq!(select_ground(50), Gauge::Awg10);
/// ```
pub fn select_ground(breaker_a: u32) -> Gauge {
    GROUND_TABLE
        .iter()
        .find(|row| breaker_a <= row.max_breaker_a)
        .map(|row| row.gauge)
        .unwrap_or(GROUND_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_boundaries_inclusive() {
        assert_eq!(select_ground(15), Gauge::Awg14);
        assert_eq!(select_ground(20), Gauge::Awg12);
        assert_eq!(select_ground(25), Gauge::Awg10);
        assert_eq!(select_ground(60), Gauge::Awg10);
        assert_eq!(select_ground(70), Gauge::Awg8);
        assert_eq!(select_ground(100), Gauge::Awg8);
        assert_eq!(select_ground(200), Gauge::Awg6);
        assert_eq!(select_ground(500), Gauge::Awg2);
    }

    #[test]
    fn test_fallback_above_table() {
        assert_eq!(select_ground(501), Gauge::Awg1_0);
        assert_eq!(select_ground(800), Gauge::Awg1_0);
    }

    #[test]
    fn test_label() {
        assert_eq!(select_ground(40).conductor_label(), "#10 AWG Copper, THWN-2");
    }
}
