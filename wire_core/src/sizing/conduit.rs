//! EMT conduit selection by percent fill.

use tracing::trace;

use crate::tables::{ConduitSize, Gauge};
use crate::units::SqIn;

/// Multiplier on total conductor area for pulling allowance
pub const FILL_MARGIN: f64 = 1.05;

/// Maximum fill ratio for three or more conductors (NEC Ch. 9 Table 1)
pub const MAX_FILL_RATIO: f64 = 0.40;

/// Total conductor area to be pulled, including the 5% margin.
pub fn conduit_fill_area(gauge: Gauge, conductor_count: u32) -> SqIn {
    gauge.outer_diameter().circle_area() * (conductor_count as f64 * FILL_MARGIN)
}

/// Fill ratio of `conductor_count` × `gauge` in the given trade size.
pub fn fill_ratio(gauge: Gauge, conductor_count: u32, size: ConduitSize) -> f64 {
    conduit_fill_area(gauge, conductor_count).0 / size.internal_area().0
}

/// Smallest EMT trade size with fill ratio at or below 40%.
///
/// Returns `None` when even 3" conduit would be overfilled.
///
/// ```rust
/// use wire_core::sizing::select_conduit;
/// use wire_core::tables::{ConduitSize, Gauge};
///
/// assert_eq!(select_conduit(Gauge::Awg14, 2), Some(ConduitSize::Half));
/// assert_eq!(select_conduit(Gauge::Awg10, 3), Some(ConduitSize::ThreeQuarter));
/// ```
pub fn select_conduit(gauge: Gauge, conductor_count: u32) -> Option<ConduitSize> {
    ConduitSize::ALL.into_iter().find(|&size| {
        let ratio = fill_ratio(gauge, conductor_count, size);
        trace!(%gauge, conductor_count, %size, ratio, "conduit candidate");
        ratio <= MAX_FILL_RATIO
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_area() {
        // #10: π × 0.073² × 3 × 1.05 ≈ 0.05274 in²
        let area = conduit_fill_area(Gauge::Awg10, 3);
        assert!((area.0 - 0.052737).abs() < 1e-5);
    }

    #[test]
    fn test_small_circuits_fit_half_inch() {
        assert_eq!(select_conduit(Gauge::Awg14, 2), Some(ConduitSize::Half));
        assert_eq!(select_conduit(Gauge::Awg12, 3), Some(ConduitSize::Half));
        // #10 × 3 is 43.2% of 1/2"
        assert_eq!(select_conduit(Gauge::Awg10, 3), Some(ConduitSize::ThreeQuarter));
    }

    #[test]
    fn test_known_selections() {
        // #8 × 3: 0.0272 × 3.15 = 0.0856 in² → 1/2" is 70.2%, 3/4" is 40.2%, 1" is 24.7%
        assert_eq!(select_conduit(Gauge::Awg8, 3), Some(ConduitSize::One));
        // #6 × 4: 0.0394 × 4.2 = 0.1655 in² → 1-1/4" at 27.7% (1" is 47.8%)
        assert_eq!(select_conduit(Gauge::Awg6, 4), Some(ConduitSize::OneAndQuarter));
    }

    #[test]
    fn test_overfilled_returns_none() {
        // 20 × 4/0: 0.219 × 21 = 4.6 in², more than 40% of 3"
        assert_eq!(select_conduit(Gauge::Awg4_0, 20), None);
    }

    #[test]
    fn test_selection_never_exceeds_fill_limit() {
        for gauge in Gauge::ALL {
            for count in 1..=20 {
                if let Some(size) = select_conduit(gauge, count) {
                    assert!(fill_ratio(gauge, count, size) <= MAX_FILL_RATIO);
                    // and the next smaller size would not have worked
                    if let Some(pos) = ConduitSize::ALL.iter().position(|s| *s == size) {
                        if pos > 0 {
                            let smaller = ConduitSize::ALL[pos - 1];
                            assert!(fill_ratio(gauge, count, smaller) > MAX_FILL_RATIO);
                        }
                    }
                }
            }
        }
    }
}
