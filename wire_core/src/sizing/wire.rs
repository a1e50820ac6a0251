//! Wire gauge selection.

use tracing::trace;

use crate::derating::ampacity;
use crate::tables::Gauge;

/// Smallest gauge whose derated ampacity meets `required_amps`.
///
/// Gauges are tried from #14 up to 4/0. Returns `None` when even 4/0 is
/// insufficient; callers report that as beyond the supported range rather
/// than falling back to the largest size.
///
/// ```rust
/// use wire_core::sizing::select_gauge;
/// use wire_core::tables::Gauge;
///
/// assert_eq!(select_gauge(50.0, 86.0, 3), Some(Gauge::Awg8));
/// assert_eq!(select_gauge(400.0, 86.0, 3), None);
/// ```
pub fn select_gauge(required_amps: f64, ambient_temp_f: f64, conductor_count: u32) -> Option<Gauge> {
    Gauge::ALL.into_iter().find(|&gauge| {
        let derated = ampacity(gauge, ambient_temp_f, conductor_count);
        trace!(%gauge, derated, required_amps, "gauge candidate");
        derated as f64 >= required_amps
    })
}
