//! # Sizing Selectors
//!
//! Table-driven selectors shared by the scenario engines. Each selector is a
//! pure function over the tables in [`crate::tables`]; absence (`None`) means
//! the requirement is outside what the tables cover.
//!
//! - [`select_gauge`] - smallest gauge whose derated ampacity suffices
//! - [`select_conduit`] - smallest EMT trade size at ≤ 40% fill
//! - [`select_breaker`] - next standard breaker rating
//! - [`select_ground`] - equipment grounding conductor for a breaker
//! - [`voltage_drop`] - percent drop over a run
//!
//! [`size_run`] chains the gauge and conduit selectors for one conductor run.

pub mod breaker;
pub mod conduit;
pub mod ground;
pub mod voltage_drop;
pub mod wire;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use breaker::{select_breaker, MAX_BREAKER_A};
pub use conduit::{conduit_fill_area, fill_ratio, select_conduit, FILL_MARGIN, MAX_FILL_RATIO};
pub use ground::select_ground;
pub use voltage_drop::{voltage_drop, voltage_drop_volts};
pub use wire::select_gauge;

use crate::derating::{derate, DeratingSummary};
use crate::errors::{CalcError, CalcResult};
use crate::tables::{ConduitSize, Gauge};

/// Conductor and raceway selection for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSizing {
    /// Ampacity the conductor must provide after derating (A)
    pub required_ampacity_a: f64,
    /// Conductors sharing the raceway
    pub conductor_count: u32,
    /// Selected gauge, `None` if beyond 4/0
    pub gauge: Option<Gauge>,
    /// Derating applied to the selected gauge
    pub derating: Option<DeratingSummary>,
    /// Selected EMT trade size, `None` if no gauge or beyond 3"
    pub conduit: Option<ConduitSize>,
    /// Fill ratio in the selected conduit
    pub fill_ratio: Option<f64>,
}

impl RunSizing {
    /// Gauge, or a RangeExceeded error naming the requirement
    pub fn require_gauge(&self) -> CalcResult<Gauge> {
        self.gauge.ok_or_else(|| {
            CalcError::range_exceeded(
                "required ampacity",
                format!("{:.1} A", self.required_ampacity_a),
                format!("{} derated ampacity", Gauge::LARGEST),
            )
        })
    }

    /// Conduit, or a RangeExceeded error
    pub fn require_conduit(&self) -> CalcResult<ConduitSize> {
        self.conduit.ok_or_else(|| {
            let fill = self
                .gauge
                .map(|g| format!("{} × {}", self.conductor_count, g))
                .unwrap_or_else(|| format!("{} conductors of unknown size", self.conductor_count));
            CalcError::range_exceeded("conduit fill", fill, "3\" EMT at 40%")
        })
    }

    /// Conductor callout or "N/A"
    pub fn wire_description(&self) -> String {
        self.gauge
            .map(Gauge::conductor_label)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Conduit callout or "N/A"
    pub fn conduit_description(&self) -> String {
        self.conduit
            .map(ConduitSize::description)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Select gauge and conduit for a run carrying `required_ampacity_a`.
pub fn size_run(required_ampacity_a: f64, ambient_temp_f: f64, conductor_count: u32) -> RunSizing {
    let gauge = select_gauge(required_ampacity_a, ambient_temp_f, conductor_count);
    if gauge.is_none() {
        warn!(required_ampacity_a, ambient_temp_f, conductor_count, "no gauge up to 4/0 carries the load");
    }

    let conduit = gauge.and_then(|g| select_conduit(g, conductor_count));
    if gauge.is_some() && conduit.is_none() {
        warn!(?gauge, conductor_count, "conductors overfill 3\" EMT");
    }

    RunSizing {
        required_ampacity_a,
        conductor_count,
        gauge,
        derating: gauge.map(|g| derate(g, ambient_temp_f, conductor_count)),
        conduit,
        fill_ratio: gauge
            .zip(conduit)
            .map(|(g, c)| fill_ratio(g, conductor_count, c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_run_complete() {
        let run = size_run(50.0, 86.0, 3);
        assert_eq!(run.gauge, Some(Gauge::Awg8));
        assert_eq!(run.conduit, Some(ConduitSize::One));
        let derating = run.derating.unwrap();
        assert!(derating.adjusted_ampacity_a as f64 >= 50.0);
        assert!(run.fill_ratio.unwrap() <= MAX_FILL_RATIO);
        assert_eq!(run.wire_description(), "#8 AWG Copper, THWN-2");
        assert_eq!(run.conduit_description(), "1-inch (Schedule 40 PVC or EMT)");
    }

    #[test]
    fn test_size_run_beyond_range() {
        let run = size_run(350.0, 86.0, 3);
        assert_eq!(run.gauge, None);
        assert_eq!(run.conduit, None);
        assert_eq!(run.derating, None);
        assert_eq!(run.wire_description(), "N/A");
        assert_eq!(run.conduit_description(), "N/A");

        let err = run.require_gauge().unwrap_err();
        assert_eq!(err.error_code(), "RANGE_EXCEEDED");
        assert!(run.require_conduit().is_err());
    }

    #[test]
    fn test_require_on_complete_run() {
        let run = size_run(20.0, 86.0, 2);
        assert_eq!(run.require_gauge().unwrap(), Gauge::Awg14);
        assert_eq!(run.require_conduit().unwrap(), ConduitSize::Half);
    }
}
