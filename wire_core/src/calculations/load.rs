//! # Load-Based Sizing
//!
//! Sizes the branch circuit feeding a single load: conductor, raceway,
//! overcurrent device, equipment ground and voltage drop.
//!
//! ## Procedure
//!
//! 1. Derive load current from amps, kW or HP (rounded up to 0.01 A)
//! 2. Required ampacity = 125% of load current, rounded up to 0.1 A
//!    (NEC 210.19(A)(1))
//! 3. Select gauge and conduit for `current-carrying + 1` conductors
//! 4. Breaker from required ampacity, ground from breaker
//! 5. Voltage drop over the run at load current
//!
//! ## Example
//!
//! ```rust
//! use wire_core::calculations::load::{calculate, LoadInput, LoadQuantity};
//! use wire_core::circuit::{Circuit, Phase};
//! use wire_core::tables::Gauge;
//!
//! let input = LoadInput {
//!     description: "Subpanel feed".to_string(),
//!     quantity: LoadQuantity::Amps(40.0),
//!     voltage_v: 240.0,
//!     circuit: Circuit::Ac(Phase::Single),
//!     length_ft: 120.0,
//!     ambient_temp_f: 86.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.min_ampacity_a, 50.0);
//! assert_eq!(result.run.gauge, Some(Gauge::Awg8));
//! assert_eq!(result.breaker_a, Some(50));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::circuit::Circuit;
use crate::errors::{CalcError, CalcResult};
use crate::sizing::{select_breaker, select_ground, size_run, voltage_drop, RunSizing, MAX_BREAKER_A};
use crate::tables::{nec_ref, Gauge};
use crate::units::{round_up, Horsepower, Kilowatts, Volts, Watts};
use crate::validation;

/// Continuous-load multiplier on load current
pub const CONTINUOUS_LOAD_FACTOR: f64 = 1.25;

/// Combined efficiency × power factor assumed for motors
pub const MOTOR_FACTOR: f64 = 0.9;

/// How the load is specified.
///
/// ## JSON
///
/// ```json
/// { "method": "Horsepower", "value": 7.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "value")]
pub enum LoadQuantity {
    /// Load current in amperes
    Amps(f64),
    /// Real power in kilowatts
    Kilowatts(f64),
    /// Motor nameplate horsepower
    Horsepower(f64),
}

impl LoadQuantity {
    /// Entered magnitude, whatever the unit
    pub fn value(self) -> f64 {
        match self {
            LoadQuantity::Amps(v) | LoadQuantity::Kilowatts(v) | LoadQuantity::Horsepower(v) => v,
        }
    }

    /// Unit label for reports
    pub fn unit(self) -> &'static str {
        match self {
            LoadQuantity::Amps(_) => "A",
            LoadQuantity::Kilowatts(_) => "kW",
            LoadQuantity::Horsepower(_) => "HP",
        }
    }
}

impl fmt::Display for LoadQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit())
    }
}

/// Load current for `quantity` at `voltage_v` (A, unrounded).
///
/// kW on a three-phase circuit divides by V√3; DC and single-phase divide by
/// V. Horsepower always uses `HP × 746 / (V × 0.9)`, whatever the circuit.
pub fn derive_amps(quantity: LoadQuantity, voltage_v: f64, circuit: Circuit) -> f64 {
    match quantity {
        LoadQuantity::Amps(a) => a,
        LoadQuantity::Kilowatts(kw) => {
            let watts = Watts::from(Kilowatts(kw));
            if circuit.is_three_phase() {
                watts.current_at(Volts(voltage_v * 3f64.sqrt())).value()
            } else {
                watts.current_at(Volts(voltage_v)).value()
            }
        }
        LoadQuantity::Horsepower(hp) => Watts::from(Horsepower(hp))
            .current_at(Volts(voltage_v * MOTOR_FACTOR))
            .value(),
    }
}

/// Inputs for a load-based sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "description": "7.5 HP Pool Pump",
///   "quantity": { "method": "Horsepower", "value": 7.5 },
///   "voltage_v": 240.0,
///   "circuit": { "Ac": "Single" },
///   "length_ft": 75.0,
///   "ambient_temp_f": 86.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadInput {
    /// Equipment or load description (display only)
    pub description: String,

    /// Load magnitude and how it was entered
    pub quantity: LoadQuantity,

    /// Circuit voltage (V)
    pub voltage_v: f64,

    /// AC/DC and phase
    pub circuit: Circuit,

    /// One-way run length (ft)
    pub length_ft: f64,

    /// Ambient temperature (°F), 60-140
    pub ambient_temp_f: f64,
}

impl LoadInput {
    /// Validate input parameters, stopping at the first problem.
    pub fn validate(&self) -> CalcResult<()> {
        match self.validation_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every validation problem, in form order.
    pub fn validation_errors(&self) -> Vec<CalcError> {
        validation::collect([
            validation::non_blank("description", &self.description),
            validation::positive("quantity", self.quantity.value(), "Value must be positive"),
            validation::positive("voltage_v", self.voltage_v, "Voltage must be positive"),
            validation::positive("length_ft", self.length_ft, "Length must be positive"),
            validation::ambient_temp("ambient_temp_f", self.ambient_temp_f),
        ])
    }
}

/// Results from a load-based sizing.
///
/// Absent fields mean the requirement is beyond the tables; they are never
/// filled with a substitute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSizingResult {
    /// Load current, rounded up to 0.01 A
    pub amps: f64,

    /// Required conductor ampacity, 125% of load current (A)
    pub min_ampacity_a: f64,

    pub circuit: Circuit,

    /// Gauge and conduit for the run
    pub run: RunSizing,

    /// Breaker rating (A), `None` above 200 A
    pub breaker_a: Option<u32>,

    /// Equipment grounding conductor, `None` when there is no breaker
    pub ground: Option<Gauge>,

    /// Voltage drop over the run (%), `None` when there is no gauge
    pub voltage_drop_percent: Option<f64>,

    /// Inputs this result was computed from
    pub input: LoadInput,
}

impl LoadSizingResult {
    /// True when every sizing field was found
    pub fn is_complete(&self) -> bool {
        self.run.gauge.is_some()
            && self.run.conduit.is_some()
            && self.breaker_a.is_some()
            && self.ground.is_some()
            && self.voltage_drop_percent.is_some()
    }

    /// Voltage drop within `limit_percent`; false when drop is unknown
    pub fn voltage_drop_ok(&self, limit_percent: f64) -> bool {
        self.voltage_drop_percent.is_some_and(|vd| vd <= limit_percent)
    }

    /// Breaker rating, or a RangeExceeded error
    pub fn require_breaker(&self) -> CalcResult<u32> {
        self.breaker_a.ok_or_else(|| {
            CalcError::range_exceeded(
                "breaker rating",
                format!("{:.1} A", self.min_ampacity_a),
                format!("{} A", MAX_BREAKER_A),
            )
        })
    }

    pub fn require_gauge(&self) -> CalcResult<Gauge> {
        self.run.require_gauge()
    }

    /// Breaker callout, e.g. "50A" or "N/A"
    pub fn breaker_description(&self) -> String {
        self.breaker_a
            .map(|a| format!("{}A", a))
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Ground callout, e.g. "#10 AWG Copper, THWN-2" or "N/A"
    pub fn ground_description(&self) -> String {
        self.ground
            .map(Gauge::conductor_label)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        let vd = self
            .voltage_drop_percent
            .map(|v| format!("{:.2}%", v))
            .unwrap_or_else(|| "N/A".to_string());
        format!(
            "Load Sizing: {}\n\
             ================================================\n\
             Load                    = {} ({} V, {})\n\
             Load current            = {:.2} A\n\
             Min ampacity (125%)     = {:.1} A    {}\n\
             Wire                    = {}\n\
             Conductors              = {}\n\
             Conduit                 = {}\n\
             Breaker                 = {}\n\
             Equipment ground        = {}\n\
             Voltage drop            = {} over {} ft",
            self.input.description,
            self.input.quantity, self.input.voltage_v, self.circuit,
            self.amps,
            self.min_ampacity_a, nec_ref::CONTINUOUS_LOAD,
            self.run.wire_description(),
            self.circuit.wire_breakdown(),
            self.run.conduit_description(),
            self.breaker_description(),
            self.ground_description(),
            vd, self.input.length_ft,
        )
    }
}

/// Size a load circuit without validating the input.
///
/// The input is assumed to have passed [`LoadInput::validate`]. Every field
/// is computed independently, so one absent selection does not stop the rest.
pub fn size(input: &LoadInput) -> LoadSizingResult {
    let amps = round_up(derive_amps(input.quantity, input.voltage_v, input.circuit), 2);
    let min_ampacity_a = round_up(amps * CONTINUOUS_LOAD_FACTOR, 1);
    let wires = input.circuit.total_wires();

    let run = size_run(min_ampacity_a, input.ambient_temp_f, wires);
    let breaker_a = select_breaker(min_ampacity_a);
    let ground = breaker_a.map(select_ground);
    let voltage_drop_percent = run
        .gauge
        .map(|g| voltage_drop(input.length_ft, amps, g, input.voltage_v, input.circuit));

    debug!(
        description = %input.description,
        amps,
        min_ampacity_a,
        wires,
        gauge = ?run.gauge,
        conduit = ?run.conduit,
        ?breaker_a,
        ?ground,
        ?voltage_drop_percent,
        "sized load circuit"
    );

    LoadSizingResult {
        amps,
        min_ampacity_a,
        circuit: input.circuit,
        run,
        breaker_a,
        ground,
        voltage_drop_percent,
        input: input.clone(),
    }
}

/// Validate and size a load circuit.
///
/// # Errors
///
/// * `CalcError::InvalidInput` / `CalcError::MissingField` - first invalid field
pub fn calculate(input: &LoadInput) -> CalcResult<LoadSizingResult> {
    input.validate()?;
    Ok(size(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Phase;
    use crate::tables::ConduitSize;

    fn load(quantity: LoadQuantity, voltage_v: f64, circuit: Circuit) -> LoadInput {
        LoadInput {
            description: "Test load".to_string(),
            quantity,
            voltage_v,
            circuit,
            length_ft: 120.0,
            ambient_temp_f: 86.0,
        }
    }

    #[test]
    fn test_forty_amp_single_phase() {
        let input = load(LoadQuantity::Amps(40.0), 240.0, Circuit::Ac(Phase::Single));
        let result = calculate(&input).unwrap();

        assert_eq!(result.amps, 40.0);
        assert_eq!(result.min_ampacity_a, 50.0);
        assert_eq!(result.run.conductor_count, 3);
        assert_eq!(result.run.gauge, Some(Gauge::Awg8));
        assert!(result.run.derating.unwrap().adjusted_ampacity_a as f64 >= 50.0);
        assert_eq!(result.run.conduit, Some(ConduitSize::One));
        assert!(result.run.fill_ratio.unwrap() <= 0.40);
        assert_eq!(result.breaker_a, Some(50));
        assert_eq!(result.ground, Some(Gauge::Awg10));
        // 2 × 40 × 0.778 × 120 / 240000 = 3.112% → 3.12%
        assert_eq!(result.voltage_drop_percent, Some(3.12));
        assert!(result.is_complete());
        assert!(!result.voltage_drop_ok(3.0));
        assert!(result.voltage_drop_ok(5.0));
    }

    #[test]
    fn test_horsepower_derivation() {
        let input = load(LoadQuantity::Horsepower(7.5), 240.0, Circuit::Ac(Phase::Single));
        let result = size(&input);

        // 7.5 × 746 / (240 × 0.9) = 25.9028 → 25.91
        assert_eq!(result.amps, 25.91);
        // 25.91 × 1.25 = 32.3875 → 32.4
        assert_eq!(result.min_ampacity_a, 32.4);
        assert_eq!(result.run.gauge, Some(Gauge::Awg10));
        assert_eq!(result.breaker_a, Some(35));
    }

    #[test]
    fn test_horsepower_ignores_phase() {
        let single = derive_amps(LoadQuantity::Horsepower(5.0), 208.0, Circuit::Ac(Phase::Single));
        let three = derive_amps(LoadQuantity::Horsepower(5.0), 208.0, Circuit::Ac(Phase::Three));
        let dc = derive_amps(LoadQuantity::Horsepower(5.0), 208.0, Circuit::Dc);
        assert_eq!(single, three);
        assert_eq!(single, dc);
    }

    #[test]
    fn test_kilowatts_three_phase() {
        let amps = derive_amps(LoadQuantity::Kilowatts(10.0), 208.0, Circuit::Ac(Phase::Three));
        // 10000 / (208 × √3) = 27.757
        assert!((amps - 27.757).abs() < 0.001);

        let result = size(&load(LoadQuantity::Kilowatts(10.0), 208.0, Circuit::Ac(Phase::Three)));
        assert_eq!(result.amps, 27.76);
        assert_eq!(result.run.conductor_count, 4);
        // Four conductors derate by 0.8: #10 = 32 A, #8 = 44 A
        assert_eq!(result.run.gauge, Some(Gauge::Awg8));
        assert_eq!(result.breaker_a, Some(35));
        assert_eq!(result.circuit.wire_breakdown(), "5 Total (3 Hots, 1 Neutral, 1 Ground)");
    }

    #[test]
    fn test_kilowatts_dc_and_single_phase_match() {
        let dc = derive_amps(LoadQuantity::Kilowatts(2.4), 48.0, Circuit::Dc);
        let ac = derive_amps(LoadQuantity::Kilowatts(2.4), 48.0, Circuit::Ac(Phase::Single));
        assert!((dc - 50.0).abs() < 1e-9);
        assert_eq!(dc, ac);
    }

    #[test]
    fn test_dc_circuit() {
        let mut input = load(LoadQuantity::Amps(20.0), 48.0, Circuit::Dc);
        input.length_ft = 50.0;
        let result = calculate(&input).unwrap();

        assert_eq!(result.run.conductor_count, 2);
        assert_eq!(result.min_ampacity_a, 25.0);
        assert_eq!(result.run.gauge, Some(Gauge::Awg14));
        assert_eq!(result.run.conduit, Some(ConduitSize::Half));
        assert_eq!(result.breaker_a, Some(25));
        // 2 × 20 × 3.14 × 50 / 48000 = 13.083% → 13.09%
        assert_eq!(result.voltage_drop_percent, Some(13.09));
    }

    #[test]
    fn test_beyond_breaker_ladder() {
        let result = size(&load(LoadQuantity::Amps(180.0), 480.0, Circuit::Ac(Phase::Three)));

        // 180 × 1.25 = 225 A exceeds the 200 A ladder
        assert_eq!(result.min_ampacity_a, 225.0);
        assert_eq!(result.breaker_a, None);
        assert_eq!(result.ground, None);
        assert_eq!(result.breaker_description(), "N/A");
        assert_eq!(result.require_breaker().unwrap_err().error_code(), "RANGE_EXCEEDED");
        assert!(!result.is_complete());

        // Other fields are still computed: 4/0 gives 305 × 0.8 = 244 A
        assert_eq!(result.run.gauge, Some(Gauge::Awg4_0));
        assert!(result.voltage_drop_percent.is_some());
    }

    #[test]
    fn test_beyond_largest_gauge() {
        let result = size(&load(LoadQuantity::Amps(200.0), 240.0, Circuit::Ac(Phase::Three)));

        // 250 A over four conductors: 4/0 gives 305 × 0.8 = 244 A
        assert_eq!(result.run.gauge, None);
        assert_eq!(result.run.conduit, None);
        assert_eq!(result.voltage_drop_percent, None);
        assert_eq!(result.run.wire_description(), "N/A");
        assert!(result.require_gauge().is_err());
        assert!(!result.voltage_drop_ok(100.0));
    }

    #[test]
    fn test_validation_collects_every_error() {
        let input = LoadInput {
            description: "  ".to_string(),
            quantity: LoadQuantity::Amps(0.0),
            voltage_v: -120.0,
            circuit: Circuit::default(),
            length_ft: 50.0,
            ambient_temp_f: 150.0,
        };
        let errors = input.validation_errors();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], CalcError::missing_field("description"));

        let first = calculate(&input).unwrap_err();
        assert_eq!(first, CalcError::missing_field("description"));
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        let mut input = load(LoadQuantity::Amps(20.0), 120.0, Circuit::default());
        input.ambient_temp_f = 59.0;
        match calculate(&input).unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "ambient_temp_f"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_idempotent() {
        let input = load(LoadQuantity::Kilowatts(7.2), 240.0, Circuit::Ac(Phase::Single));
        assert_eq!(size(&input), size(&input));
    }

    #[test]
    fn test_json_roundtrip_input() {
        let input = load(LoadQuantity::Horsepower(7.5), 240.0, Circuit::Ac(Phase::Single));
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""method":"Horsepower""#));
        let parsed: LoadInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_report_mentions_selections() {
        let result = size(&load(LoadQuantity::Amps(40.0), 240.0, Circuit::Ac(Phase::Single)));
        let report = result.format_report();
        assert!(report.contains("#8 AWG Copper, THWN-2"));
        assert!(report.contains("1-inch (Schedule 40 PVC or EMT)"));
        assert!(report.contains("50A"));
        assert!(report.contains("3.12%"));
    }
}
