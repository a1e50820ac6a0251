//! # Photovoltaic System Sizing
//!
//! Sizes the three runs of a string-inverter PV system:
//!
//! ```text
//! strings ──(string run)──> combiner ──(combiner run)──> inverter ──(AC run)──> panel
//! ```
//!
//! ## DC side
//!
//! Every module is assumed to have Vmp = 34 V, so Imp = P_panel / 34.
//! Conductor ampacity is 156% of current (125% × 125%, NEC 690.8). The
//! string run carries two conductors; the combiner run carries one pair
//! per string plus a ground, `strings + 1` in all.
//!
//! ## AC side
//!
//! Inverter output current is taken as `P_system / V` (or `/ V√3`). No
//! inverter efficiency is applied, which oversizes slightly.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::calculations::pv::{calculate, PvInput};
//! use wire_core::circuit::Phase;
//!
//! let input = PvInput {
//!     system_watts: 10_000.0,
//!     panel_watts: 400.0,
//!     num_strings: 2,
//!     combiner_to_inverter_ft: 50.0,
//!     inverter_to_panel_ft: 100.0,
//!     ac_voltage_v: 240.0,
//!     ac_phase: Phase::Single,
//!     ambient_temp_f: 86.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.dc.panels_per_string, 13);
//! assert_eq!(result.dc.string_current_a, 11.76);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::circuit::{Circuit, Phase};
use crate::errors::{CalcError, CalcResult};
use crate::sizing::{select_breaker, select_ground, size_run, voltage_drop, RunSizing, MAX_BREAKER_A};
use crate::tables::{nec_ref, Gauge};
use crate::units::{round_to, round_up};
use crate::validation;

use super::load::CONTINUOUS_LOAD_FACTOR;

/// Assumed module voltage at maximum power (V)
pub const MODULE_VMP_V: f64 = 34.0;

/// PV source-circuit multiplier, 125% × 125%
pub const PV_CURRENT_FACTOR: f64 = 1.56;

/// Conductors in a single string run
pub const STRING_RUN_CONDUCTORS: u32 = 2;

/// Most strings one combiner run can carry. `strings + 1` conductors must
/// stay inside the 10-20 adjustment band.
pub const MAX_STRINGS: u32 = 19;

/// Inputs for a PV system sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "system_watts": 10000.0,
///   "panel_watts": 400.0,
///   "num_strings": 2,
///   "combiner_to_inverter_ft": 50.0,
///   "inverter_to_panel_ft": 100.0,
///   "ac_voltage_v": 240.0,
///   "ac_phase": "Single",
///   "ambient_temp_f": 86.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvInput {
    /// Total array power (W)
    pub system_watts: f64,

    /// Module rating (W)
    pub panel_watts: f64,

    /// Parallel strings into the combiner
    pub num_strings: u32,

    /// Combiner to inverter, one way (ft)
    pub combiner_to_inverter_ft: f64,

    /// Inverter to service panel, one way (ft)
    pub inverter_to_panel_ft: f64,

    /// Inverter AC output voltage (V)
    pub ac_voltage_v: f64,

    pub ac_phase: Phase,

    /// Ambient temperature (°F), 60-140
    pub ambient_temp_f: f64,
}

impl PvInput {
    /// Modules per string, `round(P_system / P_panel / strings)`.
    ///
    /// Only meaningful for validated input; the gate rejects counts that
    /// do not fit a `u32`.
    pub fn panels_per_string(&self) -> u32 {
        self.panels_per_string_exact() as u32
    }

    fn panels_per_string_exact(&self) -> f64 {
        (self.system_watts / self.panel_watts / f64::from(self.num_strings)).round()
    }

    /// Validate input parameters, stopping at the first problem.
    pub fn validate(&self) -> CalcResult<()> {
        match self.validation_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every validation problem, in form order.
    pub fn validation_errors(&self) -> Vec<CalcError> {
        let mut errors = validation::collect([
            validation::positive("system_watts", self.system_watts, "System size required"),
            validation::positive("panel_watts", self.panel_watts, "Panel wattage required"),
            validation::in_range(
                "num_strings",
                f64::from(self.num_strings),
                1.0,
                f64::from(MAX_STRINGS),
                "Number of strings must be 1-19",
            ),
            validation::positive(
                "combiner_to_inverter_ft",
                self.combiner_to_inverter_ft,
                "Combiner to inverter distance required",
            ),
            validation::positive(
                "inverter_to_panel_ft",
                self.inverter_to_panel_ft,
                "Inverter to panel distance required",
            ),
            validation::positive("ac_voltage_v", self.ac_voltage_v, "AC voltage required"),
            validation::ambient_temp("ambient_temp_f", self.ambient_temp_f),
        ]);

        // Only meaningful once the three inputs it depends on are sane
        if errors.is_empty() {
            let panels = self.panels_per_string_exact();
            if panels < 1.0 {
                errors.push(CalcError::invalid_input(
                    "panel_watts",
                    self.panel_watts.to_string(),
                    "System size is too small for one panel per string",
                ));
            } else if panels > f64::from(u32::MAX) {
                errors.push(CalcError::invalid_input(
                    "system_watts",
                    self.system_watts.to_string(),
                    "Too many panels per string",
                ));
            }
        }
        errors
    }
}

/// DC side of a PV sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvDcResult {
    pub panels_per_string: u32,

    /// 34 V × panels per string (V)
    pub string_voltage_v: f64,

    /// Imp per string (A)
    pub string_current_a: f64,

    /// Imp × strings (A)
    pub combiner_current_a: f64,

    /// String to combiner, two conductors
    pub string_run: RunSizing,

    /// Combiner to inverter, `strings + 1` conductors
    pub combiner_run: RunSizing,

    /// Drop over the combiner run at string voltage (%)
    pub voltage_drop_percent: Option<f64>,
}

/// AC side of a PV sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvAcResult {
    pub phase: Phase,

    /// Inverter output current, rounded up to 0.01 A
    pub current_a: f64,

    /// Required ampacity, 125% of output current (A)
    pub min_ampacity_a: f64,

    /// Inverter to panel
    pub run: RunSizing,

    pub breaker_a: Option<u32>,

    pub ground: Option<Gauge>,

    pub voltage_drop_percent: Option<f64>,
}

impl PvAcResult {
    /// Breaker callout, e.g. "60A 2-Pole" or "N/A"
    pub fn breaker_description(&self) -> String {
        self.breaker_a
            .map(|a| format!("{}A {}-Pole", a, self.phase.breaker_poles()))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Results from a PV system sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvSizingResult {
    pub dc: PvDcResult,
    pub ac: PvAcResult,
    /// Inputs this result was computed from
    pub input: PvInput,
}

impl PvSizingResult {
    /// True when every run, breaker, ground and drop was found
    pub fn is_complete(&self) -> bool {
        let runs = [&self.dc.string_run, &self.dc.combiner_run, &self.ac.run];
        runs.iter().all(|r| r.gauge.is_some() && r.conduit.is_some())
            && self.dc.voltage_drop_percent.is_some()
            && self.ac.breaker_a.is_some()
            && self.ac.ground.is_some()
            && self.ac.voltage_drop_percent.is_some()
    }

    /// Both DC and AC drops within `limit_percent`
    pub fn voltage_drop_ok(&self, limit_percent: f64) -> bool {
        [self.dc.voltage_drop_percent, self.ac.voltage_drop_percent]
            .into_iter()
            .all(|vd| vd.is_some_and(|v| v <= limit_percent))
    }

    /// AC breaker rating, or a RangeExceeded error
    pub fn require_breaker(&self) -> CalcResult<u32> {
        self.ac.breaker_a.ok_or_else(|| {
            CalcError::range_exceeded(
                "AC breaker rating",
                format!("{:.1} A", self.ac.min_ampacity_a),
                format!("{} A", MAX_BREAKER_A),
            )
        })
    }

    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        let pct = |v: Option<f64>| v.map(|v| format!("{:.2}%", v)).unwrap_or_else(|| "N/A".to_string());
        let ground = self
            .ac
            .ground
            .map(Gauge::conductor_label)
            .unwrap_or_else(|| "N/A".to_string());
        let ac_circuit = Circuit::Ac(self.ac.phase);

        format!(
            "PV System Sizing ({:.0} W, {} × {:.0} W modules)\n\
             ================================================\n\
             Panels per string       = {}\n\
             String voltage          = {:.1} V\n\
             String current (Imp)    = {:.2} A\n\
             ------------------------------------------------\n\
             String run              = {} ({} conductors)\n\
             String conduit          = {}\n\
             Combiner current        = {:.2} A\n\
             Combiner run            = {} ({} conductors)\n\
             Combiner conduit        = {}\n\
             DC voltage drop         = {} over {} ft    {}\n\
             ------------------------------------------------\n\
             AC output current       = {:.2} A ({})\n\
             AC wire                 = {}\n\
             AC conductors           = {}\n\
             AC conduit              = {}\n\
             AC breaker              = {}\n\
             Equipment ground        = {}\n\
             AC voltage drop         = {} over {} ft",
            self.input.system_watts,
            u64::from(self.dc.panels_per_string) * u64::from(self.input.num_strings),
            self.input.panel_watts,
            self.dc.panels_per_string,
            self.dc.string_voltage_v,
            self.dc.string_current_a,
            self.dc.string_run.wire_description(), self.dc.string_run.conductor_count,
            self.dc.string_run.conduit_description(),
            self.dc.combiner_current_a,
            self.dc.combiner_run.wire_description(), self.dc.combiner_run.conductor_count,
            self.dc.combiner_run.conduit_description(),
            pct(self.dc.voltage_drop_percent), self.input.combiner_to_inverter_ft, nec_ref::PV_CIRCUIT_CURRENT,
            self.ac.current_a, self.ac.phase,
            self.ac.run.wire_description(),
            ac_circuit.wire_breakdown(),
            self.ac.run.conduit_description(),
            self.ac.breaker_description(),
            ground,
            pct(self.ac.voltage_drop_percent), self.input.inverter_to_panel_ft,
        )
    }
}

/// DC string and combiner runs.
fn size_dc(input: &PvInput) -> PvDcResult {
    let panels_per_string = input.panels_per_string();
    let string_current_a = round_to(input.panel_watts / MODULE_VMP_V, 2);
    let string_voltage_v = round_to(MODULE_VMP_V * panels_per_string as f64, 1);
    let combiner_current_a = string_current_a * input.num_strings as f64;

    let string_run = size_run(
        round_up(string_current_a * PV_CURRENT_FACTOR, 1),
        input.ambient_temp_f,
        STRING_RUN_CONDUCTORS,
    );
    let combiner_run = size_run(
        round_up(combiner_current_a * PV_CURRENT_FACTOR, 1),
        input.ambient_temp_f,
        input.num_strings.saturating_add(1),
    );
    let voltage_drop_percent = combiner_run.gauge.map(|g| {
        voltage_drop(
            input.combiner_to_inverter_ft,
            combiner_current_a,
            g,
            string_voltage_v,
            Circuit::Dc,
        )
    });

    PvDcResult {
        panels_per_string,
        string_voltage_v,
        string_current_a,
        combiner_current_a,
        string_run,
        combiner_run,
        voltage_drop_percent,
    }
}

/// Inverter-to-panel AC run.
fn size_ac(input: &PvInput) -> PvAcResult {
    let circuit = Circuit::Ac(input.ac_phase);
    let divisor = match input.ac_phase {
        Phase::Single => input.ac_voltage_v,
        Phase::Three => input.ac_voltage_v * 3f64.sqrt(),
    };
    let current_a = round_up(input.system_watts / divisor, 2);
    let min_ampacity_a = round_up(current_a * CONTINUOUS_LOAD_FACTOR, 1);

    let run = size_run(min_ampacity_a, input.ambient_temp_f, circuit.total_wires());
    let breaker_a = select_breaker(min_ampacity_a);
    let ground = breaker_a.map(select_ground);
    let voltage_drop_percent = run.gauge.map(|g| {
        voltage_drop(input.inverter_to_panel_ft, current_a, g, input.ac_voltage_v, circuit)
    });

    PvAcResult {
        phase: input.ac_phase,
        current_a,
        min_ampacity_a,
        run,
        breaker_a,
        ground,
        voltage_drop_percent,
    }
}

/// Size a PV system without validating the input.
pub fn size(input: &PvInput) -> PvSizingResult {
    let dc = size_dc(input);
    let ac = size_ac(input);

    debug!(
        panels_per_string = dc.panels_per_string,
        string_voltage_v = dc.string_voltage_v,
        combiner_current_a = dc.combiner_current_a,
        string_gauge = ?dc.string_run.gauge,
        combiner_gauge = ?dc.combiner_run.gauge,
        ac_current_a = ac.current_a,
        ac_gauge = ?ac.run.gauge,
        ac_breaker_a = ?ac.breaker_a,
        "sized PV system"
    );

    PvSizingResult {
        dc,
        ac,
        input: input.clone(),
    }
}

/// Validate and size a PV system.
///
/// # Errors
///
/// * `CalcError::InvalidInput` - first invalid field
pub fn calculate(input: &PvInput) -> CalcResult<PvSizingResult> {
    input.validate()?;
    Ok(size(input))
}
