//! # wire-calc
//!
//! Command-line front end for `wire_core`. Collects the inputs a sizing form
//! would, runs them through validation, and prints either a report or JSON.
//!
//! Exit codes: 0 on success (even when some selections are N/A), 1 when
//! settings or output fail, 2 when inputs are invalid.

use std::path::PathBuf;
use std::process;

use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wire_core::calculations::{CalculationItem, CalculationOutput, LoadInput, LoadQuantity, PvInput};
use wire_core::tables::{
    nec_ref, ConduitRecord, GaugeRecord, GroundRecord, BREAKER_LADDER, CONDUIT_TABLE, GAUGE_TABLE, GROUND_FALLBACK,
    GROUND_TABLE,
};
use wire_core::{CalcError, CalcResult, Circuit, Gauge, OutputFormat, Phase, Settings};

const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser)]
#[command(name = "wire-calc")]
#[command(about = "Wire, conduit, breaker and voltage-drop sizing calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (overrides the settings file)
    #[arg(short, long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// JSON settings file
    #[arg(long, value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    /// Log sizing steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a branch circuit for a single load
    Load(LoadArgs),

    /// Size the DC and AC runs of a PV system
    Pv(PvArgs),

    /// Print the conductor, conduit, breaker and ground tables
    Tables,
}

#[derive(Args)]
#[command(group(ArgGroup::new("quantity").required(true).args(["amps", "kw", "hp"])))]
struct LoadArgs {
    /// Equipment or load description
    #[arg(long)]
    description: String,

    /// Load current (A)
    #[arg(long, allow_negative_numbers = true)]
    amps: Option<f64>,

    /// Load power (kW)
    #[arg(long, allow_negative_numbers = true)]
    kw: Option<f64>,

    /// Motor horsepower (HP)
    #[arg(long, allow_negative_numbers = true)]
    hp: Option<f64>,

    /// Circuit voltage (V)
    #[arg(long, allow_negative_numbers = true)]
    voltage: f64,

    /// DC circuit
    #[arg(long, conflicts_with = "phase")]
    dc: bool,

    /// AC phase
    #[arg(long, value_enum, default_value = "single")]
    phase: PhaseArg,

    /// One-way run length (ft)
    #[arg(long, allow_negative_numbers = true)]
    length: f64,

    /// Ambient temperature (°F), defaults to the settings value
    #[arg(long, allow_negative_numbers = true)]
    temp: Option<f64>,
}

#[derive(Args)]
struct PvArgs {
    /// Total system size (W)
    #[arg(long, allow_negative_numbers = true)]
    system_watts: f64,

    /// Panel rating (W)
    #[arg(long, allow_negative_numbers = true)]
    panel_watts: f64,

    /// Number of parallel strings (1-19)
    #[arg(long)]
    strings: u32,

    /// Combiner to inverter distance (ft)
    #[arg(long, allow_negative_numbers = true)]
    combiner_to_inverter: f64,

    /// Inverter to panel distance (ft)
    #[arg(long, allow_negative_numbers = true)]
    inverter_to_panel: f64,

    /// Inverter AC output voltage (V)
    #[arg(long, allow_negative_numbers = true)]
    ac_voltage: f64,

    /// AC phase
    #[arg(long, value_enum, default_value = "single")]
    phase: PhaseArg,

    /// Ambient temperature (°F), defaults to the settings value
    #[arg(long, allow_negative_numbers = true)]
    temp: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable report
    Human,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PhaseArg {
    Single,
    Three,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Single => Phase::Single,
            PhaseArg::Three => Phase::Three,
        }
    }
}

impl LoadArgs {
    fn into_input(self, settings: &Settings) -> CalcResult<LoadInput> {
        let quantity = self
            .amps
            .map(LoadQuantity::Amps)
            .or(self.kw.map(LoadQuantity::Kilowatts))
            .or(self.hp.map(LoadQuantity::Horsepower))
            .ok_or_else(|| CalcError::missing_field("amps, kw or hp"))?;
        Ok(LoadInput {
            description: self.description,
            quantity,
            voltage_v: self.voltage,
            circuit: Circuit::from_flags(!self.dc, matches!(self.phase, PhaseArg::Three)),
            length_ft: self.length,
            ambient_temp_f: self.temp.unwrap_or(settings.default_ambient_temp_f),
        })
    }
}

impl PvArgs {
    fn into_input(self, settings: &Settings) -> PvInput {
        PvInput {
            system_watts: self.system_watts,
            panel_watts: self.panel_watts,
            num_strings: self.strings,
            combiner_to_inverter_ft: self.combiner_to_inverter,
            inverter_to_panel_ft: self.inverter_to_panel,
            ac_voltage_v: self.ac_voltage,
            ac_phase: self.phase.into(),
            ambient_temp_f: self.temp.unwrap_or(settings.default_ambient_temp_f),
        }
    }
}

/// JSON output wrapper
#[derive(Serialize)]
struct JsonReport<'a, T: Serialize> {
    tool: &'static str,
    version: &'static str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    body: &'a T,
}

impl<'a, T: Serialize> JsonReport<'a, T> {
    fn new(body: &'a T) -> Self {
        JsonReport {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            body,
        }
    }
}

#[derive(Serialize)]
struct SizingBody<'a> {
    voltage_drop_limit_percent: f64,
    voltage_drop_ok: bool,
    complete: bool,
    result: &'a CalculationOutput,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    errors: &'a [CalcError],
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match Settings::load_or_default(cli.settings.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "could not load settings");
            eprintln!("Error: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };
    let format = cli.format.map(OutputFormat::from).unwrap_or(settings.output);

    let exit_code = match cli.command {
        Commands::Load(args) => match args.into_input(&settings) {
            Ok(input) => handle_sizing(CalculationItem::Load(input), &settings, format),
            Err(e) => {
                output_errors(std::slice::from_ref(&e), format);
                EXIT_INVALID_INPUT
            }
        },
        Commands::Pv(args) => {
            handle_sizing(CalculationItem::Pv(args.into_input(&settings)), &settings, format)
        }
        Commands::Tables => handle_tables(format),
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn handle_sizing(item: CalculationItem, settings: &Settings, format: OutputFormat) -> i32 {
    debug!(calc_type = item.calc_type(), label = %item.label(), "running calculation");

    let errors = item.validation_errors();
    if !errors.is_empty() {
        output_errors(&errors, format);
        return EXIT_INVALID_INPUT;
    }

    let output = match item.calculate() {
        Ok(o) => o,
        Err(e) => {
            output_errors(std::slice::from_ref(&e), format);
            return if e.is_input_error() { EXIT_INVALID_INPUT } else { EXIT_FAILURE };
        }
    };

    let limit = settings.voltage_drop_limit_percent;
    match format {
        OutputFormat::Human => {
            output_human(&item, &output, limit);
            0
        }
        OutputFormat::Json => {
            let body = SizingBody {
                voltage_drop_limit_percent: limit,
                voltage_drop_ok: output.voltage_drop_ok(limit),
                complete: output.is_complete(),
                result: &output,
            };
            print_json(&JsonReport::new(&body))
        }
    }
}

fn output_errors(errors: &[CalcError], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            eprintln!("Invalid input:");
            for e in errors {
                eprintln!("  • {}", e);
            }
        }
        OutputFormat::Json => {
            print_json(&JsonReport::new(&ErrorBody { errors }));
        }
    }
}

fn output_human(item: &CalculationItem, output: &CalculationOutput, limit: f64) {
    println!("═══════════════════════════════════════");
    println!("  {} SIZING: {}", item.calc_type().to_uppercase(), item.label());
    println!("═══════════════════════════════════════");
    println!();

    if let CalculationOutput::Load(result) = output {
        if let Some(derating) = &result.run.derating {
            println!("{}", derating.format_report());
            println!();
        }
    }

    println!("{}", output.format_report());
    println!();
    println!("═══════════════════════════════════════");
    if !output.is_complete() {
        println!("  NOTE: Some selections are beyond the supported tables (N/A)");
    }
    println!(
        "  Voltage drop: {} ({:.1}% limit)",
        status_icon(output.voltage_drop_ok(limit)),
        limit
    );
    println!("═══════════════════════════════════════");
}

fn handle_tables(format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => {
            println!("Conductors ({}, {}, {})", nec_ref::AMPACITY, nec_ref::CONDUCTOR_DIAMETER, nec_ref::CONDUCTOR_RESISTANCE);
            println!("  {:<6} {:>10} {:>10} {:>12}", "AWG", "Ampacity", "OD (in)", "Ω/1000 ft");
            for row in &GAUGE_TABLE {
                println!(
                    "  {:<6} {:>8} A {:>10.3} {:>12.3}",
                    row.gauge.display_name(),
                    row.ampacity_a,
                    row.outer_diameter_in,
                    row.resistance_ohm_per_kft
                );
            }
            println!();
            println!("EMT Conduit ({})", nec_ref::EMT_AREA);
            for row in &CONDUIT_TABLE {
                println!("  {:<8} {:>8.3} in²", row.size.label(), row.internal_area_sq_in);
            }
            println!();
            println!("Breakers ({})", nec_ref::BREAKER_RATINGS);
            let ladder: Vec<String> = BREAKER_LADDER.iter().map(|a| format!("{}A", a)).collect();
            println!("  {}", ladder.join(", "));
            println!();
            println!("Equipment Ground ({})", nec_ref::EQUIPMENT_GROUND);
            for row in &GROUND_TABLE {
                println!("  ≤ {:>4} A   {}", row.max_breaker_a, row.gauge);
            }
            if let Some(last) = GROUND_TABLE.last() {
                println!("  > {:>4} A   {}", last.max_breaker_a, GROUND_FALLBACK);
            }
            0
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Tables<'a> {
                gauges: &'a [GaugeRecord],
                conduits: &'a [ConduitRecord],
                breakers: &'a [u32],
                grounds: &'a [GroundRecord],
                ground_fallback: Gauge,
            }
            let tables = Tables {
                gauges: &GAUGE_TABLE,
                conduits: &CONDUIT_TABLE,
                breakers: &BREAKER_LADDER,
                grounds: &GROUND_TABLE,
                ground_fallback: GROUND_FALLBACK,
            };
            print_json(&JsonReport::new(&tables))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", CalcError::from(e));
            EXIT_FAILURE
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "✓ OK"
    } else {
        "✗ EXCEEDS"
    }
}
