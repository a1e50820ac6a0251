//! # wire_core - Electrical Conductor Sizing Engine
//!
//! `wire_core` sizes conductors, conduit, breakers and equipment grounds for
//! branch circuits and small PV systems, and computes voltage drop. All
//! inputs and outputs are JSON-serializable so results can be stored or
//! handed to another tool as-is.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over fixed code tables
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Explicit absence**: A requirement beyond the tables is `None`, never
//!   a clamped value
//! - **Rich Errors**: Structured error types for input validation
//!
//! ## Quick Start
//!
//! ```rust
//! use wire_core::calculations::load::{calculate, LoadInput, LoadQuantity};
//! use wire_core::circuit::{Circuit, Phase};
//!
//! let input = LoadInput {
//!     description: "7.5 HP Pool Pump".to_string(),
//!     quantity: LoadQuantity::Horsepower(7.5),
//!     voltage_v: 240.0,
//!     circuit: Circuit::Ac(Phase::Single),
//!     length_ft: 75.0,
//!     ambient_temp_f: 86.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.min_ampacity_a, 32.4);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`tables`] - Gauge, conduit, temperature, breaker and ground tables
//! - [`derating`] - Temperature and conductor-count ampacity derating
//! - [`sizing`] - Gauge, conduit, breaker, ground and voltage-drop selectors
//! - [`calculations`] - Load-based and PV scenario engines
//! - [`circuit`] - AC/DC and phase configuration
//! - [`validation`] - Input field checks
//! - [`settings`] - User preferences
//! - [`units`] - Type-safe unit wrappers and rounding
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod circuit;
pub mod derating;
pub mod errors;
pub mod settings;
pub mod sizing;
pub mod tables;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use circuit::{Circuit, Phase};
pub use errors::{CalcError, CalcResult};
pub use settings::{OutputFormat, Settings};
pub use tables::{ConduitSize, Gauge};
