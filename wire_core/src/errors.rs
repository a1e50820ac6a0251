//! # Error Types
//!
//! Structured error types for wire_core. Selectors in the engine never fail:
//! a lookup that runs off the end of a table returns `None`. These errors are
//! produced by the input validation gate, by label parsing, by settings
//! loading, and by the `require_*` helpers on sizing results.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_ft: f64) -> CalcResult<()> {
//!     if length_ft <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_ft".to_string(),
//!             value: length_ft.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wire_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A wire gauge label does not name a tabulated size
    #[error("Unknown wire gauge: {label}")]
    UnknownGauge { label: String },

    /// A conduit trade size label does not name a tabulated size
    #[error("Unknown conduit trade size: {label}")]
    UnknownConduitSize { label: String },

    /// The requirement is beyond the largest tabulated gauge, conduit or breaker
    #[error("Range exceeded: {quantity} of {value} is beyond the supported limit ({limit})")]
    RangeExceeded {
        quantity: String,
        value: String,
        limit: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownGauge error
    pub fn unknown_gauge(label: impl Into<String>) -> Self {
        CalcError::UnknownGauge {
            label: label.into(),
        }
    }

    /// Create an UnknownConduitSize error
    pub fn unknown_conduit_size(label: impl Into<String>) -> Self {
        CalcError::UnknownConduitSize {
            label: label.into(),
        }
    }

    /// Create a RangeExceeded error
    pub fn range_exceeded(quantity: impl Into<String>, value: impl Into<String>, limit: impl Into<String>) -> Self {
        CalcError::RangeExceeded {
            quantity: quantity.into(),
            value: value.into(),
            limit: limit.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error came from user-entered values (fixable by editing the form)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::UnknownGauge { .. }
                | CalcError::UnknownConduitSize { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownGauge { .. } => "UNKNOWN_GAUGE",
            CalcError::UnknownConduitSize { .. } => "UNKNOWN_CONDUIT_SIZE",
            CalcError::RangeExceeded { .. } => "RANGE_EXCEEDED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
