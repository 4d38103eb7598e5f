//! # Error Types
//!
//! Structured error types for beam_core. Each analysis failure names the
//! offending field or load so the driver can report it without guessing.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if !(length > 0.0) {
//!         return Err(CalcError::invalid_geometry(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_length(-1.0).unwrap_err().error_code(), "INVALID_GEOMETRY");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for beam analysis and its I/O collaborators.
///
/// The first five variants come from building or analyzing a beam. The
/// remaining ones are only produced by [`crate::file_io`].
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Non-positive or non-finite beam length, width or height
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// Section properties unusable in a stress or deflection formula (I = 0)
    #[error("Invalid section: {reason}")]
    InvalidSection { reason: String },

    /// A formula denominator other than I evaluated to zero
    #[error("Division by zero: {quantity} is zero")]
    DivisionByZero { quantity: String },

    /// A load sits outside the closed interval [0, length]
    #[error("Load {index} at position {position} is outside the beam [0, {length}]")]
    OutOfRangeLoad {
        index: usize,
        position: f64,
        length: f64,
    },

    /// Any other invalid input value (modulus, load magnitude)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Malformed beam data text
    #[error("Parse error on line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSection error
    pub fn invalid_section(reason: impl Into<String>) -> Self {
        CalcError::InvalidSection {
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            quantity: quantity.into(),
        }
    }

    /// Create an OutOfRangeLoad error
    pub fn out_of_range_load(index: usize, position: f64, length: f64) -> Self {
        CalcError::OutOfRangeLoad {
            index,
            position,
            length,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(line: usize, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            line,
            reason: reason.into(),
        }
    }

    /// True for failures of the beam itself, as opposed to reading or writing files
    pub fn is_analysis_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidGeometry { .. }
                | CalcError::InvalidSection { .. }
                | CalcError::DivisionByZero { .. }
                | CalcError::OutOfRangeLoad { .. }
                | CalcError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidSection { .. } => "INVALID_SECTION",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::OutOfRangeLoad { .. } => "OUT_OF_RANGE_LOAD",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::ParseError { .. } => "PARSE_ERROR",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_range_load(2, 12.5, 10.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("OutOfRangeLoad"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_section("I = 0").error_code(), "INVALID_SECTION");
        assert_eq!(CalcError::division_by_zero("width").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::parse_error(3, "bad").error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_display_names_the_load() {
        let msg = CalcError::out_of_range_load(1, -0.5, 4.0).to_string();
        assert_eq!(msg, "Load 1 at position -0.5 is outside the beam [0, 4]");
    }

    #[test]
    fn test_analysis_vs_io_errors() {
        assert!(CalcError::invalid_geometry("width", "0", "zero").is_analysis_error());
        assert!(!CalcError::file_error("open", "x.csv", "missing").is_analysis_error());
    }
}
