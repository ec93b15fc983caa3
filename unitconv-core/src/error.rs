//! Conversion errors
//!
//! Every failure names the exact input that was rejected, so callers can
//! report it without re-parsing anything. `ErrorReport` is the serializable
//! form handed to machine consumers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_QUANTITY: &str = "UNKNOWN_QUANTITY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNSUPPORTED_TEMPERATURE_UNIT: &str = "UNSUPPORTED_TEMPERATURE_UNIT";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
}

/// Which side of a conversion a unit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    From,
    To,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::From => write!(f, "from"),
            Direction::To => write!(f, "to"),
        }
    }
}

/// The operation that failed to resolve a quantity.
///
/// Listing units reports an "unknown" quantity, converting reports an
/// "unsupported" one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lookup {
    Listing,
    Conversion,
}

impl Lookup {
    fn label(self) -> &'static str {
        match self {
            Lookup::Listing => "Unknown quantity",
            Lookup::Conversion => "Unsupported quantity",
        }
    }
}

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("{}: {quantity}", .lookup.label())]
    UnknownQuantity { quantity: String, lookup: Lookup },

    #[error("Unknown unit for {quantity}: {unit}")]
    UnknownUnit {
        quantity: String,
        unit: String,
        direction: Direction,
    },

    #[error("Unsupported temperature unit: {unit}")]
    UnsupportedTemperatureUnit { unit: String, direction: Direction },

    #[error("Invalid value: {input}")]
    InvalidValue { input: String },
}

impl ConvertError {
    pub fn unknown_quantity(quantity: impl Into<String>, lookup: Lookup) -> Self {
        ConvertError::UnknownQuantity {
            quantity: quantity.into(),
            lookup,
        }
    }

    pub fn unknown_unit(
        quantity: impl Into<String>,
        unit: impl Into<String>,
        direction: Direction,
    ) -> Self {
        ConvertError::UnknownUnit {
            quantity: quantity.into(),
            unit: unit.into(),
            direction,
        }
    }

    pub fn unsupported_temperature_unit(unit: impl Into<String>, direction: Direction) -> Self {
        ConvertError::UnsupportedTemperatureUnit {
            unit: unit.into(),
            direction,
        }
    }

    pub fn invalid_value(input: impl Into<String>) -> Self {
        ConvertError::InvalidValue {
            input: input.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::UnknownQuantity { .. } => codes::UNKNOWN_QUANTITY,
            ConvertError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConvertError::UnsupportedTemperatureUnit { .. } => codes::UNSUPPORTED_TEMPERATURE_UNIT,
            ConvertError::InvalidValue { .. } => codes::INVALID_VALUE,
        }
    }

    /// The input string that was rejected
    pub fn offending_input(&self) -> &str {
        match self {
            ConvertError::UnknownQuantity { quantity, .. } => quantity,
            ConvertError::UnknownUnit { unit, .. } => unit,
            ConvertError::UnsupportedTemperatureUnit { unit, .. } => unit,
            ConvertError::InvalidValue { input } => input,
        }
    }

    /// Which unit was rejected, if the error is about a unit
    pub fn direction(&self) -> Option<Direction> {
        match self {
            ConvertError::UnknownUnit { direction, .. }
            | ConvertError::UnsupportedTemperatureUnit { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// True for both generic and temperature unit failures
    pub fn is_unknown_unit(&self) -> bool {
        matches!(
            self,
            ConvertError::UnknownUnit { .. } | ConvertError::UnsupportedTemperatureUnit { .. }
        )
    }
}

/// Structured error for display and JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// The rejected input
    pub input: String,

    /// Which unit was rejected, for unit errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            input: err.offending_input().to_string(),
            direction: err.direction(),
            suggestion: None,
        }
    }
}

impl From<ConvertError> for ErrorReport {
    fn from(err: ConvertError) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
