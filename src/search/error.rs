//! Errors raised while parsing or composing a filter

use super::criterion::Operator;
use thiserror::Error;

/// Reasons a filter expression is rejected
///
/// All variants are deterministic for a given input and schema, so callers
/// should report them to the client rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Malformed filter condition #{position} '{token}': {reason}")]
    MalformedFilter {
        token: String,
        position: usize,
        reason: &'static str,
    },

    #[error("Unknown filter field '{field}'")]
    UnknownField { field: String },

    #[error("Operator '{operator}' is not supported on {field_type} field '{field}'")]
    UnsupportedOperator {
        field: String,
        operator: Operator,
        field_type: &'static str,
    },

    #[error("Invalid value '{value}' for field '{field}', expected one of: {}", allowed.join(", "))]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid numeric value '{value}' for field '{field}'")]
    InvalidNumericValue { field: String, value: String },
}

impl FilterError {
    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FilterError::MalformedFilter { .. } => "MALFORMED_FILTER",
            FilterError::UnknownField { .. } => "UNKNOWN_FIELD",
            FilterError::UnsupportedOperator { .. } => "UNSUPPORTED_OPERATOR",
            FilterError::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            FilterError::InvalidNumericValue { .. } => "INVALID_NUMERIC_VALUE",
        }
    }

    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            FilterError::MalformedFilter { .. } => None,
            FilterError::UnknownField { field }
            | FilterError::UnsupportedOperator { field, .. }
            | FilterError::InvalidEnumValue { field, .. }
            | FilterError::InvalidNumericValue { field, .. } => Some(field),
        }
    }
}
