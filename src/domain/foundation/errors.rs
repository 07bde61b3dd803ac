//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur while validating calculation inputs.
///
/// Every variant names the offending field so callers can point the user
/// at the exact input to correct.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must not be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' has invalid value: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
        }
    }

    /// Creates an invalid value validation error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Negative { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::InvalidValue { field, .. } => field,
        }
    }

    /// Human-readable reason, without the field name.
    pub fn reason(&self) -> String {
        match self {
            ValidationError::Negative { actual, .. } => {
                format!("must not be negative, got {}", actual)
            }
            ValidationError::OutOfRange {
                min, max, actual, ..
            } => format!("must be between {} and {}, got {}", min, max, actual),
            ValidationError::NotFinite { .. } => "must be a finite number".to_string(),
            ValidationError::InvalidValue { reason, .. } => reason.clone(),
        }
    }

    /// Error code matching this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Negative { .. } => ErrorCode::NegativeValue,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::NotFinite { .. } => ErrorCode::NotFinite,
            ValidationError::InvalidValue { .. } => ErrorCode::InvalidValue,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    NegativeValue,
    OutOfRange,
    NotFinite,
    InvalidValue,

    // Calculation errors
    DivisionByZero,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NegativeValue => "NEGATIVE_VALUE",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::NotFinite => "NOT_FINITE",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.field(), err.to_string())
            .with_detail("reason", err.reason())
            .with_detail("kind", err.code().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_negative_displays_correctly() {
        let err = ValidationError::negative("hourly_cost_ars", -5.0);
        assert_eq!(
            format!("{}", err),
            "Field 'hourly_cost_ars' must not be negative, got -5"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("automation_percentage", 0.0, 100.0, 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'automation_percentage' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_exposes_field_and_reason() {
        let err = ValidationError::invalid_value("license.plan_name", "unknown plan 'Gold'");
        assert_eq!(err.field(), "license.plan_name");
        assert_eq!(err.reason(), "unknown plan 'Gold'");

        let err = ValidationError::not_finite("minutes_per_inquiry");
        assert_eq!(err.field(), "minutes_per_inquiry");
        assert_eq!(err.reason(), "must be a finite number");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DivisionByZero, "Total investment is zero");
        assert_eq!(format!("{}", err), "[DIVISION_BY_ZERO] Total investment is zero");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "team_members")
            .with_detail("reason", "must be at least 1");

        assert_eq!(err.details.get("field"), Some(&"team_members".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"must be at least 1".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_field() {
        let err: DomainError = ValidationError::negative("implementation_cost", -1.0).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"implementation_cost".to_string()));
        assert_eq!(err.details.get("kind"), Some(&"NEGATIVE_VALUE".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::OutOfRange), "OUT_OF_RANGE");
        assert_eq!(format!("{}", ErrorCode::DivisionByZero), "DIVISION_BY_ZERO");
    }
}
