//! ROI calculation errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Why a calculation produced no report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoiError {
    /// An input field is negative, out of range, or otherwise unusable.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Total investment is zero, so ROI is undefined.
    #[error("ROI is undefined when total investment is zero")]
    DivisionByZero,
}

impl RoiError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RoiError::Validation(_) => ErrorCode::ValidationFailed,
            RoiError::DivisionByZero => ErrorCode::DivisionByZero,
        }
    }
}

impl From<RoiError> for DomainError {
    fn from(err: RoiError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            RoiError::Validation(validation) => validation.into(),
            RoiError::DivisionByZero => {
                DomainError::new(code, message).with_detail("field", "total_investment")
            }
        }
    }
}
