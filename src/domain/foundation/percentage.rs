//! Percentage value object (0-100 scale).

use super::ValidationError;

/// A value between 0 and 100 inclusive.
///
/// Fractional values are allowed (e.g. `62.5`). Construction never clamps:
/// anything outside the range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Creates a Percentage for `field`, returning error if out of range.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite(field));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}
