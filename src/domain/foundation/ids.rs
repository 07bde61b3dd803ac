//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier stamped onto every completed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationId(Uuid);

impl CalculationId {
    /// Creates a new random CalculationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
