//! Plan catalog port for license price lookups.
//!
//! The catalog is static configuration data: a table mapping plan names to
//! monthly prices. The ROI engine receives it by injection so plan pricing
//! can change without touching calculation code.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::roi::LicensePlan;

/// Port for resolving license plans by name.
///
/// Implementations are read-only after construction and safe to share
/// across threads.
pub trait PlanCatalog: Send + Sync {
    /// ISO 4217 code the plan prices are expressed in.
    fn currency(&self) -> &str;

    /// All plans in display order.
    fn plans(&self) -> Vec<LicensePlan>;

    /// Looks up a plan by exact name, ignoring surrounding whitespace.
    fn find(&self, name: &str) -> Option<LicensePlan>;
}

/// Errors raised while building a plan catalog.
#[derive(Debug, Error)]
pub enum PlanCatalogError {
    #[error("Failed to read plan catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse plan catalog: {0}")]
    Parse(String),

    #[error("Duplicate plan name: {0}")]
    DuplicatePlan(String),

    #[error("Invalid currency code '{0}': expected three letters")]
    InvalidCurrency(String),

    #[error("Invalid plan: {0}")]
    InvalidPlan(#[from] ValidationError),

    #[error("Plan catalog currency '{found}' does not match configured currency '{expected}'")]
    CurrencyMismatch { expected: String, found: String },
}
