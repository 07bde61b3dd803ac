//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Pricing Ports
//!
//! - `PlanCatalog` - License plan lookup injected into the ROI engine

mod plan_catalog;

pub use plan_catalog::{PlanCatalog, PlanCatalogError};
