//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Plan catalog implementations (in-memory, YAML file)
//! - `http` - Axum REST endpoints

pub mod catalog;
pub mod http;

pub use catalog::{catalog_from_config, InMemoryPlanCatalog, YamlPlanCatalog};
