//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod roi;

pub use roi::{
    CalculateRoiCommand, CalculateRoiHandler, CalculationRecord, ListPlansHandler,
    PlanCatalogView,
};
