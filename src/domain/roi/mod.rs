//! ROI Module - Return-on-investment projection for chatbot and CRM automation.
//!
//! # Components
//!
//! - `CalculationInput` - Operational parameters submitted by the user
//! - `LicensePricing` - Plan-based or flat annual license cost
//! - `LicensePlan` - Catalog entry (name, monthly price, description)
//! - `CalculationReport` - Savings, investment, ROI and payback figures
//! - `ROICalculator` - The validate → derive → assemble engine
//!
//! # Design Philosophy
//!
//! The engine is pure: no I/O, no logging, no clock. Identifiers and
//! timestamps are stamped on by the application layer.

mod calculator;
mod errors;
mod input;
mod plan;
mod report;

pub use calculator::{ROICalculator, MONTHS_PER_YEAR};
pub use errors::RoiError;
pub use input::{CalculationInput, LicensePricing, RevenueProjection};
pub use plan::LicensePlan;
pub use report::{CalculationReport, LicenseBreakdown};
