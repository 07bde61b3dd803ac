//! ROI handlers - Calculation command and plan catalog query.

mod calculate_roi;
mod list_plans;

pub use calculate_roi::{CalculateRoiCommand, CalculateRoiHandler, CalculationRecord};
pub use list_plans::{ListPlansHandler, PlanCatalogView};
