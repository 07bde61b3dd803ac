//! Calculation report produced by the ROI engine.

use serde::{Deserialize, Serialize};

use super::LicensePlan;

/// The licensing figure that went into the investment total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LicenseBreakdown {
    /// Plan resolved from the catalog.
    Plan(LicensePlan),
    /// Flat annual figure supplied with the request.
    Annual { annual_cost: f64 },
}

/// Financial projection for one set of inputs.
///
/// Values are unrounded; presentation rounding belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub chatbot_monthly_hours_saved: f64,
    pub chatbot_annual_savings: f64,
    pub crm_annual_hours_saved: f64,
    pub crm_annual_savings: f64,
    pub annual_license_cost: f64,
    pub total_investment: f64,
    pub total_annual_savings: f64,
    /// Whole-number ROI percentage.
    pub roi_percentage: f64,
    pub total_hours_saved_annually: f64,
    /// Whole months until savings cover the investment; never below one.
    pub payback_months: f64,
    /// Present only when the full revenue block was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_annual_revenue: Option<f64>,
    pub license: LicenseBreakdown,
}

impl CalculationReport {
    /// True when the projected savings exceed the investment.
    pub fn is_profitable(&self) -> bool {
        self.total_annual_savings > self.total_investment
    }
}
