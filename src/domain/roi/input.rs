//! Calculation input record.

use serde::{Deserialize, Serialize};

/// How the CRM license is priced.
///
/// Exactly one mode applies per calculation, so plan prices and flat annual
/// figures are never mixed into the same total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LicensePricing {
    /// Monthly price looked up by plan name in the injected catalog.
    Plan { plan_name: String },
    /// Flat yearly license figure.
    Annual { annual_cost: f64 },
}

/// Operational parameters submitted for an ROI projection.
///
/// Values are taken as supplied; `ROICalculator::compute` validates them
/// before doing any arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Customer inquiries received per month.
    pub monthly_inquiries: i64,
    /// Share of inquiries the chatbot resolves (0-100).
    pub automation_percentage: f64,
    /// Average handling time per inquiry, in minutes.
    pub minutes_per_inquiry: f64,
    /// Manual CRM/admin hours per team member per month.
    pub monthly_crm_hours: f64,
    /// Share of CRM work that gets automated (0-100).
    pub crm_automation_percentage: f64,
    /// Staff doing CRM work; must be at least one.
    pub team_members: i64,
    /// Fully loaded labor cost per hour.
    pub hourly_cost_ars: f64,
    pub license: LicensePricing,
    /// One-time setup cost.
    pub implementation_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_ticket_ars: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_conversion_rate: Option<f64>,
}

/// The revenue block, present only when all three fields were supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueProjection {
    pub average_ticket_ars: f64,
    pub current_conversion_rate: f64,
    pub expected_conversion_rate: f64,
}

impl CalculationInput {
    /// Returns the revenue block if every field of it is present.
    ///
    /// A partially filled block counts as not provided.
    pub fn revenue_projection(&self) -> Option<RevenueProjection> {
        match (
            self.average_ticket_ars,
            self.current_conversion_rate,
            self.expected_conversion_rate,
        ) {
            (Some(ticket), Some(current), Some(expected)) => Some(RevenueProjection {
                average_ticket_ars: ticket,
                current_conversion_rate: current,
                expected_conversion_rate: expected,
            }),
            _ => None,
        }
    }
}

impl Default for CalculationInput {
    /// Typical Argentine SME profile used as the form's starting values.
    fn default() -> Self {
        Self {
            monthly_inquiries: 1000,
            automation_percentage: 60.0,
            minutes_per_inquiry: 4.0,
            monthly_crm_hours: 40.0,
            crm_automation_percentage: 50.0,
            team_members: 3,
            hourly_cost_ars: 5000.0,
            license: LicensePricing::Annual {
                annual_cost: 200_000.0,
            },
            implementation_cost: 1_000_000.0,
            average_ticket_ars: None,
            current_conversion_rate: None,
            expected_conversion_rate: None,
        }
    }
}
