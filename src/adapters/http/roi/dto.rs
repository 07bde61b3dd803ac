//! HTTP DTOs for ROI endpoints.
//!
//! The request DTO is where loosely-typed form input gets normalized: an
//! empty string in an optional field means "not provided" and never
//! reaches the engine.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::application::handlers::CalculationRecord;
use crate::domain::foundation::{CalculationId, DomainError, Timestamp};
use crate::domain::roi::{CalculationInput, LicenseBreakdown, LicensePricing};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to compute an ROI projection.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRoiRequest {
    pub monthly_inquiries: i64,
    pub automation_percentage: f64,
    pub minutes_per_inquiry: f64,
    pub monthly_crm_hours: f64,
    pub crm_automation_percentage: f64,
    pub team_members: i64,
    pub hourly_cost_ars: f64,
    pub license: LicensePricing,
    pub implementation_cost: f64,
    #[serde(default, deserialize_with = "optional_number")]
    pub average_ticket_ars: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub current_conversion_rate: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub expected_conversion_rate: Option<f64>,
}

impl From<CalculateRoiRequest> for CalculationInput {
    fn from(req: CalculateRoiRequest) -> Self {
        CalculationInput {
            monthly_inquiries: req.monthly_inquiries,
            automation_percentage: req.automation_percentage,
            minutes_per_inquiry: req.minutes_per_inquiry,
            monthly_crm_hours: req.monthly_crm_hours,
            crm_automation_percentage: req.crm_automation_percentage,
            team_members: req.team_members,
            hourly_cost_ars: req.hourly_cost_ars,
            license: req.license,
            implementation_cost: req.implementation_cost,
            average_ticket_ars: req.average_ticket_ars,
            current_conversion_rate: req.current_conversion_rate,
            expected_conversion_rate: req.expected_conversion_rate,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts a number, a numeric string, null, or an empty string (= absent).
fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected a number, got '{}'", s))),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// ROI projection response. Money and hour figures are rounded to cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRoiResponse {
    pub inputs: CalculationInput,
    pub chatbot_monthly_hours_saved: f64,
    pub chatbot_annual_savings: f64,
    pub crm_annual_hours_saved: f64,
    pub crm_annual_savings: f64,
    pub annual_license_cost: f64,
    pub total_investment: f64,
    pub total_annual_savings: f64,
    pub roi_percentage: f64,
    pub total_hours_saved_annually: f64,
    pub payback_months: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_annual_revenue: Option<f64>,
    pub license: LicenseBreakdown,
    pub calculation_date: Timestamp,
    pub calculation_id: CalculationId,
}

impl From<CalculationRecord> for CalculateRoiResponse {
    fn from(record: CalculationRecord) -> Self {
        let report = record.report;
        Self {
            inputs: record.input,
            chatbot_monthly_hours_saved: round2(report.chatbot_monthly_hours_saved),
            chatbot_annual_savings: round2(report.chatbot_annual_savings),
            crm_annual_hours_saved: round2(report.crm_annual_hours_saved),
            crm_annual_savings: round2(report.crm_annual_savings),
            annual_license_cost: round2(report.annual_license_cost),
            total_investment: round2(report.total_investment),
            total_annual_savings: round2(report.total_annual_savings),
            roi_percentage: report.roi_percentage,
            total_hours_saved_annually: round2(report.total_hours_saved_annually),
            payback_months: report.payback_months,
            additional_annual_revenue: report.additional_annual_revenue.map(round2),
            license: report.license,
            calculation_date: record.calculation_date,
            calculation_id: record.calculation_id,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "ROI Calculator API is running".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
