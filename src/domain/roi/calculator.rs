//! ROI Calculator - Savings, investment and return projection.

use std::sync::Arc;

use crate::domain::foundation::{Percentage, ValidationError};
use crate::ports::PlanCatalog;

use super::{
    CalculationInput, CalculationReport, LicenseBreakdown, LicensePricing, RevenueProjection,
    RoiError,
};

/// Months per year used by every annualized figure.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Minutes per hour used to convert handling time.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Inputs after validation, converted to the units the formulas use.
struct ValidatedInput {
    monthly_inquiries: f64,
    automation: Percentage,
    minutes_per_inquiry: f64,
    monthly_crm_hours: f64,
    crm_automation: Percentage,
    team_members: f64,
    hourly_cost: f64,
    license: LicenseBreakdown,
    implementation_cost: f64,
    revenue: Option<RevenueProjection>,
}

/// Stateless ROI engine.
///
/// Holds only the injected plan catalog, which is read-only, so a single
/// calculator can serve concurrent callers without locking.
#[derive(Clone)]
pub struct ROICalculator {
    catalog: Arc<dyn PlanCatalog>,
}

impl ROICalculator {
    pub fn new(catalog: Arc<dyn PlanCatalog>) -> Self {
        Self { catalog }
    }

    /// The plan catalog used to price plan-based licenses.
    pub fn catalog(&self) -> &Arc<dyn PlanCatalog> {
        &self.catalog
    }

    /// Validates `input` and derives the financial report.
    ///
    /// # Errors
    ///
    /// - `RoiError::Validation` for negative, non-finite or out-of-range
    ///   fields, `team_members < 1`, or an unknown plan name.
    /// - `RoiError::DivisionByZero` when implementation and license costs
    ///   are both zero.
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationReport, RoiError> {
        let inputs = self.validate(input)?;

        let chatbot_monthly_hours_saved = inputs.monthly_inquiries
            * inputs.automation.as_fraction()
            * (inputs.minutes_per_inquiry / MINUTES_PER_HOUR);
        let chatbot_annual_savings =
            chatbot_monthly_hours_saved * MONTHS_PER_YEAR * inputs.hourly_cost;

        let crm_annual_hours_saved = inputs.monthly_crm_hours
            * inputs.crm_automation.as_fraction()
            * MONTHS_PER_YEAR
            * inputs.team_members;
        let crm_annual_savings = crm_annual_hours_saved * inputs.hourly_cost;

        let annual_license_cost = match &inputs.license {
            LicenseBreakdown::Plan(plan) => plan.annual_price(),
            LicenseBreakdown::Annual { annual_cost } => *annual_cost,
        };
        let total_investment = inputs.implementation_cost + annual_license_cost;

        let additional_annual_revenue = inputs
            .revenue
            .map(|revenue| Self::additional_revenue(inputs.monthly_inquiries, &revenue));

        let total_annual_savings =
            chatbot_annual_savings + crm_annual_savings + additional_annual_revenue.unwrap_or(0.0);

        let roi_percentage = Self::roi_percentage(total_annual_savings, total_investment)?;

        let total_hours_saved_annually =
            chatbot_monthly_hours_saved * MONTHS_PER_YEAR + crm_annual_hours_saved;

        let payback_months = Self::payback_months(total_investment, total_annual_savings);

        Ok(CalculationReport {
            chatbot_monthly_hours_saved,
            chatbot_annual_savings,
            crm_annual_hours_saved,
            crm_annual_savings,
            annual_license_cost,
            total_investment,
            total_annual_savings,
            roi_percentage,
            total_hours_saved_annually,
            payback_months,
            additional_annual_revenue,
            license: inputs.license,
        })
    }

    /// Revenue gained from the conversion uplift; a drop counts as no uplift.
    fn additional_revenue(monthly_inquiries: f64, revenue: &RevenueProjection) -> f64 {
        let uplift = revenue.expected_conversion_rate - revenue.current_conversion_rate;
        let additional =
            monthly_inquiries * MONTHS_PER_YEAR * revenue.average_ticket_ars * uplift / 100.0;
        additional.max(0.0)
    }

    /// Whole-number ROI, undefined for a zero investment.
    fn roi_percentage(total_annual_savings: f64, total_investment: f64) -> Result<f64, RoiError> {
        if total_investment == 0.0 {
            return Err(RoiError::DivisionByZero);
        }
        Ok(((total_annual_savings - total_investment) / total_investment * 100.0).round())
    }

    /// Payback estimate in months, at least one.
    ///
    /// Savings are floored at one so zero savings still yield a finite figure.
    fn payback_months(total_investment: f64, total_annual_savings: f64) -> f64 {
        let months = (total_investment / total_annual_savings.max(1.0) * MONTHS_PER_YEAR).round();
        months.max(1.0)
    }

    fn validate(&self, input: &CalculationInput) -> Result<ValidatedInput, ValidationError> {
        let monthly_inquiries = non_negative_count("monthly_inquiries", input.monthly_inquiries)?;
        let automation =
            Percentage::try_new("automation_percentage", input.automation_percentage)?;
        let minutes_per_inquiry =
            non_negative("minutes_per_inquiry", input.minutes_per_inquiry)?;
        let monthly_crm_hours = non_negative("monthly_crm_hours", input.monthly_crm_hours)?;
        let crm_automation =
            Percentage::try_new("crm_automation_percentage", input.crm_automation_percentage)?;

        if input.team_members < 1 {
            return Err(ValidationError::invalid_value(
                "team_members",
                format!("must be at least 1, got {}", input.team_members),
            ));
        }
        let team_members = input.team_members as f64;

        let hourly_cost = non_negative("hourly_cost_ars", input.hourly_cost_ars)?;
        let license = self.resolve_license(&input.license)?;
        let implementation_cost = non_negative("implementation_cost", input.implementation_cost)?;

        let revenue = match input.revenue_projection() {
            Some(revenue) => Some(validate_revenue(revenue)?),
            None => None,
        };

        Ok(ValidatedInput {
            monthly_inquiries,
            automation,
            minutes_per_inquiry,
            monthly_crm_hours,
            crm_automation,
            team_members,
            hourly_cost,
            license,
            implementation_cost,
            revenue,
        })
    }

    fn resolve_license(&self, pricing: &LicensePricing) -> Result<LicenseBreakdown, ValidationError> {
        match pricing {
            LicensePricing::Plan { plan_name } => self
                .catalog
                .find(plan_name)
                .map(LicenseBreakdown::Plan)
                .ok_or_else(|| {
                    ValidationError::invalid_value(
                        "license.plan_name",
                        format!("unknown plan '{}'", plan_name.trim()),
                    )
                }),
            LicensePricing::Annual { annual_cost } => Ok(LicenseBreakdown::Annual {
                annual_cost: non_negative("license.annual_cost", *annual_cost)?,
            }),
        }
    }
}

fn validate_revenue(revenue: RevenueProjection) -> Result<RevenueProjection, ValidationError> {
    non_negative("average_ticket_ars", revenue.average_ticket_ars)?;
    Percentage::try_new("current_conversion_rate", revenue.current_conversion_rate)?;
    Percentage::try_new("expected_conversion_rate", revenue.expected_conversion_rate)?;
    Ok(revenue)
}

fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::not_finite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::negative(field, value));
    }
    Ok(value)
}

fn non_negative_count(field: &str, value: i64) -> Result<f64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::negative(field, value as f64));
    }
    Ok(value as f64)
}
