//! License plan catalog entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A CRM license plan: name, monthly price and a short description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicensePlan {
    pub name: String,
    pub monthly_price: f64,
    #[serde(default)]
    pub description: String,
}

impl LicensePlan {
    /// Creates a plan, rejecting empty names and negative or non-finite prices.
    pub fn new(
        name: impl Into<String>,
        monthly_price: f64,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let plan = Self {
            name: name.into().trim().to_string(),
            monthly_price,
            description: description.into(),
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Checks the plan invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::invalid_value("plan.name", "cannot be empty"));
        }
        if !self.monthly_price.is_finite() {
            return Err(ValidationError::not_finite("plan.monthly_price"));
        }
        if self.monthly_price < 0.0 {
            return Err(ValidationError::negative(
                "plan.monthly_price",
                self.monthly_price,
            ));
        }
        Ok(())
    }

    /// Yearly license cost for this plan.
    pub fn annual_price(&self) -> f64 {
        self.monthly_price * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_new_trims_name() {
        let plan = LicensePlan::new("  Standard Plan ", 99.0, "Advanced automation").unwrap();
        assert_eq!(plan.name, "Standard Plan");
    }

    #[test]
    fn plan_new_rejects_empty_name() {
        assert!(LicensePlan::new("   ", 49.0, "").is_err());
    }

    #[test]
    fn plan_new_rejects_negative_price() {
        let err = LicensePlan::new("Broken", -1.0, "").unwrap_err();
        assert_eq!(err.field(), "plan.monthly_price");
    }

    #[test]
    fn plan_new_rejects_infinite_price() {
        assert!(matches!(
            LicensePlan::new("Broken", f64::INFINITY, ""),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn annual_price_is_twelve_months() {
        let plan = LicensePlan::new("Standard Plan", 99.0, "").unwrap();
        assert_eq!(plan.annual_price(), 1188.0);
    }

    #[test]
    fn description_defaults_when_missing() {
        let plan: LicensePlan =
            serde_json::from_str(r#"{"name":"Basic Plan","monthly_price":49}"#).unwrap();
        assert_eq!(plan.description, "");
    }
}
