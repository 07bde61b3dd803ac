//! In-memory plan catalog.

use std::collections::HashMap;

use crate::domain::roi::LicensePlan;
use crate::ports::{PlanCatalog, PlanCatalogError};

/// Static plan table held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryPlanCatalog {
    currency: String,
    plans: Vec<LicensePlan>,
    index: HashMap<String, usize>,
}

impl InMemoryPlanCatalog {
    /// Builds a catalog, validating every plan and rejecting duplicate names.
    pub fn try_new(
        currency: impl Into<String>,
        plans: Vec<LicensePlan>,
    ) -> Result<Self, PlanCatalogError> {
        let mut index = HashMap::with_capacity(plans.len());
        let mut normalized = Vec::with_capacity(plans.len());

        for mut plan in plans {
            plan.validate()?;
            plan.name = plan.name.trim().to_string();
            if index.contains_key(&plan.name) {
                return Err(PlanCatalogError::DuplicatePlan(plan.name));
            }
            index.insert(plan.name.clone(), normalized.len());
            normalized.push(plan);
        }

        Ok(Self {
            currency: currency.into(),
            plans: normalized,
            index,
        })
    }

    /// A catalog with no plans; plan-priced requests are rejected.
    pub fn empty(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            plans: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Bitrix24 plans priced in USD per month.
    pub fn bitrix24() -> Self {
        let plans = [
            ("Basic Plan", 49.0, "Essential CRM features for small teams"),
            ("Standard Plan", 99.0, "Advanced automation and reporting"),
            ("Professional Plan", 199.0, "Complete business solution with integrations"),
            ("Enterprise Plan", 399.0, "Full-scale enterprise solution with premium support"),
        ];

        let plans: Vec<LicensePlan> = plans
            .iter()
            .map(|(name, monthly_price, description)| LicensePlan {
                name: (*name).to_string(),
                monthly_price: *monthly_price,
                description: (*description).to_string(),
            })
            .collect();
        let index = plans
            .iter()
            .enumerate()
            .map(|(i, plan)| (plan.name.clone(), i))
            .collect();

        Self {
            currency: "USD".to_string(),
            plans,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanCatalog for InMemoryPlanCatalog {
    fn currency(&self) -> &str {
        &self.currency
    }

    fn plans(&self) -> Vec<LicensePlan> {
        self.plans.clone()
    }

    fn find(&self, name: &str) -> Option<LicensePlan> {
        self.index
            .get(name.trim())
            .and_then(|&i| self.plans.get(i))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitrix24_catalog_has_four_plans_in_order() {
        let catalog = InMemoryPlanCatalog::bitrix24();
        let names: Vec<String> = catalog.plans().into_iter().map(|p| p.name).collect();

        assert_eq!(
            names,
            vec!["Basic Plan", "Standard Plan", "Professional Plan", "Enterprise Plan"]
        );
        assert_eq!(catalog.currency(), "USD");
    }

    #[test]
    fn find_returns_plan_by_name() {
        let catalog = InMemoryPlanCatalog::bitrix24();
        let plan = catalog.find("Professional Plan").unwrap();
        assert_eq!(plan.monthly_price, 199.0);
    }

    #[test]
    fn find_trims_but_is_case_sensitive() {
        let catalog = InMemoryPlanCatalog::bitrix24();
        assert!(catalog.find(" Standard Plan ").is_some());
        assert!(catalog.find("standard plan").is_none());
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let plans = vec![
            LicensePlan::new("Basic", 10.0, "").unwrap(),
            LicensePlan::new("Basic ", 20.0, "").unwrap(),
        ];

        assert!(matches!(
            InMemoryPlanCatalog::try_new("ARS", plans),
            Err(PlanCatalogError::DuplicatePlan(name)) if name == "Basic"
        ));
    }

    #[test]
    fn try_new_rejects_invalid_plan() {
        let plans = vec![LicensePlan {
            name: "Broken".to_string(),
            monthly_price: -5.0,
            description: String::new(),
        }];

        assert!(matches!(
            InMemoryPlanCatalog::try_new("ARS", plans),
            Err(PlanCatalogError::InvalidPlan(_))
        ));
    }

    #[test]
    fn empty_catalog_finds_nothing() {
        let catalog = InMemoryPlanCatalog::empty("ARS");
        assert!(catalog.is_empty());
        assert!(catalog.find("Basic Plan").is_none());
    }
}
