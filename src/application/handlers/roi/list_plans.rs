//! ListPlansHandler - Query handler for the license plan catalog.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::roi::LicensePlan;
use crate::ports::PlanCatalog;

/// Catalog contents as shown in the plan selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCatalogView {
    pub currency: String,
    pub plans: Vec<LicensePlan>,
}

/// Handler for listing available license plans.
pub struct ListPlansHandler {
    catalog: Arc<dyn PlanCatalog>,
}

impl ListPlansHandler {
    pub fn new(catalog: Arc<dyn PlanCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self) -> PlanCatalogView {
        PlanCatalogView {
            currency: self.catalog.currency().to_string(),
            plans: self.catalog.plans(),
        }
    }
}
