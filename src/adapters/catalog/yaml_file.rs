//! YAML file plan catalog.
//!
//! Reads a catalog document of the form:
//!
//! ```yaml
//! currency: ARS
//! plans:
//!   - name: Basic Plan
//!     monthly_price: 45000
//!     description: Essential CRM features for small teams
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::domain::roi::LicensePlan;
use crate::ports::{PlanCatalog, PlanCatalogError};

use super::InMemoryPlanCatalog;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    currency: String,
    #[serde(default)]
    plans: Vec<LicensePlan>,
}

/// Plan catalog loaded once from a YAML file.
#[derive(Debug, Clone)]
pub struct YamlPlanCatalog {
    inner: InMemoryPlanCatalog,
}

impl YamlPlanCatalog {
    /// Loads and validates the catalog at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlanCatalogError> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&yaml)
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, PlanCatalogError> {
        let document: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| PlanCatalogError::Parse(e.to_string()))?;

        let currency = normalize_currency(&document.currency)?;
        let inner = InMemoryPlanCatalog::try_new(currency, document.plans)?;
        Ok(Self { inner })
    }
}

/// Catalog files are hand-edited, so `ars` and ` ARS ` both mean `ARS`.
fn normalize_currency(raw: &str) -> Result<String, PlanCatalogError> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(PlanCatalogError::InvalidCurrency(raw.to_string()));
    }
    Ok(code)
}

impl PlanCatalog for YamlPlanCatalog {
    fn currency(&self) -> &str {
        self.inner.currency()
    }

    fn plans(&self) -> Vec<LicensePlan> {
        self.inner.plans()
    }

    fn find(&self, name: &str) -> Option<LicensePlan> {
        self.inner.find(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"
currency: ARS
plans:
  - name: Basic Plan
    monthly_price: 45000
    description: Essential CRM features for small teams
  - name: Standard Plan
    monthly_price: 90000
"#;

    #[test]
    fn loads_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = YamlPlanCatalog::load(file.path()).unwrap();

        assert_eq!(catalog.currency(), "ARS");
        assert_eq!(catalog.plans().len(), 2);
        assert_eq!(catalog.find("Standard Plan").unwrap().monthly_price, 90000.0);
        assert_eq!(catalog.find("Standard Plan").unwrap().description, "");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = YamlPlanCatalog::load(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(PlanCatalogError::Io(_))));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let result = YamlPlanCatalog::from_yaml("plans: [unterminated");
        assert!(matches!(result, Err(PlanCatalogError::Parse(_))));
    }

    #[test]
    fn missing_currency_is_parse_error() {
        let result = YamlPlanCatalog::from_yaml("plans: []");
        assert!(matches!(result, Err(PlanCatalogError::Parse(_))));
    }

    #[test]
    fn lowercase_currency_is_normalized() {
        let catalog = YamlPlanCatalog::from_yaml("currency: ' ars '\nplans: []").unwrap();
        assert_eq!(catalog.currency(), "ARS");
    }

    #[test]
    fn malformed_currency_is_rejected() {
        for code in ["PESO", "A1S", "''"] {
            let yaml = format!("currency: {}\nplans: []", code);
            assert!(
                matches!(
                    YamlPlanCatalog::from_yaml(&yaml),
                    Err(PlanCatalogError::InvalidCurrency(_))
                ),
                "accepted {:?}",
                code
            );
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let yaml = r#"
currency: ARS
plans:
  - name: Basic Plan
    monthly_price: 1
  - name: Basic Plan
    monthly_price: 2
"#;
        assert!(matches!(
            YamlPlanCatalog::from_yaml(yaml),
            Err(PlanCatalogError::DuplicatePlan(_))
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let yaml = r#"
currency: ARS
plans:
  - name: Basic Plan
    monthly_price: -10
"#;
        assert!(matches!(
            YamlPlanCatalog::from_yaml(yaml),
            Err(PlanCatalogError::InvalidPlan(_))
        ));
    }
}
