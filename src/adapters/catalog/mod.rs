//! Plan Catalog Adapters
//!
//! Implementations of the PlanCatalog port.
//!
//! ## Available Adapters
//!
//! - **InMemoryPlanCatalog** - Static table (built-in Bitrix24 plans, tests)
//! - **YamlPlanCatalog** - Catalog loaded from a YAML file at startup

mod in_memory;
mod yaml_file;

pub use in_memory::InMemoryPlanCatalog;
pub use yaml_file::YamlPlanCatalog;

use std::sync::Arc;

use crate::config::PricingConfig;
use crate::ports::{PlanCatalog, PlanCatalogError};

/// Builds the catalog described by the pricing configuration.
///
/// A configured catalog file must be priced in the configured currency.
/// Without a file, the built-in Bitrix24 table is used when its currency
/// matches; otherwise the catalog is empty and only flat annual license
/// costs are accepted.
pub fn catalog_from_config(
    pricing: &PricingConfig,
) -> Result<Arc<dyn PlanCatalog>, PlanCatalogError> {
    if let Some(path) = &pricing.catalog_path {
        let catalog = YamlPlanCatalog::load(path)?;
        if catalog.currency() != pricing.currency {
            return Err(PlanCatalogError::CurrencyMismatch {
                expected: pricing.currency.clone(),
                found: catalog.currency().to_string(),
            });
        }
        tracing::info!(
            path = %path.display(),
            plans = catalog.plans().len(),
            "Loaded plan catalog"
        );
        return Ok(Arc::new(catalog));
    }

    let builtin = InMemoryPlanCatalog::bitrix24();
    if builtin.currency() == pricing.currency {
        return Ok(Arc::new(builtin));
    }

    tracing::warn!(
        currency = %pricing.currency,
        builtin_currency = builtin.currency(),
        "No plan catalog for configured currency; plan pricing disabled"
    );
    Ok(Arc::new(InMemoryPlanCatalog::empty(pricing.currency.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn pricing(currency: &str, catalog_path: Option<std::path::PathBuf>) -> PricingConfig {
        PricingConfig {
            currency: currency.to_string(),
            catalog_path,
        }
    }

    #[test]
    fn builtin_catalog_used_when_currency_matches() {
        let catalog = catalog_from_config(&pricing("USD", None)).unwrap();
        assert_eq!(catalog.plans().len(), 4);
    }

    #[test]
    fn empty_catalog_when_builtin_currency_differs() {
        let catalog = catalog_from_config(&pricing("ARS", None)).unwrap();
        assert_eq!(catalog.currency(), "ARS");
        assert!(catalog.plans().is_empty());
    }

    #[test]
    fn catalog_file_with_matching_currency_loads() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "currency: ARS\nplans:\n  - name: Basic Plan\n    monthly_price: 45000").unwrap();

        let catalog = catalog_from_config(&pricing("ARS", Some(file.path().to_path_buf()))).unwrap();
        assert!(catalog.find("Basic Plan").is_some());
    }

    #[test]
    fn lowercase_catalog_currency_matches_configured_code() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "currency: ars\nplans:\n  - name: Basic Plan\n    monthly_price: 45000").unwrap();

        let catalog = catalog_from_config(&pricing("ARS", Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(catalog.currency(), "ARS");
        assert!(catalog.find("Basic Plan").is_some());
    }

    #[test]
    fn catalog_file_with_other_currency_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "currency: USD\nplans: []").unwrap();

        let result = catalog_from_config(&pricing("ARS", Some(file.path().to_path_buf())));
        assert!(matches!(
            result,
            Err(PlanCatalogError::CurrencyMismatch { .. })
        ));
    }
}
