//! Pricing configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Pricing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// ISO 4217 code all money inputs and results are expressed in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Optional YAML file with the license plan catalog
    pub catalog_path: Option<PathBuf>,
}

impl PricingConfig {
    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let is_iso_code =
            self.currency.len() == 3 && self.currency.chars().all(|c| c.is_ascii_uppercase());
        if !is_iso_code {
            return Err(ValidationError::InvalidCurrency(self.currency.clone()));
        }
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::MissingRequired("pricing.catalog_path"));
            }
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            catalog_path: None,
        }
    }
}

fn default_currency() -> String {
    "ARS".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_config_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.currency, "ARS");
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_currency() {
        for currency in ["ars", "PESO", "", "A1S"] {
            let config = PricingConfig {
                currency: currency.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {:?}", currency);
        }
    }

    #[test]
    fn test_validation_rejects_empty_catalog_path() {
        let config = PricingConfig {
            catalog_path: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pricing_config_deserialization() {
        let json = r#"{"currency": "USD", "catalog_path": "/etc/roi/plans.yaml"}"#;
        let config: PricingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/roi/plans.yaml"))
        );
    }
}
