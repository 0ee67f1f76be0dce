use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Validate, resource::never_empty};

/// Marketplace-wide settings. There is exactly one of these on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub store_name: String,
    pub support_email: String,
    pub currency: String,
    /// Percentage the marketplace keeps from each vendor sale.
    pub commission_percent: i64,
    pub low_stock_threshold: i64,
    #[serde(default)]
    pub maintenance_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_name: String::new(),
            support_email: String::new(),
            currency: "USD".into(),
            commission_percent: 10,
            low_stock_threshold: 5,
            maintenance_mode: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.required("store_name", &self.store_name);
        errors.email("support_email", &self.support_email);
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            errors.add("currency", "Use a three-letter ISO currency code");
        }
        errors.range("commission_percent", self.commission_percent, 0, 100);
        if self.low_stock_threshold < 0 {
            errors.add("low_stock_threshold", "Threshold cannot be negative");
        }
        errors.into_result()
    }
}

never_empty!(Settings);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_and_commission() {
        let settings = Settings {
            store_name: "Bazaar".into(),
            support_email: "help@bazaar.test".into(),
            currency: "usd".into(),
            commission_percent: 120,
            ..Default::default()
        };
        let errors = settings.validate().unwrap_err();
        assert!(errors.get("currency").is_some());
        assert!(errors.get("commission_percent").is_some());
        assert!(errors.get("store_name").is_none());
    }
}
