//! # Demo Scenario
//!
//! What the demo binary processes, loaded from `config/scenario.toml`.

use anyhow::Context;
use plug_core::{DiscountKind, DEFAULT_CURRENCY};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One payment to push through a gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Provider name (`paypal`, `credit_card`)
    pub gateway: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Amount run through each listed discount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountScenario {
    pub amount: f64,
    #[serde(default = "all_discounts")]
    pub strategies: Vec<DiscountKind>,
}

fn all_discounts() -> Vec<DiscountKind> {
    DiscountKind::ALL.to_vec()
}

impl Default for DiscountScenario {
    fn default() -> Self {
        Self {
            amount: 100.0,
            strategies: all_discounts(),
        }
    }
}

/// Alert sent through email, then SMS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertScenario {
    pub message: String,
    pub email_to: String,
    pub sms_to: String,
}

impl Default for AlertScenario {
    fn default() -> Self {
        Self {
            message: "Important alert!".to_string(),
            email_to: "ops@example.com".to_string(),
            sms_to: "+16465386464".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub payments: Vec<PaymentRequest>,
    #[serde(default)]
    pub discount: DiscountScenario,
    #[serde(default)]
    pub alert: AlertScenario,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            payments: vec![
                PaymentRequest {
                    gateway: "paypal".to_string(),
                    amount: 100.00,
                    currency: "USD".to_string(),
                },
                PaymentRequest {
                    gateway: "credit_card".to_string(),
                    amount: 50.00,
                    currency: "EUR".to_string(),
                },
            ],
            discount: DiscountScenario::default(),
            alert: AlertScenario::default(),
        }
    }
}

impl Scenario {
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Load the scenario from `explicit`, or the first config file found, or the built-in default
pub fn load_scenario(explicit: Option<&Path>) -> anyhow::Result<Scenario> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        let scenario = Scenario::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded scenario from {}", path.display());
        return Ok(scenario);
    }

    let config_paths = [
        "config/scenario.toml",
        "../config/scenario.toml",
        "../../config/scenario.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let scenario = Scenario::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded scenario from {}", path);
            return Ok(scenario);
        }
    }

    tracing::warn!("No scenario file found, using built-in scenario");
    Ok(Scenario::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_toml(
            r#"
            [[payments]]
            gateway = "paypal"
            amount = 100.0

            [[payments]]
            gateway = "credit_card"
            amount = 50.0
            currency = "EUR"

            [discount]
            amount = 250.0
            strategies = ["vip", "seasonal"]

            [alert]
            message = "Disk almost full"
            email_to = "ops@example.com"
            sms_to = "+15550000000"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.payments.len(), 2);
        assert_eq!(scenario.payments[0].currency, "USD");
        assert_eq!(scenario.payments[1].currency, "EUR");
        assert_eq!(scenario.discount.amount, 250.0);
        assert_eq!(
            scenario.discount.strategies,
            vec![DiscountKind::Vip, DiscountKind::Seasonal]
        );
        assert_eq!(scenario.alert.message, "Disk almost full");
    }

    #[test]
    fn test_empty_scenario_uses_defaults() {
        let scenario = Scenario::from_toml("").unwrap();

        assert!(scenario.payments.is_empty());
        assert_eq!(scenario.discount, DiscountScenario::default());
        assert_eq!(scenario.alert, AlertScenario::default());
    }

    #[test]
    fn test_unknown_discount_is_rejected() {
        let result = Scenario::from_toml(
            r#"
            [discount]
            amount = 1.0
            strategies = ["gold"]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = load_scenario(Some(Path::new("/nonexistent/scenario.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_shipped_scenario_parses() {
        let content = include_str!("../../../config/scenario.toml");
        let scenario = Scenario::from_toml(content).unwrap();
        assert_eq!(scenario, Scenario::default());
    }
}
