//! # Gateway Configuration
//!
//! Credentials for the payment gateways.
//! Secrets are loaded from environment variables.

use plug_core::{PlugError, PlugResult};
use std::env;

fn required_var(name: &str) -> PlugResult<String> {
    env::var(name).map_err(|_| PlugError::Configuration(format!("{} not set", name)))
}

/// PayPal REST credentials
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    pub client_id: String,
    pub client_secret: String,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYPAL_CLIENT_ID`
    /// - `PAYPAL_CLIENT_SECRET`
    pub fn from_env() -> PlugResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            client_id: required_var("PAYPAL_CLIENT_ID")?,
            client_secret: required_var("PAYPAL_CLIENT_SECRET")?,
        })
    }

    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Card processor merchant credentials
#[derive(Debug, Clone)]
pub struct CreditCardConfig {
    pub merchant_id: String,
    pub api_key: String,
}

impl CreditCardConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `CARD_MERCHANT_ID`
    /// - `CARD_API_KEY`
    pub fn from_env() -> PlugResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            merchant_id: required_var("CARD_MERCHANT_ID")?,
            api_key: required_var("CARD_API_KEY")?,
        })
    }

    pub fn new(merchant_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            api_key: api_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = PayPalConfig::new("client_id", "client_secret");
        assert_eq!(config.client_id, "client_id");
        assert_eq!(config.client_secret, "client_secret");

        let config = CreditCardConfig::new("merchant_id", "api_key");
        assert_eq!(config.merchant_id, "merchant_id");
    }

    #[test]
    fn test_from_env_missing_key() {
        env::remove_var("CARD_MERCHANT_ID");

        let err = CreditCardConfig::from_env().unwrap_err();
        assert!(matches!(err, PlugError::Configuration(ref m) if m.contains("CARD_MERCHANT_ID")));
    }

    #[test]
    fn test_paypal_from_env() {
        env::set_var("PAYPAL_CLIENT_ID", "env_client");
        env::set_var("PAYPAL_CLIENT_SECRET", "env_secret");

        let config = PayPalConfig::from_env().unwrap();
        assert_eq!(config.client_id, "env_client");
        assert_eq!(config.client_secret, "env_secret");
    }
}
