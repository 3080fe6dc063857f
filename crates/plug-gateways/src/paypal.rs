//! # PayPal Gateway
//!
//! In-memory stand-in for a PayPal integration. Ids are prefixed `PP_`.

use crate::config::PayPalConfig;
use plug_core::{
    refund_from_ledger, PaymentDetails, PaymentGateway, PlugResult, TransactionLedger,
};
use tracing::info;

pub const PAYPAL_PREFIX: &str = "PP";

/// PayPal payment gateway
pub struct PayPalPayment {
    config: PayPalConfig,
    transactions: TransactionLedger,
}

impl PayPalPayment {
    pub fn new(config: PayPalConfig) -> Self {
        Self {
            config,
            transactions: TransactionLedger::new(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> PlugResult<Self> {
        Ok(Self::new(PayPalConfig::from_env()?))
    }

    pub fn client_id(&self) -> &str {
        &self.config.client_id
    }

    pub fn transactions(&self) -> &TransactionLedger {
        &self.transactions
    }
}

impl PaymentGateway for PayPalPayment {
    fn process_payment(&mut self, amount: f64, currency: &str) -> PaymentDetails {
        // The PayPal API call would go here
        let details = self
            .transactions
            .record(PAYPAL_PREFIX, "PayPal payment", amount, currency);

        info!(
            transaction_id = %details.transaction_id,
            "Processing PayPal payment of {} {}", amount, currency
        );
        details
    }

    fn refund(&self, transaction_id: &str) -> bool {
        refund_from_ledger(&self.transactions, "PayPal", transaction_id)
    }

    fn transaction(&self, transaction_id: &str) -> Option<&PaymentDetails> {
        self.transactions.get(transaction_id)
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}
