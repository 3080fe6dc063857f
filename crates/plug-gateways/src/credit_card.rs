//! # Credit Card Gateway
//!
//! In-memory stand-in for a card processor. Ids are prefixed `CC_`.

use crate::config::CreditCardConfig;
use plug_core::{
    refund_from_ledger, PaymentDetails, PaymentGateway, PlugResult, TransactionLedger,
};
use tracing::info;

pub const CREDIT_CARD_PREFIX: &str = "CC";

/// Credit card payment gateway
pub struct CreditCardPayment {
    config: CreditCardConfig,
    transactions: TransactionLedger,
}

impl CreditCardPayment {
    pub fn new(config: CreditCardConfig) -> Self {
        Self {
            config,
            transactions: TransactionLedger::new(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> PlugResult<Self> {
        Ok(Self::new(CreditCardConfig::from_env()?))
    }

    pub fn merchant_id(&self) -> &str {
        &self.config.merchant_id
    }

    pub fn transactions(&self) -> &TransactionLedger {
        &self.transactions
    }
}

impl PaymentGateway for CreditCardPayment {
    fn process_payment(&mut self, amount: f64, currency: &str) -> PaymentDetails {
        // Card authorization and capture would go here
        let details =
            self.transactions
                .record(CREDIT_CARD_PREFIX, "Credit Card payment", amount, currency);

        info!(
            transaction_id = %details.transaction_id,
            merchant_id = %self.config.merchant_id,
            "Processing Credit Card payment of {} {}", amount, currency
        );
        details
    }

    fn refund(&self, transaction_id: &str) -> bool {
        refund_from_ledger(&self.transactions, "Credit Card", transaction_id)
    }

    fn transaction(&self, transaction_id: &str) -> Option<&PaymentDetails> {
        self.transactions.get(transaction_id)
    }

    fn provider_name(&self) -> &'static str {
        "credit_card"
    }
}
