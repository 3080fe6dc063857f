//! # Payment Gateway Trait
//!
//! Strategy trait for payment gateways plus the shared in-memory ledger.
//! Implementations: PayPal, credit card (see `plug-gateways`).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaymentGateway (trait)                     │
//! │  ├── process_payment()                                      │
//! │  ├── refund()                                               │
//! │  └── get_status()                                           │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!          ┌───────┴───────┐   ┌───────┴───────┐
//!          │ PayPalPayment │   │CreditCardPay- │
//!          │               │   │     ment      │
//!          └───────────────┘   └───────────────┘
//! ```

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Currency used when the caller does not pick one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Status reported for every transaction; there is no status machine behind it
pub const PROCESSING_STATUS: &str = "Processing";

/// Record of one processed payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// Amount charged (not validated)
    pub amount: f64,

    /// Three-letter currency code (not validated)
    pub currency: String,

    /// Human readable description, set by the gateway
    pub description: String,

    /// Gateway prefix followed by a second-resolution timestamp
    pub transaction_id: String,

    /// When the record was created
    pub timestamp: DateTime<Utc>,
}

/// In-memory transaction store owned by a single gateway
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    transactions: HashMap<String, PaymentDetails>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a record with a `{prefix}_{YYYYmmddHHMMSS}` id and store it.
    ///
    /// Two records minted within the same second share an id; the later one
    /// replaces the earlier.
    pub fn record(
        &mut self,
        prefix: &str,
        description: &str,
        amount: f64,
        currency: &str,
    ) -> PaymentDetails {
        let timestamp = Utc::now();
        let transaction_id = format!(
            "{}_{}",
            prefix,
            timestamp.with_timezone(&Local).format("%Y%m%d%H%M%S")
        );

        let details = PaymentDetails {
            amount,
            currency: currency.to_string(),
            description: description.to_string(),
            transaction_id: transaction_id.clone(),
            timestamp,
        };

        if self
            .transactions
            .insert(transaction_id.clone(), details.clone())
            .is_some()
        {
            debug!(%transaction_id, "Replaced record minted in the same second");
        }

        details
    }

    pub fn contains(&self, transaction_id: &str) -> bool {
        self.transactions.contains_key(transaction_id)
    }

    pub fn get(&self, transaction_id: &str) -> Option<&PaymentDetails> {
        self.transactions.get(transaction_id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Core trait for payment gateway implementations.
///
/// Gateways are in-memory stubs: processing always succeeds and refunds only
/// check that the transaction is known.
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` in `currency` and return the new record.
    fn process_payment(&mut self, amount: f64, currency: &str) -> PaymentDetails;

    /// Refund a transaction. Returns `true` iff the id is known to this gateway.
    ///
    /// Funds are not reversed and the refund is not recorded, so refunding the
    /// same id twice succeeds twice.
    fn refund(&self, transaction_id: &str) -> bool;

    /// Look up a stored record.
    fn transaction(&self, transaction_id: &str) -> Option<&PaymentDetails>;

    /// Get the provider name (for logging and selection).
    fn provider_name(&self) -> &'static str;

    /// Charge `amount` in [`DEFAULT_CURRENCY`].
    fn process_payment_default(&mut self, amount: f64) -> PaymentDetails {
        self.process_payment(amount, DEFAULT_CURRENCY)
    }

    /// Always [`PROCESSING_STATUS`], whatever the transaction.
    fn get_status(&self, _transaction_id: &str) -> &'static str {
        PROCESSING_STATUS
    }
}

/// Type alias for a boxed payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Box<dyn PaymentGateway>;

/// Shared refund path for ledger-backed gateways
pub fn refund_from_ledger(ledger: &TransactionLedger, label: &str, transaction_id: &str) -> bool {
    if ledger.contains(transaction_id) {
        info!("Refunding {} transaction {}", label, transaction_id);
        true
    } else {
        warn!("Refund requested for unknown {} transaction {}", label, transaction_id);
        false
    }
}

/// Gateway selector for multiple providers
pub struct PaymentGatewaySelector {
    gateways: HashMap<String, BoxedPaymentGateway>,
    default_provider: String,
}

impl PaymentGatewaySelector {
    /// Create a new selector with a default provider
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            gateways: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a gateway under its provider name, replacing any previous one
    pub fn register(&mut self, gateway: BoxedPaymentGateway) {
        let name = gateway.provider_name().to_string();
        self.gateways.insert(name, gateway);
    }

    /// Register with builder pattern
    pub fn with_gateway(mut self, gateway: BoxedPaymentGateway) -> Self {
        self.register(gateway);
        self
    }

    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }

    pub fn get(&self, provider: &str) -> Option<&dyn PaymentGateway> {
        self.gateways.get(provider).map(|g| &**g)
    }

    pub fn get_mut(&mut self, provider: &str) -> Option<&mut BoxedPaymentGateway> {
        self.gateways.get_mut(provider)
    }

    /// Get a gateway or fall back to the default provider
    pub fn get_or_default_mut(&mut self, provider: Option<&str>) -> Option<&mut BoxedPaymentGateway> {
        let key = match provider {
            Some(p) if self.gateways.contains_key(p) => p.to_string(),
            _ => self.default_provider.clone(),
        };
        self.gateways.get_mut(&key)
    }

    /// List all registered providers, sorted
    pub fn providers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gateways.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn has_provider(&self, provider: &str) -> bool {
        self.gateways.contains_key(provider)
    }
}
