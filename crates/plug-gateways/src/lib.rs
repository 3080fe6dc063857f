//! # plug-gateways
//!
//! Payment gateways for the `PaymentGateway` trait.
//!
//! 1. **PayPalPayment** - `PP_` transaction ids
//! 2. **CreditCardPayment** - `CC_` transaction ids
//!
//! Both keep their records in a private in-memory ledger. The provider API
//! calls are stubbed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plug_gateways::PayPalPayment;
//! use plug_core::PaymentGateway;
//!
//! let mut paypal = PayPalPayment::from_env()?;
//! let payment = paypal.process_payment(100.00, "USD");
//! assert!(paypal.refund(&payment.transaction_id));
//! ```

pub mod config;
pub mod credit_card;
pub mod paypal;

// Re-exports
pub use config::{CreditCardConfig, PayPalConfig};
pub use credit_card::{CreditCardPayment, CREDIT_CARD_PREFIX};
pub use paypal::{PayPalPayment, PAYPAL_PREFIX};
