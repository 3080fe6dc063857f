//! # plug-core
//!
//! Core traits and services for pluggable strategies.
//!
//! This crate provides:
//! - `PaymentGateway` trait, `TransactionLedger` and `PaymentGatewaySelector`
//! - `DiscountStrategy` implementations and `PaymentProcessor`
//! - `NotificationChannel` trait and `NotificationService`
//! - Shipping capability traits (`Trackable`, `Deliverable`, `Routable`)
//! - `Vehicle` trait and `TransportService`
//! - `PlugError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use plug_core::{DiscountKind, NotificationService, PaymentProcessor};
//!
//! // Pick a discount from configuration
//! let processor = PaymentProcessor::from("vip".parse::<DiscountKind>()?);
//! let total = processor.process_payment(100.0); // 90.0
//!
//! // Swap notification channels at runtime
//! let mut service = NotificationService::new(Box::new(email));
//! service.send_alert("Disk almost full", "ops@example.com").await;
//! service.change_notification_method(Box::new(sms));
//! ```

pub mod discount;
pub mod error;
pub mod notification;
pub mod payment;
pub mod shipping;
pub mod vehicle;

// Re-exports for convenience
pub use discount::{
    DiscountKind, DiscountStrategy, NoDiscount, PaymentProcessor, SeasonalDiscount, VipDiscount,
};
pub use error::{PlugError, PlugResult};
pub use notification::{BoxedNotificationChannel, NotificationChannel, NotificationService};
pub use payment::{
    refund_from_ledger, BoxedPaymentGateway, PaymentDetails, PaymentGateway,
    PaymentGatewaySelector, TransactionLedger, DEFAULT_CURRENCY, PROCESSING_STATUS,
};
pub use shipping::{
    track_all, CustomerSupport, Deliverable, DeliveryGuy, Routable, RoutesSupervisor, Trackable,
};
pub use vehicle::{Bicycle, Car, TransportService, Vehicle};
