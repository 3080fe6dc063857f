//! # plug-notify
//!
//! Notification channels for the `NotificationChannel` trait.
//!
//! 1. **EmailNotification** - SMTP relay with STARTTLS and login
//! 2. **SmsNotification** - Twilio-compatible REST API
//!
//! Neither channel retries. A failed send is logged and reported as `false`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plug_core::NotificationService;
//! use plug_notify::{EmailNotification, SmsNotification};
//!
//! let mut service = NotificationService::new(Box::new(EmailNotification::from_env()?));
//! service.send_alert("Important alert!", "ops@example.com").await;
//!
//! service.change_notification_method(Box::new(SmsNotification::from_env()?));
//! service.send_alert("Important alert!", "+16465386464").await;
//! ```

pub mod config;
pub mod email;
pub mod sms;

// Re-exports
pub use config::{SmsConfig, SmtpConfig};
pub use email::{EmailNotification, EMAIL_SUBJECT};
pub use sms::SmsNotification;
