//! # plug-demo
//!
//! Runs every strategy family end to end from a TOML scenario.
//!
//! | Demo | What it shows |
//! |------|---------------|
//! | payments | gateway selection, in-memory records, refunds |
//! | discounts | swapping `DiscountStrategy` inside one `PaymentProcessor` |
//! | shipping | roles composing only the capabilities they have |
//! | vehicles | `TransportService` depending on `Vehicle` only |
//! | notifications | `NotificationService` switching email → SMS |

pub mod config;
pub mod demos;
pub mod scenario;

pub use config::{DemoConfig, LogFormat};
pub use scenario::{load_scenario, Scenario};
