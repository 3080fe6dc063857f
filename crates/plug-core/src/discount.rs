//! # Discount Strategies
//!
//! Pure pricing strategies composed by `PaymentProcessor`.

use crate::error::{PlugError, PlugResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// A pricing rule applied to an amount before it is charged.
pub trait DiscountStrategy: Send + Sync {
    /// Return the discounted amount. Must be pure.
    fn apply_discount(&self, amount: f64) -> f64;

    /// Name for logging.
    fn name(&self) -> &'static str;
}

/// Charges the full amount
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

/// 10% off
#[derive(Debug, Clone, Copy, Default)]
pub struct VipDiscount;

/// 20% off
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalDiscount;

impl VipDiscount {
    pub const MULTIPLIER: f64 = 0.9;
}

impl SeasonalDiscount {
    pub const MULTIPLIER: f64 = 0.8;
}

impl DiscountStrategy for NoDiscount {
    fn apply_discount(&self, amount: f64) -> f64 {
        amount
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

impl DiscountStrategy for VipDiscount {
    fn apply_discount(&self, amount: f64) -> f64 {
        amount * Self::MULTIPLIER
    }

    fn name(&self) -> &'static str {
        "vip"
    }
}

impl DiscountStrategy for SeasonalDiscount {
    fn apply_discount(&self, amount: f64) -> f64 {
        amount * Self::MULTIPLIER
    }

    fn name(&self) -> &'static str {
        "seasonal"
    }
}

/// Discount selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    None,
    Vip,
    Seasonal,
}

impl DiscountKind {
    pub const ALL: [DiscountKind; 3] = [DiscountKind::None, DiscountKind::Vip, DiscountKind::Seasonal];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::None => "none",
            DiscountKind::Vip => "vip",
            DiscountKind::Seasonal => "seasonal",
        }
    }

    /// Build the strategy this kind names
    pub fn into_strategy(self) -> Box<dyn DiscountStrategy> {
        match self {
            DiscountKind::None => Box::new(NoDiscount),
            DiscountKind::Vip => Box::new(VipDiscount),
            DiscountKind::Seasonal => Box::new(SeasonalDiscount),
        }
    }
}

impl Default for DiscountKind {
    fn default() -> Self {
        DiscountKind::None
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountKind {
    type Err = PlugError;

    fn from_str(s: &str) -> PlugResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(DiscountKind::None),
            "vip" => Ok(DiscountKind::Vip),
            "seasonal" => Ok(DiscountKind::Seasonal),
            _ => Err(PlugError::unknown_strategy("discount", s)),
        }
    }
}

/// Charges amounts through a swappable discount strategy
pub struct PaymentProcessor {
    discount_strategy: Box<dyn DiscountStrategy>,
}

impl PaymentProcessor {
    pub fn new(discount_strategy: Box<dyn DiscountStrategy>) -> Self {
        Self { discount_strategy }
    }

    /// Replace the strategy used by later payments
    pub fn set_strategy(&mut self, discount_strategy: Box<dyn DiscountStrategy>) {
        self.discount_strategy = discount_strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.discount_strategy.name()
    }

    /// Apply the current discount and return the amount to charge
    pub fn process_payment(&self, amount: f64) -> f64 {
        let final_amount = self.discount_strategy.apply_discount(amount);
        info!(
            discount = self.discount_strategy.name(),
            "Processing payment of: ${:.2}", final_amount
        );
        final_amount
    }
}

impl From<DiscountKind> for PaymentProcessor {
    fn from(kind: DiscountKind) -> Self {
        Self::new(kind.into_strategy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fixed_multipliers() {
        for amount in [0.0, 1.0, 19.99, 100.0, 12_345.67] {
            assert_eq!(NoDiscount.apply_discount(amount), amount);
            assert!(approx_eq(VipDiscount.apply_discount(amount), 0.9 * amount));
            assert!(approx_eq(SeasonalDiscount.apply_discount(amount), 0.8 * amount));
        }
    }

    #[test]
    fn test_negative_amounts_are_only_scaled() {
        assert!(approx_eq(VipDiscount.apply_discount(-50.0), -45.0));
        assert_eq!(NoDiscount.apply_discount(-1.0), -1.0);
    }

    #[test]
    fn test_processor_uses_strategy() {
        let mut processor = PaymentProcessor::new(Box::new(NoDiscount));
        assert!(approx_eq(processor.process_payment(100.0), 100.0));

        processor.set_strategy(Box::new(SeasonalDiscount));
        assert_eq!(processor.strategy_name(), "seasonal");
        assert!(approx_eq(processor.process_payment(100.0), 80.0));
    }

    #[test]
    fn test_discount_kind_parsing() {
        assert_eq!("vip".parse::<DiscountKind>().unwrap(), DiscountKind::Vip);
        assert_eq!(" Seasonal ".parse::<DiscountKind>().unwrap(), DiscountKind::Seasonal);
        assert_eq!("NONE".parse::<DiscountKind>().unwrap(), DiscountKind::None);

        let err = "gold".parse::<DiscountKind>().unwrap_err();
        assert!(matches!(err, PlugError::UnknownStrategy { .. }));
    }

    #[test]
    fn test_discount_kind_builds_matching_strategy() {
        for kind in DiscountKind::ALL {
            let processor = PaymentProcessor::from(kind);
            assert_eq!(processor.strategy_name(), kind.as_str());
        }
        assert!(approx_eq(PaymentProcessor::from(DiscountKind::Vip).process_payment(100.0), 90.0));
    }
}
