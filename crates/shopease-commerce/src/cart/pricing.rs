//! Cart pricing rules and breakdown.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Rules for deriving monetary figures from the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Currency every figure is computed in.
    pub currency: Currency,
    /// Subtotals strictly above this threshold ship free.
    pub free_shipping_threshold: Money,
    /// Flat shipping fee charged at or below the threshold.
    pub flat_shipping_fee: Money,
    /// Tax rate as a fraction (0.18 = 18% GST).
    pub tax_rate: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl PricingRules {
    /// Create the storefront's default rules in the given currency:
    /// free shipping above 5000.00, a flat 500.00 fee below, 18% tax.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            free_shipping_threshold: Money::from_decimal(5000.0, currency),
            flat_shipping_fee: Money::from_decimal(500.0, currency),
            tax_rate: 0.18,
        }
    }

    /// Set the free-shipping threshold.
    pub fn with_free_shipping_threshold(mut self, threshold: Money) -> Self {
        self.free_shipping_threshold = threshold;
        self
    }

    /// Set the flat shipping fee.
    pub fn with_flat_shipping_fee(mut self, fee: Money) -> Self {
        self.flat_shipping_fee = fee;
        self
    }

    /// Set the tax rate as a fraction.
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }
}

/// Complete pricing breakdown for a cart.
///
/// Recomputed from the current items on demand, never cached, so it is
/// always consistent with the latest mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of `unit_price * quantity` over all items.
    pub subtotal: Money,
    /// Shipping cost: zero for an empty subtotal or one above the
    /// free-shipping threshold, otherwise the flat fee.
    pub shipping_total: Money,
    /// Tax on the subtotal, rounded half-up to the minor unit.
    pub tax_total: Money,
    /// Final total (subtotal + shipping + tax).
    pub grand_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = PricingRules::default();
        assert_eq!(rules.currency, Currency::INR);
        assert_eq!(rules.free_shipping_threshold.amount_cents, 500_000);
        assert_eq!(rules.flat_shipping_fee.amount_cents, 50_000);
        assert!((rules.tax_rate - 0.18).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder() {
        let rules = PricingRules::new(Currency::USD)
            .with_free_shipping_threshold(Money::from_decimal(100.0, Currency::USD))
            .with_flat_shipping_fee(Money::from_decimal(9.99, Currency::USD))
            .with_tax_rate(0.07);

        assert_eq!(rules.free_shipping_threshold.amount_cents, 10_000);
        assert_eq!(rules.flat_shipping_fee.amount_cents, 999);
        assert!((rules.tax_rate - 0.07).abs() < f64::EPSILON);
    }
}
