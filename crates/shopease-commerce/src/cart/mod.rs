//! Shopping cart module.
//!
//! Contains the cart state, line items, and pricing.

mod cart;
mod pricing;

pub use cart::{AddOutcome, CartState, LineItem, UpdateOutcome, DEFAULT_STOCK_CEILING};
pub use pricing::{CartPricing, PricingRules};
