//! Commerce domain types and logic for the ShopEase storefront.
//!
//! This crate provides the storefront's domain layer:
//!
//! - **Catalog**: the product snapshot the cart consumes
//! - **Cart**: line items, stock-aware mutation, derived pricing
//! - **Money**: minor-unit monetary values
//!
//! # Example
//!
//! ```rust,ignore
//! use shopease_commerce::prelude::*;
//!
//! let widget = Product::new(
//!     "prod-1",
//!     "W1",
//!     "Widget",
//!     Money::from_decimal(10.0, Currency::INR),
//! )
//! .with_stock(5);
//!
//! let mut cart = CartState::new();
//! cart.add_item(&widget, 1)?;
//!
//! let pricing = cart.pricing(&PricingRules::default())?;
//! println!("Total: {}", pricing.grand_total.display());
//! ```

pub mod catalog;
pub mod cart;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Product, StockStatus};
    pub use crate::cart::{
        AddOutcome, CartPricing, CartState, LineItem, PricingRules, UpdateOutcome,
        DEFAULT_STOCK_CEILING,
    };
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
}
