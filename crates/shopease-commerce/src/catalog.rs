//! Catalog product snapshot consumed by the cart.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock availability derived from a catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Available for purchase.
    InStock,
    /// Known to have zero stock.
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// A catalog product as the cart consumes it.
///
/// This is a snapshot of catalog data at the time it is handed to the
/// cart; it is not refreshed live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit, for display and reference.
    pub sku: String,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units the catalog reports in stock. `None` means the catalog did
    /// not report stock, not unlimited supply.
    pub stock_quantity: Option<i64>,
}

impl Product {
    /// Create a product snapshot with no reported stock quantity.
    pub fn new(
        id: impl Into<ProductId>,
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            price,
            stock_quantity: None,
        }
    }

    /// Set the reported stock quantity.
    pub fn with_stock(mut self, quantity: i64) -> Self {
        self.stock_quantity = Some(quantity);
        self
    }

    /// Availability as shown on product listings.
    ///
    /// Unreported stock counts as available; the cart's default ceiling
    /// is what actually bounds it.
    pub fn stock_status(&self) -> StockStatus {
        match self.stock_quantity {
            Some(quantity) if quantity <= 0 => StockStatus::OutOfStock,
            _ => StockStatus::InStock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_stock_status() {
        let product = Product::new("prod-1", "W1", "Widget", Money::new(1000, Currency::INR));
        assert_eq!(product.stock_status(), StockStatus::InStock);

        let product = product.with_stock(3);
        assert_eq!(product.stock_status(), StockStatus::InStock);
    }

    #[test]
    fn test_out_of_stock() {
        let product = Product::new("prod-1", "W1", "Widget", Money::new(1000, Currency::INR))
            .with_stock(0);
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
        assert_eq!(product.stock_status().as_str(), "Out of Stock");
    }
}
