//! Cart state and line item types.

use crate::cart::{CartPricing, PricingRules};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock ceiling applied when the catalog snapshot reports no quantity.
pub const DEFAULT_STOCK_CEILING: i64 = 5;

/// A line item in the cart: one row per distinct product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// SKU code, for display and reference.
    pub sku: String,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Stock ceiling copied from the catalog snapshot at add time.
    pub stock_ceiling: Option<i64>,
}

impl LineItem {
    /// Snapshot a catalog product into a line item with quantity 1.
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            stock_ceiling: product.stock_quantity,
        }
    }

    /// The effective stock ceiling for this line.
    pub fn ceiling(&self) -> i64 {
        self.stock_ceiling.unwrap_or(DEFAULT_STOCK_CEILING)
    }

    /// Total price for this line (`unit_price * quantity`).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// Outcome of adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was inserted.
    Added,
    /// An existing line item's quantity grew by one.
    Incremented,
}

/// Outcome of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The quantity was set.
    Updated,
    /// The item was removed because the requested quantity was below 1.
    Removed,
    /// No line item with that product id exists.
    NotInCart,
}

/// The cart's item collection.
///
/// Items are unique by product id; insertion order is preserved for
/// display. All mutation goes through the operations below, which keep
/// every quantity within `1..=ceiling`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartState {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product, inserting a new line item if needed.
    ///
    /// The stock ceiling comes from the incoming snapshot
    /// (`stock_quantity`, or [`DEFAULT_STOCK_CEILING`] when absent). The
    /// cart grows a single unit per call regardless of `requested_qty`;
    /// the parameter exists so quantity pickers can call this without a
    /// special case, and new items always start at quantity 1.
    ///
    /// Fails with [`CommerceError::OutOfStock`] when the product is not
    /// yet in the cart and its ceiling is zero, and with
    /// [`CommerceError::StockLimitExceeded`] when an existing line is
    /// already at its ceiling. Either way the cart is left unchanged.
    pub fn add_item(
        &mut self,
        product: &Product,
        _requested_qty: i64,
    ) -> Result<AddOutcome, CommerceError> {
        let ceiling = product.stock_quantity.unwrap_or(DEFAULT_STOCK_CEILING);

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            if existing.quantity >= ceiling {
                return Err(CommerceError::StockLimitExceeded {
                    product_id: product.id.to_string(),
                    ceiling,
                });
            }
            existing.quantity += 1;
            return Ok(AddOutcome::Incremented);
        }

        if ceiling <= 0 {
            return Err(CommerceError::OutOfStock {
                product_id: product.id.to_string(),
            });
        }

        self.items.push(LineItem::from_product(product));
        Ok(AddOutcome::Added)
    }

    /// Set the quantity of a line item.
    ///
    /// A quantity below 1 removes the item instead. The ceiling is
    /// resolved from the stored snapshot, or the default when the item is
    /// absent.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<UpdateOutcome, CommerceError> {
        if quantity < 1 {
            return Ok(if self.remove_item(product_id) {
                UpdateOutcome::Removed
            } else {
                UpdateOutcome::NotInCart
            });
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            let ceiling = item.ceiling();
            if quantity > ceiling {
                return Err(CommerceError::StockLimitExceeded {
                    product_id: product_id.to_string(),
                    ceiling,
                });
            }
            item.quantity = quantity;
            Ok(UpdateOutcome::Updated)
        } else {
            if quantity > DEFAULT_STOCK_CEILING {
                return Err(CommerceError::StockLimitExceeded {
                    product_id: product_id.to_string(),
                    ceiling: DEFAULT_STOCK_CEILING,
                });
            }
            Ok(UpdateOutcome::NotInCart)
        }
    }

    /// Remove a line item.
    ///
    /// Returns whether a row was removed; removing an absent id is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Calculate the pricing breakdown under the given rules.
    ///
    /// Pure over the current items; returns an error on arithmetic
    /// overflow or when a line item's currency disagrees with the rules.
    pub fn pricing(&self, rules: &PricingRules) -> Result<CartPricing, CommerceError> {
        let mut subtotal = Money::zero(rules.currency);
        for item in &self.items {
            if item.unit_price.currency != rules.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: rules.currency.code().to_string(),
                    got: item.unit_price.currency.code().to_string(),
                });
            }
            let line_total = item.line_total()?;
            subtotal = subtotal
                .try_add(&line_total)
                .ok_or(CommerceError::Overflow)?;
        }

        let shipping_total = if subtotal.is_zero()
            || subtotal.amount_cents > rules.free_shipping_threshold.amount_cents
        {
            Money::zero(rules.currency)
        } else {
            rules.flat_shipping_fee
        };

        let tax_total = subtotal.multiply_decimal(rules.tax_rate);

        let grand_total = subtotal
            .try_add(&shipping_total)
            .and_then(|t| t.try_add(&tax_total))
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            shipping_total,
            tax_total,
            grand_total,
        })
    }
}
