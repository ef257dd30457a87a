//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// Stock failures are recoverable by design: the operation is aborted,
/// the cart is left untouched, and the caller decides how to surface the
/// failure to the user.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product is known to be out of stock and not already in the cart.
    #[error("Product {product_id} is out of stock")]
    OutOfStock { product_id: String },

    /// Requested quantity is above the item's stock ceiling.
    #[error("Quantity for {product_id} is limited to {ceiling} in stock")]
    StockLimitExceeded { product_id: String, ceiling: i64 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
