//! Cart events and observers.

use shopease_commerce::ids::ProductId;
use tracing::{debug, info, warn};

/// Something that happened in the cart.
///
/// Mutators report through these so presentation layers (toasts, badge
/// counters) can react without being woven into the business logic.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// A new line item was inserted.
    ItemAdded { product_id: ProductId, name: String },
    /// An existing line item's quantity grew by one.
    QuantityIncreased {
        product_id: ProductId,
        name: String,
        quantity: i64,
    },
    /// A line item's quantity was set directly.
    QuantityUpdated { product_id: ProductId, quantity: i64 },
    /// A removal was performed. Fired whether or not the id was present;
    /// the storefront surfaces both the same way.
    ItemRemoved { product_id: ProductId },
    /// The cart was emptied.
    Cleared,
    /// An add was rejected because the product is out of stock.
    OutOfStock { product_id: ProductId, name: String },
    /// A mutation was rejected because it would exceed the stock ceiling.
    StockLimitReached { product_id: ProductId, ceiling: i64 },
}

/// Observer for cart events.
///
/// Notifications are fire-and-forget: observers must not block, and they
/// never gate the operation that produced the event.
pub trait CartObserver: Send + Sync {
    /// Called after each completed or rejected cart operation.
    fn on_event(&self, event: &CartEvent);
}

/// Default observer that reports events through `tracing`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl CartObserver for LogObserver {
    fn on_event(&self, event: &CartEvent) {
        match event {
            CartEvent::ItemAdded { name, .. } => info!("Added {name} to cart"),
            CartEvent::QuantityIncreased { name, .. } => info!("Increased {name} quantity"),
            CartEvent::QuantityUpdated {
                product_id,
                quantity,
            } => debug!(%product_id, quantity, "quantity set"),
            CartEvent::ItemRemoved { .. } => info!("Item removed from cart"),
            CartEvent::Cleared => debug!("cart cleared"),
            CartEvent::OutOfStock { .. } => warn!("This product is out of stock"),
            CartEvent::StockLimitReached { ceiling, .. } => {
                warn!("Cannot add more. Only {ceiling} in stock!")
            }
        }
    }
}
