//! The persisted cart store.

use crate::config::StoreConfig;
use crate::events::{CartEvent, CartObserver};
use crate::repository::CartRepository;
use shopease_commerce::cart::{AddOutcome, CartPricing, CartState, LineItem, UpdateOutcome};
use shopease_commerce::catalog::Product;
use shopease_commerce::error::CommerceError;
use shopease_commerce::ids::ProductId;
use shopease_commerce::money::Money;
use tracing::{debug, warn};

/// The storefront's cart: owns the line items, enforces per-item stock
/// ceilings, persists itself after every mutation, and reports derived
/// totals.
///
/// Construct one at the application's composition root and hand it to
/// the pages that need it:
///
/// ```rust,ignore
/// let mut cart = CartStore::new(StoreConfig::default(), Box::new(repository));
/// cart.add_observer(Box::new(LogObserver));
/// cart.init();
/// ```
pub struct CartStore {
    config: StoreConfig,
    repository: Box<dyn CartRepository>,
    observers: Vec<Box<dyn CartObserver>>,
    state: CartState,
}

impl CartStore {
    /// Create a store with an empty in-memory cart.
    ///
    /// Call [`init`](Self::init) to pick up previously persisted state.
    pub fn new(config: StoreConfig, repository: Box<dyn CartRepository>) -> Self {
        Self {
            config,
            repository,
            observers: Vec::new(),
            state: CartState::new(),
        }
    }

    /// Attach an observer for cart events.
    pub fn add_observer(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Load persisted state, replacing the in-memory cart.
    pub fn init(&mut self) {
        self.state = self.repository.load();
        debug!(
            key = %self.config.storage_key,
            items = self.state.unique_item_count(),
            "cart store initialized"
        );
    }

    /// Flush state one final time and detach observers.
    pub fn teardown(&mut self) {
        self.persist();
        self.observers.clear();
    }

    /// Add one unit of a product to the cart.
    ///
    /// New items start at quantity 1 regardless of `requested_qty`;
    /// repeated calls step the quantity up to the stock ceiling. On a
    /// stock rejection the cart is unchanged and observers are told why.
    pub fn add_item(
        &mut self,
        product: &Product,
        requested_qty: i64,
    ) -> Result<AddOutcome, CommerceError> {
        match self.state.add_item(product, requested_qty) {
            Ok(outcome) => {
                self.persist();
                let event = match outcome {
                    AddOutcome::Added => CartEvent::ItemAdded {
                        product_id: product.id.clone(),
                        name: product.name.clone(),
                    },
                    AddOutcome::Incremented => CartEvent::QuantityIncreased {
                        product_id: product.id.clone(),
                        name: product.name.clone(),
                        quantity: self
                            .state
                            .get_item(&product.id)
                            .map_or(0, |item| item.quantity),
                    },
                };
                self.notify(&event);
                Ok(outcome)
            }
            Err(err) => {
                let event = match &err {
                    CommerceError::OutOfStock { .. } => CartEvent::OutOfStock {
                        product_id: product.id.clone(),
                        name: product.name.clone(),
                    },
                    CommerceError::StockLimitExceeded { ceiling, .. } => {
                        CartEvent::StockLimitReached {
                            product_id: product.id.clone(),
                            ceiling: *ceiling,
                        }
                    }
                    _ => return Err(err),
                };
                self.notify(&event);
                Err(err)
            }
        }
    }

    /// Remove a line item.
    ///
    /// Persists and notifies whether or not the id was present; removing
    /// an absent item is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let removed = self.state.remove_item(product_id);
        self.persist();
        self.notify(&CartEvent::ItemRemoved {
            product_id: product_id.clone(),
        });
        removed
    }

    /// Set the quantity of a line item.
    ///
    /// Quantities below 1 remove the item; quantities above the stored
    /// stock ceiling are rejected with the cart unchanged.
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

        match self.state.update_quantity(product_id, quantity) {
            Ok(outcome) => {
                self.persist();
                if outcome == UpdateOutcome::Updated {
                    self.notify(&CartEvent::QuantityUpdated {
                        product_id: product_id.clone(),
                        quantity,
                    });
                }
                Ok(outcome)
            }
            Err(err) => {
                if let CommerceError::StockLimitExceeded { ceiling, .. } = &err {
                    self.notify(&CartEvent::StockLimitReached {
                        product_id: product_id.clone(),
                        ceiling: *ceiling,
                    });
                }
                Err(err)
            }
        }
    }

    /// Empty the cart. Called after a successful order placement.
    pub fn clear(&mut self) {
        self.state.clear();
        self.persist();
        self.notify(&CartEvent::Cleared);
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.state.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.state.item_count()
    }

    /// Full pricing breakdown, recomputed from the current items.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        self.state.pricing(&self.config.pricing)
    }

    /// Sum of `unit_price * quantity` over all items.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        Ok(self.pricing()?.subtotal)
    }

    /// Shipping estimate: free above the threshold, the flat fee below,
    /// zero for an empty subtotal.
    pub fn shipping_estimate(&self) -> Result<Money, CommerceError> {
        Ok(self.pricing()?.shipping_total)
    }

    /// Tax estimate on the subtotal.
    pub fn tax_estimate(&self) -> Result<Money, CommerceError> {
        Ok(self.pricing()?.tax_total)
    }

    /// Grand total (subtotal + shipping + tax).
    pub fn grand_total(&self) -> Result<Money, CommerceError> {
        Ok(self.pricing()?.grand_total)
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Write current state through the repository.
    ///
    /// Persistence is best-effort: failures are logged, not surfaced.
    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.state) {
            warn!(key = %self.config.storage_key, error = %e, "failed to persist cart");
        }
    }

    fn notify(&self, event: &CartEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}
