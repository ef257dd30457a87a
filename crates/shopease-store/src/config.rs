//! Cart store configuration.

use shopease_commerce::cart::PricingRules;

/// Storage slot the cart persists under.
pub const CART_STORAGE_KEY: &str = "shopease-cart-storage";

/// Configuration for a cart store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Key the serialized cart is stored under.
    pub storage_key: String,
    /// Rules for derived pricing figures.
    pub pricing: PricingRules,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            pricing: PricingRules::default(),
        }
    }
}

impl StoreConfig {
    /// Create a configuration with the default storage slot and rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the pricing rules.
    pub fn with_pricing(mut self, pricing: PricingRules) -> Self {
        self.pricing = pricing;
        self
    }
}
