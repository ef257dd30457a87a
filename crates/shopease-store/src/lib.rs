//! Persisted cart store for the ShopEase storefront.
//!
//! Owns the cart's line items, enforces per-item stock ceilings,
//! persists itself across sessions, and reports derived totals. Wire one
//! up at the application's composition root:
//!
//! ```rust,ignore
//! use shopease_storage::{FileBackend, Store};
//! use shopease_store::prelude::*;
//!
//! let store = Store::new(FileBackend::open("/var/lib/shopease")?);
//! let repository = KvCartRepository::new(store, CART_STORAGE_KEY);
//!
//! let mut cart = CartStore::new(StoreConfig::default(), Box::new(repository));
//! cart.add_observer(Box::new(LogObserver));
//! cart.init();
//!
//! cart.add_item(&product, 1)?;
//! println!("Total: {}", cart.grand_total()?.display());
//! ```

mod config;
mod events;
mod repository;
mod store;

pub use config::{StoreConfig, CART_STORAGE_KEY};
pub use events::{CartEvent, CartObserver, LogObserver};
pub use repository::{CartRepository, KvCartRepository};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartEvent, CartObserver, CartRepository, CartStore, KvCartRepository, LogObserver,
        StoreConfig, CART_STORAGE_KEY,
    };
    pub use shopease_commerce::prelude::*;
}
