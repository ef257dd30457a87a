//! Durable key-value persistence for the ShopEase storefront.
//!
//! Provides a simple, ergonomic API for persisting data with automatic
//! JSON serialization, behind a backend trait so the storage mechanism
//! can be swapped without touching callers.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopease_storage::{FileBackend, Store};
//!
//! let store = Store::new(FileBackend::open("/var/lib/shopease")?);
//!
//! // Store a value
//! store.set("shopease-cart-storage", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<CartState> = store.get("shopease-cart-storage")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StorageError;
pub use file::FileBackend;
pub use kv::{KeyValueBackend, Store};
pub use memory::MemoryBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileBackend, KeyValueBackend, MemoryBackend, StorageError, Store};
}
