//! Cart persistence seam.

use shopease_commerce::cart::CartState;
use shopease_storage::{StorageError, Store};
use tracing::warn;

/// Durable storage for the cart.
///
/// One seam isolates the storage mechanism, so a file store, embedded
/// database, or browser storage bridge can stand in without the cart
/// store changing.
pub trait CartRepository: Send + Sync {
    /// Load the persisted cart.
    ///
    /// An absent or unreadable stored value yields an empty cart; a
    /// corrupt record is discarded, not surfaced.
    fn load(&self) -> CartState;

    /// Persist the cart.
    fn save(&self, state: &CartState) -> Result<(), StorageError>;
}

/// Repository over a typed key-value [`Store`].
pub struct KvCartRepository {
    store: Store,
    key: String,
}

impl KvCartRepository {
    /// Create a repository persisting under the given key.
    pub fn new(store: Store, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl CartRepository for KvCartRepository {
    fn load(&self) -> CartState {
        match self.store.get::<CartState>(&self.key) {
            Ok(Some(state)) => state,
            Ok(None) => CartState::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable cart state");
                CartState::new()
            }
        }
    }

    fn save(&self, state: &CartState) -> Result<(), StorageError> {
        self.store.set(&self.key, state)
    }
}
