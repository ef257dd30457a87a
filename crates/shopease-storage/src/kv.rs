//! Key-value store wrapper with automatic serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// Raw byte-oriented key-value backend.
///
/// Implementations provide the durable substrate; [`Store`] layers typed
/// serialization on top of it.
pub trait KeyValueBackend: Send + Sync {
    /// Get the bytes stored under a key, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store bytes under a key, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether a key exists.
    fn exists(&self, key: &str) -> Result<bool, StorageError>;
}

/// Type-safe store over any [`KeyValueBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```rust,ignore
/// let store = Store::new(MemoryBackend::new());
/// store.set("cart:user123", &cart)?;
/// let cart: Option<Cart> = store.get("cart:user123")?;
/// ```
pub struct Store {
    backend: Box<dyn KeyValueBackend>,
}

impl Store {
    /// Create a store over the given backend.
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.backend.exists(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Record {
        name: String,
        count: i64,
    }

    #[test]
    fn test_typed_round_trip() {
        let store = Store::new(MemoryBackend::new());
        let record = Record {
            name: "widget".to_string(),
            count: 3,
        };

        store.set("record:1", &record).unwrap();
        let loaded: Option<Record> = store.get("record:1").unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[test]
    fn test_get_missing_key() {
        let store = Store::new(MemoryBackend::new());
        let loaded: Option<Record> = store.get("record:missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_malformed_value() {
        let backend = MemoryBackend::new();
        backend.set("record:bad", b"not json").unwrap();

        let store = Store::new(backend);
        let result: Result<Option<Record>, _> = store.get("record:bad");
        assert!(matches!(result, Err(StorageError::SerializeError(_))));
    }

    #[test]
    fn test_delete_and_exists() {
        let store = Store::new(MemoryBackend::new());
        store.set("record:1", &1_i64).unwrap();
        assert!(store.exists("record:1").unwrap());

        store.delete("record:1").unwrap();
        assert!(!store.exists("record:1").unwrap());
    }
}
