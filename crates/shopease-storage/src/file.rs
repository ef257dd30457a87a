//! File-backed backend, one file per key.

use crate::{KeyValueBackend, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Backend that stores each key as a file under a root directory.
///
/// Writes are staged to a sidecar file and renamed into place, so a torn
/// write leaves the previous value intact rather than a half-written one.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError::OpenError(e.to_string()))?;
        Ok(Self { root })
    }

    /// Map a key to its file path. Characters unsafe for a file name are
    /// replaced with `_`.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(name)
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::StoreError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let mut staged = path.clone().into_os_string();
        staged.push(".tmp");
        let staged = PathBuf::from(staged);

        fs::write(&staged, value).map_err(|e| StorageError::StoreError(e.to_string()))?;
        fs::rename(&staged, &path).map_err(|e| StorageError::StoreError(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::StoreError(e.to_string())),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.path_for(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("cart-storage", b"payload").unwrap();
        assert_eq!(backend.get("cart-storage").unwrap(), Some(b"payload".to_vec()));
    }

    #[test]
    fn test_get_missing() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.get("missing").unwrap(), None);
    }

    #[test]
    fn test_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("k", b"one").unwrap();
        backend.set("k", b"two").unwrap();
        assert_eq!(backend.get("k").unwrap(), Some(b"two".to_vec()));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("k", b"value").unwrap();
        backend.delete("k").unwrap();
        backend.delete("k").unwrap();
        assert!(!backend.exists("k").unwrap());
    }

    #[test]
    fn test_key_sanitization() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("cart:user/123", b"payload").unwrap();
        assert_eq!(backend.get("cart:user/123").unwrap(), Some(b"payload".to_vec()));
        assert!(dir.path().join("cart_user_123").exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let backend = FileBackend::open(dir.path()).unwrap();
            backend.set("k", b"durable").unwrap();
        }
        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.get("k").unwrap(), Some(b"durable".to_vec()));
    }
}
