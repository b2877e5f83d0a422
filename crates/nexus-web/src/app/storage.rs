use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failure reported by a storage backend write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage not available")]
    Unavailable,
    #[error("storage operation on '{key}' failed: {message}")]
    Operation { key: String, message: String },
    #[error("failed to serialize '{key}' to JSON: {message}")]
    Serialize { key: String, message: String },
}

/// Key-value persistence used for the session and UI preferences.
///
/// Reads never fail: a missing key and an unavailable store both yield `None`.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Get and deserialize a JSON value; unparsable values read as `None`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to parse JSON from storage");
                None
            }
        }
    }

    /// Serialize and store a JSON value under a single key.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.set(key, &json)
    }
}

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    Local,
    /// sessionStorage - cleared when tab/window closes
    Session,
    /// No-op mode - for when storage is disabled or unavailable
    None,
}

/// Browser storage over localStorage, sessionStorage, or no-op mode.
///
/// Without the `web` feature every operation behaves like `StorageType::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    pub fn local() -> Self {
        Self::new(StorageType::Local)
    }

    #[cfg(feature = "web")]
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = match self.storage_type {
            StorageType::Local => window.local_storage(),
            StorageType::Session => window.session_storage(),
            StorageType::None => return Err(StorageError::Unavailable),
        };
        // Access throws when storage is disabled by browser policy
        storage.ok().flatten().ok_or(StorageError::Unavailable)
    }
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        if self.storage_type == StorageType::None {
            return None;
        }

        #[cfg(feature = "web")]
        {
            match self.storage().ok()?.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = ?e, "failed to get item from storage");
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.storage_type == StorageType::None {
            return Ok(());
        }

        #[cfg(feature = "web")]
        {
            self.storage()?.set_item(key, value).map_err(|e| StorageError::Operation {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.storage_type == StorageType::None {
            return Ok(());
        }

        #[cfg(feature = "web")]
        {
            self.storage()?.remove_item(key).map_err(|e| StorageError::Operation {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-memory storage shared between clones.
///
/// Used by host builds and tests. An unavailable instance mimics a browser
/// with storage disabled: reads see nothing and writes fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            items: Rc::default(),
            unavailable: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
        other.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn unavailable_storage_reads_nothing_and_rejects_writes() {
        let storage = MemoryStorage::unavailable();
        assert_eq!(storage.set("k", "v"), Err(StorageError::Unavailable));
        assert_eq!(storage.get("k"), None);
        assert_eq!(storage.remove("k"), Err(StorageError::Unavailable));
    }

    #[test]
    fn json_helpers_round_trip_and_ignore_garbage() {
        let storage = MemoryStorage::new();
        storage.set_json("n", &vec![1, 2, 3]).unwrap();
        assert_eq!(storage.get_json::<Vec<i32>>("n"), Some(vec![1, 2, 3]));

        storage.set("bad", "{not json").unwrap();
        assert_eq!(storage.get_json::<Vec<i32>>("bad"), None);
    }

    #[test]
    fn no_op_browser_storage_is_inert() {
        let storage = BrowserStorage::new(StorageType::None);
        assert_eq!(storage.set("k", "v"), Ok(()));
        assert_eq!(storage.get("k"), None);
        assert_eq!(storage.remove("k"), Ok(()));
    }
}
