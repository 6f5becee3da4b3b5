//! Key-value persistence seam over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and route guard only see `KeyValueStore`, so the same
//! code runs against `window.localStorage` in the browser and against an
//! in-memory map in native tests.
//!
//! TRADE-OFFS
//! ==========
//! Outside the `hydrate` build `LocalStorage` is an always-empty store that
//! drops writes. Server rendering therefore always sees a signed-out user.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::ClientError;

/// Plain string key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable.
    fn remove_item(&self, key: &str) -> Result<(), ClientError>;
}

/// The browser's `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage().ok_or(ClientError::StorageUnavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| ClientError::Storage { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage().ok_or(ClientError::StorageUnavailable)?;
            storage
                .remove_item(key)
                .map_err(|_| ClientError::Storage { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-memory store, used by tests and anywhere a throwaway backend is needed.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
