//! In-memory store for tests.

use crate::models::CartState;
use crate::storage::traits::{CartStore, PersistedCart, KEY_CART_COUNT, KEY_CART_ITEMS};
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory key-value store using the same two-key layout as the profile
/// store. Intended for tests that need an injectable fake, including tests
/// that inject malformed raw values.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw key-value pair, bypassing cart serialization.
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.into(), value.into());
        }
    }

    /// Returns a raw value by key.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.map.lock().ok().and_then(|map| map.get(key).cloned())
    }
}

impl CartStore for MemoryStore {
    fn save(&self, cart: &CartState) -> Result<()> {
        let items_json =
            serde_json::to_string(cart.items()).map_err(|e| Error::OperationFailed {
                operation: "serialize_cart_items".to_string(),
                cause: e.to_string(),
            })?;

        let mut map = self.map.lock().map_err(|_| Error::OperationFailed {
            operation: "lock_memory_store".to_string(),
            cause: "poisoned lock".to_string(),
        })?;
        map.insert(KEY_CART_COUNT.to_string(), cart.count().to_string());
        map.insert(KEY_CART_ITEMS.to_string(), items_json);
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedCart>> {
        let map = self.map.lock().map_err(|_| Error::OperationFailed {
            operation: "lock_memory_store".to_string(),
            cause: "poisoned lock".to_string(),
        })?;

        let Some(count_raw) = map.get(KEY_CART_COUNT) else {
            return Ok(None);
        };

        let Ok(count) = count_raw.trim().parse::<u64>() else {
            tracing::warn!("unparsable {KEY_CART_COUNT} value {count_raw:?}, treating as no prior cart");
            return Ok(None);
        };

        let items = map.get(KEY_CART_ITEMS).map_or_else(Vec::new, |raw| {
            serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|e| {
                tracing::warn!("malformed {KEY_CART_ITEMS} value, degrading to empty: {e}");
                Vec::new()
            })
        });

        Ok(Some(PersistedCart { count, items }))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::ProductName;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let cart = CartState::from_items(vec![ProductName::new("Tea").unwrap()]);
        store.save(&cart).unwrap();

        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.count, 1);
        assert_eq!(persisted.items, vec!["Tea"]);
    }

    #[test]
    fn test_empty_store_is_no_prior_cart() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_injected_malformed_items() {
        let store = MemoryStore::new();
        store.set_raw(KEY_CART_COUNT, "3");
        store.set_raw(KEY_CART_ITEMS, "not an array");

        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.count, 3);
        assert!(persisted.items.is_empty());
    }
}
