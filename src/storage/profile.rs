//! File-backed profile store.
//!
//! Imitates browser local storage: one JSON object file of string keys to
//! string values in the profile data directory. The cart occupies the two
//! fixed keys; unrelated keys in the same file are preserved across saves.

use crate::models::CartState;
use crate::storage::traits::{CartStore, PersistedCart, KEY_CART_COUNT, KEY_CART_ITEMS};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the key-value store inside the profile directory.
const STORAGE_FILE: &str = "local_storage.json";

/// Maximum file size for the storage file (1MB).
/// Prevents memory exhaustion from maliciously large files.
const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// File-backed profile store.
pub struct ProfileStore {
    /// Profile directory holding the storage file.
    base_path: PathBuf,
}

impl ProfileStore {
    /// Creates a new profile store.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into();

        // Try to create directory, ignore errors for now
        let _ = fs::create_dir_all(&path);

        Self { base_path: path }
    }

    /// Creates a new profile store with checked directory creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_create(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).map_err(|e| Error::OperationFailed {
            operation: "create_profile_dir".to_string(),
            cause: e.to_string(),
        })?;

        Ok(Self { base_path })
    }

    /// Returns the profile directory.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the storage file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.base_path.join(STORAGE_FILE)
    }

    /// Reads the whole key-value map. A missing file yields an empty map.
    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();

        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let metadata = fs::metadata(&path).map_err(|e| Error::OperationFailed {
            operation: "read_storage_metadata".to_string(),
            cause: e.to_string(),
        })?;

        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::InvalidInput(format!(
                "storage file exceeds maximum size of {MAX_FILE_SIZE} bytes: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(&path).map_err(|e| Error::OperationFailed {
            operation: "read_storage_file".to_string(),
            cause: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| Error::OperationFailed {
            operation: "deserialize_storage_file".to_string(),
            cause: e.to_string(),
        })
    }

    /// Writes the whole key-value map back to disk.
    fn write_all(&self, map: &BTreeMap<String, String>) -> Result<()> {
        // Ensure directory exists before storing
        let _ = fs::create_dir_all(&self.base_path);

        let json = serde_json::to_string_pretty(map).map_err(|e| Error::OperationFailed {
            operation: "serialize_storage_file".to_string(),
            cause: e.to_string(),
        })?;

        fs::write(self.storage_path(), json).map_err(|e| Error::OperationFailed {
            operation: "write_storage_file".to_string(),
            cause: e.to_string(),
        })
    }
}

impl CartStore for ProfileStore {
    fn save(&self, cart: &CartState) -> Result<()> {
        // Preserve unrelated keys living in the same storage file.
        let mut map = self.read_all().unwrap_or_else(|e| {
            tracing::warn!("unreadable storage file, rewriting: {e}");
            BTreeMap::new()
        });

        let items_json =
            serde_json::to_string(cart.items()).map_err(|e| Error::OperationFailed {
                operation: "serialize_cart_items".to_string(),
                cause: e.to_string(),
            })?;

        map.insert(KEY_CART_COUNT.to_string(), cart.count().to_string());
        map.insert(KEY_CART_ITEMS.to_string(), items_json);

        self.write_all(&map)
    }

    fn load(&self) -> Result<Option<PersistedCart>> {
        let map = self.read_all()?;

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

    fn cart_of(names: &[&str]) -> CartState {
        CartState::from_items(
            names
                .iter()
                .map(|n| ProductName::new(*n).unwrap())
                .collect(),
        )
    }

    #[test]
    fn test_load_without_file_is_no_prior_cart() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        let cart = cart_of(&["Thiakry", "Ndambé", "Thiakry"]);
        store.save(&cart).unwrap();

        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.count, 3);
        assert_eq!(persisted.items, vec!["Thiakry", "Ndambé", "Thiakry"]);
    }

    #[test]
    fn test_persisted_layout_uses_fixed_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        store.save(&cart_of(&["Tea"])).unwrap();

        let raw = fs::read_to_string(store.storage_path()).unwrap();
        let map: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.get("cartCount").map(String::as_str), Some("1"));
        assert_eq!(map.get("cartItems").map(String::as_str), Some("[\"Tea\"]"));
    }

    #[test]
    fn test_save_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "dark".to_string());
        store.write_all(&map).unwrap();

        store.save(&cart_of(&["Tea"])).unwrap();

        let reread = store.read_all().unwrap();
        assert_eq!(reread.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_malformed_items_degrade_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        let mut map = BTreeMap::new();
        map.insert(KEY_CART_COUNT.to_string(), "2".to_string());
        map.insert(KEY_CART_ITEMS.to_string(), "{not json".to_string());
        store.write_all(&map).unwrap();

        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.count, 2);
        assert!(persisted.items.is_empty());
    }

    #[test]
    fn test_unparsable_count_is_no_prior_cart() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        let mut map = BTreeMap::new();
        map.insert(KEY_CART_COUNT.to_string(), "five".to_string());
        store.write_all(&map).unwrap();

        assert_eq!(store.load().unwrap(), None);
    }
}
