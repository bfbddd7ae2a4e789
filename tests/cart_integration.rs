//! Integration tests for cart persistence through the profile store.
//!
//! Exercises the write-through discipline and the load-time reconciliation
//! rules against a real profile directory.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use comptoir::config::ComptoirConfig;
use comptoir::notify::MemoryNotifier;
use comptoir::storage::{CartStore, ProfileStore, KEY_CART_COUNT, KEY_CART_ITEMS};
use comptoir::{CartService, CartState, ProductName};
use std::collections::BTreeMap;
use std::sync::Arc;

fn service_in(dir: &std::path::Path) -> CartService {
    CartService::new(
        ComptoirConfig::default(),
        Box::new(ProfileStore::new(dir)),
        Arc::new(MemoryNotifier::new()),
    )
}

#[test]
fn add_writes_through_after_every_mutation() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut service = service_in(dir.path());
    service.add("Thiakry").expect("add");

    // A fresh service sees the first add before the second happens.
    let mut other = service_in(dir.path());
    assert_eq!(other.load().expect("load"), 1);

    service.add("Ndambé").expect("add");
    let mut other = service_in(dir.path());
    assert_eq!(other.load().expect("load"), 2);
}

#[test]
fn reload_restores_items_in_insertion_order() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut service = service_in(dir.path());
    for name in ["Thiakry", "Ndambé", "Thiakry", "Bissap"] {
        service.add(name).expect("add");
    }

    let mut reloaded = service_in(dir.path());
    reloaded.load().expect("load");

    let names: Vec<&str> = reloaded
        .cart()
        .items()
        .iter()
        .map(ProductName::as_str)
        .collect();
    assert_eq!(names, vec!["Thiakry", "Ndambé", "Thiakry", "Bissap"]);
    assert_eq!(reloaded.cart().count(), reloaded.cart().items().len());
}

#[test]
fn missing_profile_loads_zero_value_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut service = service_in(dir.path());
    assert_eq!(service.load().expect("load"), 0);
    assert!(service.cart().is_empty());
}

#[test]
fn corrupt_items_blob_degrades_to_zero_value_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ProfileStore::new(dir.path());

    let mut map = BTreeMap::new();
    map.insert(KEY_CART_COUNT.to_string(), "4".to_string());
    map.insert(KEY_CART_ITEMS.to_string(), "][ garbage".to_string());
    std::fs::write(
        store.storage_path(),
        serde_json::to_string(&map).expect("serialize"),
    )
    .expect("write");

    let mut service = service_in(dir.path());
    assert_eq!(service.load().expect("load"), 0);
    assert!(service.cart().is_empty());
}

#[test]
fn items_without_count_key_mean_no_prior_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ProfileStore::new(dir.path());

    let mut map = BTreeMap::new();
    map.insert(KEY_CART_ITEMS.to_string(), r#"["Tea"]"#.to_string());
    std::fs::write(
        store.storage_path(),
        serde_json::to_string(&map).expect("serialize"),
    )
    .expect("write");

    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn persisted_layout_matches_fixed_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ProfileStore::new(dir.path());

    let cart = CartState::from_items(vec![
        ProductName::new("Thiakry").expect("name"),
        ProductName::new("Thiakry").expect("name"),
    ]);
    store.save(&cart).expect("save");

    let raw = std::fs::read_to_string(store.storage_path()).expect("read");
    let map: BTreeMap<String, String> = serde_json::from_str(&raw).expect("parse");

    assert_eq!(map.get("cartCount").map(String::as_str), Some("2"));
    assert_eq!(
        map.get("cartItems").map(String::as_str),
        Some(r#"["Thiakry","Thiakry"]"#)
    );
}
