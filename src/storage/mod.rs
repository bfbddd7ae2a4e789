//! Storage layer for the persisted cart.
//!
//! The cart is persisted write-through into a browser-profile-style key-value
//! store behind the [`CartStore`] port. The production backend is a JSON file
//! in the profile data directory; an in-memory backend serves as a test fake.

mod memory;
mod profile;
mod traits;

pub use memory::MemoryStore;
pub use profile::ProfileStore;
pub use traits::{CartStore, PersistedCart, KEY_CART_COUNT, KEY_CART_ITEMS};
