//! Cart store port.

use crate::models::CartState;
use crate::Result;

/// Fixed key under which the item count is persisted, as a decimal string.
pub const KEY_CART_COUNT: &str = "cartCount";

/// Fixed key under which the item list is persisted, as a JSON-array string.
pub const KEY_CART_ITEMS: &str = "cartItems";

/// Raw persisted form of the cart, exactly as read from the key-value store.
///
/// The count and the item list come from two independent keys, so they can
/// disagree after corruption; reconciliation is the cart service's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedCart {
    /// Value of the count key.
    pub count: u64,
    /// Decoded item list. Empty when the items key is absent or malformed.
    pub items: Vec<String>,
}

/// Trait for cart persistence backends.
///
/// Backends are written through after every cart mutation and read once at
/// session start. A `load` returning `None` means "no prior cart": the count
/// key was absent or unreadable.
pub trait CartStore: Send + Sync {
    /// Persists the cart under the two fixed keys.
    fn save(&self, cart: &CartState) -> Result<()>;

    /// Reads the persisted cart, or `None` when no prior cart exists.
    fn load(&self) -> Result<Option<PersistedCart>>;
}
