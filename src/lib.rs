//! # Comptoir
//!
//! A storefront cart and order relay engine.
//!
//! Comptoir keeps a client-side shopping cart in a local profile store,
//! aggregates it into a human-readable order summary, and hands the order off
//! to an external messaging application through a constructed deep link. There
//! is no server and no payment flow: the cart lives in the local profile, and
//! the only outbound interface is the deep link itself.
//!
//! ## Features
//!
//! - Write-through cart persistence in a browser-profile-style key-value store
//! - Order summary aggregation preserving first-seen product order
//! - WhatsApp deep-link construction with percent-encoded order messages
//! - Transient notifications with a timed visible/fade/remove lifecycle
//! - Pluggable store and notifier ports for testing with in-memory fakes
//!
//! ## Example
//!
//! ```rust,ignore
//! use comptoir::{CartService, CheckoutOutcome};
//!
//! let mut service = CartService::new(config, store, notifier);
//! service.load()?;
//! service.add("Thiakry")?;
//! match service.checkout()? {
//!     CheckoutOutcome::Validated(handoff) => println!("{}", handoff.link.as_str()),
//!     CheckoutOutcome::EmptyCart => {}
//! }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod handoff;
pub mod models;
pub mod notify;
pub mod observability;
pub mod rendering;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use config::{ComptoirConfig, StoreInfo};
pub use handoff::{LinkOpener, WhatsAppLink};
pub use models::{
    CartEvent, CartState, ContactSubmission, Notification, NotificationKind, NotificationPhase,
    OrderSummary, ProductName,
};
pub use notify::{NotificationCenter, Notifier};
pub use services::{CartService, CheckoutOutcome, ContactService, OrderHandoff, Storefront};
pub use storage::{CartStore, MemoryStore, PersistedCart, ProfileStore};

/// Error type for comptoir operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty product names, malformed config values |
/// | `OperationFailed` | Store I/O errors, serialization failures, link handoff failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A product name is empty or whitespace-only
    /// - A configuration file fails to parse
    /// - A recipient identifier is empty
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Profile store reads or writes fail
    /// - Persisted state fails to serialize
    /// - The deep link cannot be handed to the system browser
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for comptoir operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the current Unix timestamp in seconds.
///
/// Centralized so event metadata and notifications stamp time the same way.
/// Uses `SystemTime::now()` with fallback to 0 if the system clock is before
/// the Unix epoch.
///
/// # Examples
///
/// ```rust
/// use comptoir::current_timestamp;
///
/// let ts = current_timestamp();
/// assert!(ts > 0);
/// ```
#[must_use]
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
