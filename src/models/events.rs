//! Cart events broadcast on the event bus.

use super::ProductName;
use crate::current_timestamp;

/// Metadata attached to every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMeta {
    /// Component that published the event.
    pub source: String,
    /// Unix timestamp (seconds) at publish time.
    pub timestamp: u64,
}

impl EventMeta {
    /// Creates metadata stamped with the current time.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            timestamp: current_timestamp(),
        }
    }

    /// Creates metadata with an explicit timestamp (used in tests).
    #[must_use]
    pub fn with_timestamp(source: impl Into<String>, timestamp: u64) -> Self {
        Self {
            source: source.into(),
            timestamp,
        }
    }
}

/// Events emitted by the cart and contact services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added to the cart.
    ItemAdded {
        /// Event metadata.
        meta: EventMeta,
        /// The added product.
        product: ProductName,
        /// Cart size after the add.
        count: usize,
    },
    /// A persisted cart was loaded at session start.
    CartLoaded {
        /// Event metadata.
        meta: EventMeta,
        /// Number of items restored.
        count: usize,
    },
    /// A checkout attempt was blocked because the cart was empty.
    CheckoutBlocked {
        /// Event metadata.
        meta: EventMeta,
    },
    /// An order was validated and handed off to the deep link.
    OrderValidated {
        /// Event metadata.
        meta: EventMeta,
        /// Total number of articles in the order.
        articles: usize,
        /// Number of distinct products.
        distinct: usize,
    },
    /// A contact form submission was accepted.
    ContactSubmitted {
        /// Event metadata.
        meta: EventMeta,
    },
}

impl CartEvent {
    /// Returns the event type discriminant as a static string.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::ItemAdded { .. } => "item_added",
            Self::CartLoaded { .. } => "cart_loaded",
            Self::CheckoutBlocked { .. } => "checkout_blocked",
            Self::OrderValidated { .. } => "order_validated",
            Self::ContactSubmitted { .. } => "contact_submitted",
        }
    }

    /// Returns the event metadata.
    #[must_use]
    pub const fn meta(&self) -> &EventMeta {
        match self {
            Self::ItemAdded { meta, .. }
            | Self::CartLoaded { meta, .. }
            | Self::CheckoutBlocked { meta }
            | Self::OrderValidated { meta, .. }
            | Self::ContactSubmitted { meta } => meta,
        }
    }
}
