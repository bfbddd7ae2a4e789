//! Cart service.
//!
//! Owns the in-memory cart and the injected store and notifier ports.
//! Every mutation is written through to the store in mutation order.

use crate::config::ComptoirConfig;
use crate::handoff::WhatsAppLink;
use crate::models::{
    CartEvent, CartState, EventMeta, Notification, OrderSummary, ProductName,
};
use crate::notify::Notifier;
use crate::observability::global_event_bus;
use crate::rendering::render_order_message;
use crate::storage::CartStore;
use crate::Result;
use std::sync::Arc;

/// Event source label for cart events.
const EVENT_SOURCE: &str = "cart_service";

/// Everything derived from a validated checkout.
#[derive(Debug, Clone)]
pub struct OrderHandoff {
    /// Quantity-aggregated order summary.
    pub summary: OrderSummary,
    /// Rendered order message, exactly as carried by the deep link.
    pub message: String,
    /// Constructed deep link.
    pub link: WhatsAppLink,
}

/// Outcome of a checkout attempt.
#[derive(Debug, Clone)]
pub enum CheckoutOutcome {
    /// The cart was empty; the empty-cart notice was raised and the order
    /// summary formatter was not invoked.
    EmptyCart,
    /// The order was validated and is ready for handoff.
    Validated(OrderHandoff),
}

/// Service owning the cart state.
pub struct CartService {
    /// Configuration.
    config: ComptoirConfig,
    /// The cart.
    cart: CartState,
    /// Persistence port, written through after every mutation.
    store: Box<dyn CartStore>,
    /// Notification port.
    notifier: Arc<dyn Notifier>,
}

impl CartService {
    /// Creates a cart service with an empty cart.
    #[must_use]
    pub fn new(config: ComptoirConfig, store: Box<dyn CartStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            cart: CartState::new(),
            store,
            notifier,
        }
    }

    /// Returns the current cart.
    #[must_use]
    pub const fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Loads the persisted cart, replacing the in-memory state.
    ///
    /// Absent or unreadable prior state degrades to the zero-value cart.
    /// A persisted count disagreeing with the item list is reconciled in
    /// favor of the item list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read itself fails.
    pub fn load(&mut self) -> Result<usize> {
        let Some(persisted) = self.store.load()? else {
            tracing::debug!("no prior cart");
            return Ok(0);
        };

        let mut items = Vec::with_capacity(persisted.items.len());
        for raw in persisted.items {
            match ProductName::new(raw) {
                Ok(name) => items.push(name),
                Err(e) => tracing::warn!("dropping invalid persisted item: {e}"),
            }
        }

        let stored_count = persisted.count;
        let actual = u64::try_from(items.len()).unwrap_or(u64::MAX);
        if stored_count != actual {
            tracing::warn!(
                stored_count,
                actual,
                "persisted count disagrees with item list, item list wins"
            );
        }

        self.cart = CartState::from_items(items);
        let count = self.cart.count();
        metrics::counter!("cart_loads_total").increment(1);
        tracing::info!(count, "cart loaded");

        global_event_bus().publish(CartEvent::CartLoaded {
            meta: EventMeta::new(EVENT_SOURCE),
            count,
        });

        Ok(count)
    }

    /// Adds a product to the cart.
    ///
    /// Writes the cart through to the store, raises the item-added
    /// notification, and publishes `ItemAdded`. A failed store write is
    /// reported and non-fatal.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the product name is empty.
    pub fn add(&mut self, name: &str) -> Result<usize> {
        let product = ProductName::new(name)?;

        self.cart.add(product.clone());
        let count = self.cart.count();

        if let Err(e) = self.store.save(&self.cart) {
            tracing::warn!("cart write-through failed: {e}");
        }

        self.notifier.notify(Notification::item_added(&product));
        metrics::counter!("cart_adds_total").increment(1);
        tracing::debug!(product = %product, count, "item added");

        global_event_bus().publish(CartEvent::ItemAdded {
            meta: EventMeta::new(EVENT_SOURCE),
            product,
            count,
        });

        Ok(count)
    }

    /// Attempts to validate the order.
    ///
    /// An empty cart produces the empty-cart notice without invoking the
    /// order summary formatter. Otherwise the summary, the rendered message,
    /// and the deep link are derived from the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the deep link cannot be constructed (empty
    /// recipient identifier).
    pub fn checkout(&self) -> Result<CheckoutOutcome> {
        if self.cart.is_empty() {
            self.notifier.notify(Notification::empty_cart());
            metrics::counter!("checkouts_blocked_total").increment(1);
            tracing::info!("checkout blocked: cart is empty");

            global_event_bus().publish(CartEvent::CheckoutBlocked {
                meta: EventMeta::new(EVENT_SOURCE),
            });

            return Ok(CheckoutOutcome::EmptyCart);
        }

        let summary = OrderSummary::from_items(self.cart.items());
        let message = render_order_message(&summary, &self.config.store.name);
        let link = WhatsAppLink::new(&self.config.store.whatsapp_recipient, &message)?;

        metrics::counter!("checkouts_validated_total").increment(1);
        tracing::info!(
            articles = summary.total(),
            distinct = summary.distinct(),
            "order validated"
        );

        global_event_bus().publish(CartEvent::OrderValidated {
            meta: EventMeta::new(EVENT_SOURCE),
            articles: summary.total(),
            distinct: summary.distinct(),
        });

        Ok(CheckoutOutcome::Validated(OrderHandoff {
            summary,
            message,
            link,
        }))
    }
}
