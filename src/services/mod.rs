//! Services owning the storefront behavior.

mod cart;
mod contact;

pub use cart::{CartService, CheckoutOutcome, OrderHandoff};
pub use contact::ContactService;

use crate::config::ComptoirConfig;
use crate::notify::{NotificationCenter, NotificationRenderer, Notifier};
use crate::storage::ProfileStore;
use crate::Result;
use std::sync::Arc;

/// Assembled storefront session: cart and contact services wired to the
/// profile store and a shared notification center.
///
/// Mirrors the lifetime of a page session: the persisted cart is loaded once
/// when the storefront opens, and every later mutation is written through.
pub struct Storefront {
    cart: CartService,
    contact: ContactService,
    center: Arc<NotificationCenter>,
}

impl Storefront {
    /// Opens a storefront session against the configured profile directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile directory cannot be created or the
    /// persisted cart cannot be read.
    pub fn open(config: ComptoirConfig, renderer: Arc<dyn NotificationRenderer>) -> Result<Self> {
        let store = ProfileStore::with_create(&config.data_dir)?;
        let center = Arc::new(NotificationCenter::new(config.notifications, renderer));
        let notifier: Arc<dyn Notifier> = center.clone();

        let mut cart = CartService::new(config, Box::new(store), Arc::clone(&notifier));
        cart.load()?;

        Ok(Self {
            cart,
            contact: ContactService::new(notifier),
            center,
        })
    }

    /// Returns the cart service.
    #[must_use]
    pub const fn cart(&self) -> &CartService {
        &self.cart
    }

    /// Returns the cart service mutably.
    pub fn cart_mut(&mut self) -> &mut CartService {
        &mut self.cart
    }

    /// Returns the contact service.
    #[must_use]
    pub const fn contact(&self) -> &ContactService {
        &self.contact
    }

    /// Returns the notification center.
    #[must_use]
    pub fn notifications(&self) -> Arc<NotificationCenter> {
        Arc::clone(&self.center)
    }

    /// Waits for every outstanding notification to finish its lifecycle.
    pub async fn drain_notifications(&self) {
        self.center.drain().await;
    }
}
