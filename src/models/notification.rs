//! Transient notification types and lifecycle states.

use super::ProductName;
use crate::current_timestamp;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(uuid::Uuid);

impl NotificationId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The scenario a notification was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// An item was added to the cart.
    ItemAdded,
    /// A contact form submission was accepted.
    ContactAccepted,
    /// A checkout was attempted with an empty cart.
    EmptyCart,
}

impl NotificationKind {
    /// Returns the kind as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ItemAdded => "item_added",
            Self::ContactAccepted => "contact_accepted",
            Self::EmptyCart => "empty_cart",
        }
    }
}

/// Lifecycle phase of a notification instance.
///
/// Linear, no branching: `Created → Visible → FadingOut → Removed`. Each
/// instance runs to completion independently of any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Instance exists but has not been revealed yet.
    Created,
    /// Instance is displayed.
    Visible,
    /// Instance is fading before removal.
    FadingOut,
    /// Instance has been removed; nothing remains on screen.
    Removed,
}

impl NotificationPhase {
    /// Returns the phase as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Visible => "visible",
            Self::FadingOut => "fading_out",
            Self::Removed => "removed",
        }
    }
}

/// A transient, auto-dismissing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Instance identifier.
    pub id: NotificationId,
    /// The scenario this notification was raised for.
    pub kind: NotificationKind,
    /// The rendered message text.
    pub text: String,
    /// Unix timestamp (seconds) at creation.
    pub created_at: u64,
}

impl Notification {
    fn new(kind: NotificationKind, text: String) -> Self {
        Self {
            id: NotificationId::generate(),
            kind,
            text,
            created_at: current_timestamp(),
        }
    }

    /// Notification for a product added to the cart.
    #[must_use]
    pub fn item_added(product: &ProductName) -> Self {
        Self::new(
            NotificationKind::ItemAdded,
            format!("{product} ajouté au panier !"),
        )
    }

    /// Notification for an accepted contact form submission.
    #[must_use]
    pub fn contact_accepted() -> Self {
        Self::new(
            NotificationKind::ContactAccepted,
            "Message envoyé ! Nous vous répondrons bientôt.".to_string(),
        )
    }

    /// Notification for a checkout attempt with an empty cart.
    #[must_use]
    pub fn empty_cart() -> Self {
        Self::new(
            NotificationKind::EmptyCart,
            "Votre panier est vide ! 🛒".to_string(),
        )
    }
}

/// Scheduling delays for the notification lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Delay between creation and reveal.
    pub reveal: Duration,
    /// How long an item-added notification stays visible.
    pub item_added_visible: Duration,
    /// How long a contact-accepted notification stays visible.
    pub contact_visible: Duration,
    /// How long an empty-cart notice stays visible.
    pub empty_cart_visible: Duration,
    /// Fade duration before removal.
    pub fade: Duration,
}

impl NotificationTimings {
    /// Returns the visible duration for a notification kind.
    #[must_use]
    pub const fn visible_for(&self, kind: NotificationKind) -> Duration {
        match kind {
            NotificationKind::ItemAdded => self.item_added_visible,
            NotificationKind::ContactAccepted => self.contact_visible,
            NotificationKind::EmptyCart => self.empty_cart_visible,
        }
    }

    /// Returns the total scheduled lifetime for a notification kind.
    #[must_use]
    pub fn total_for(&self, kind: NotificationKind) -> Duration {
        self.reveal + self.visible_for(kind) + self.fade
    }
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(10),
            item_added_visible: Duration::from_millis(3000),
            contact_visible: Duration::from_millis(4000),
            empty_cart_visible: Duration::from_millis(3000),
            fade: Duration::from_millis(300),
        }
    }
}
