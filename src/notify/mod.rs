//! Notification layer.
//!
//! Transient, auto-dismissing messages with a timed lifecycle. The cart and
//! contact services publish through the [`Notifier`] port; the
//! [`NotificationCenter`] schedules each instance through
//! `Created → Visible → FadingOut → Removed` on the tokio runtime, and a
//! [`NotificationRenderer`] decides how each phase is presented.

mod center;
mod render;

pub use center::NotificationCenter;
pub use render::{LogRenderer, NotificationRenderer, RecordingRenderer};

use crate::models::Notification;
use std::sync::Mutex;

/// Port for raising notifications.
pub trait Notifier: Send + Sync {
    /// Raises a notification. Fire-and-forget: the caller does not learn
    /// when, or whether, the instance finished its lifecycle.
    fn notify(&self, notification: Notification);
}

/// Collects notifications without any lifecycle. Test fake for services.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications raised so far.
    #[must_use]
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}
