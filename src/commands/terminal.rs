//! Terminal notification rendering.

use comptoir::models::{Notification, NotificationPhase};
use comptoir::notify::NotificationRenderer;

/// Prints notifications to the terminal when they become visible.
///
/// The terminal has no fade; the remaining phases are tracked by the
/// notification center and surface only in debug logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationRenderer for TerminalRenderer {
    fn render(&self, notification: &Notification, phase: NotificationPhase) {
        match phase {
            NotificationPhase::Visible => println!("{}", notification.text),
            NotificationPhase::Created
            | NotificationPhase::FadingOut
            | NotificationPhase::Removed => {
                tracing::debug!(
                    id = %notification.id,
                    phase = phase.as_str(),
                    "notification phase"
                );
            }
        }
    }
}
