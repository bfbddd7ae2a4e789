//! Contact form service.
//!
//! Accepts submissions and acknowledges them with a success notification.
//! Success is simulated: nothing is delivered or stored.

use crate::models::{CartEvent, ContactSubmission, EventMeta, Notification};
use crate::notify::Notifier;
use crate::observability::global_event_bus;
use crate::Result;
use std::sync::Arc;

/// Event source label for contact events.
const EVENT_SOURCE: &str = "contact_service";

/// Service handling contact form submissions.
pub struct ContactService {
    /// Notification port.
    notifier: Arc<dyn Notifier>,
}

impl ContactService {
    /// Creates a new contact service.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Accepts a submission.
    ///
    /// Logs the submission, publishes `ContactSubmitted`, and raises the
    /// fixed success notification. The form is considered reset afterwards.
    ///
    /// # Errors
    ///
    /// Currently infallible; fallible signature kept for parity with the
    /// other services.
    pub fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        tracing::debug!(
            name = submission.name.as_deref().unwrap_or("-"),
            email = submission.email.as_deref().unwrap_or("-"),
            body_len = submission.message.len(),
            "contact form submitted"
        );

        metrics::counter!("contact_submissions_total").increment(1);

        global_event_bus().publish(CartEvent::ContactSubmitted {
            meta: EventMeta::new(EVENT_SOURCE),
        });

        self.notifier.notify(Notification::contact_accepted());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::NotificationKind;
    use crate::notify::MemoryNotifier;

    #[test]
    fn test_submit_raises_success_notification() {
        let notifier = Arc::new(MemoryNotifier::new());
        let service = ContactService::new(notifier.clone());

        let submission = ContactSubmission::new("Bonjour !")
            .with_name("Awa")
            .with_email("awa@example.sn");
        service.submit(&submission).unwrap();

        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::ContactAccepted);
        assert_eq!(seen[0].text, "Message envoyé ! Nous vous répondrons bientôt.");
    }
}
