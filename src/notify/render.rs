//! Notification presentation.

use crate::models::{Notification, NotificationId, NotificationPhase};
use std::sync::Mutex;

/// Decides how a notification phase is presented.
///
/// Renderers are pure sinks: they hold no lifecycle state and are called once
/// per phase transition.
pub trait NotificationRenderer: Send + Sync {
    /// Presents a phase transition of a notification instance.
    fn render(&self, notification: &Notification, phase: NotificationPhase);
}

/// Renders notifications into the tracing log stream.
///
/// Library default; the CLI binary installs its own terminal renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl LogRenderer {
    /// Creates a new log renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationRenderer for LogRenderer {
    fn render(&self, notification: &Notification, phase: NotificationPhase) {
        match phase {
            NotificationPhase::Visible => {
                tracing::info!(
                    kind = notification.kind.as_str(),
                    "notification: {}",
                    notification.text
                );
            }
            NotificationPhase::Created | NotificationPhase::FadingOut
            | NotificationPhase::Removed => {
                tracing::debug!(
                    kind = notification.kind.as_str(),
                    phase = phase.as_str(),
                    id = %notification.id,
                    "notification phase"
                );
            }
        }
    }
}

/// Records every phase transition. Test fake.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    transitions: Mutex<Vec<(NotificationId, NotificationPhase)>>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded transition in order.
    #[must_use]
    pub fn transitions(&self) -> Vec<(NotificationId, NotificationPhase)> {
        self.transitions
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    /// Returns the phase sequence recorded for one instance.
    #[must_use]
    pub fn phases_of(&self, id: NotificationId) -> Vec<NotificationPhase> {
        self.transitions()
            .into_iter()
            .filter(|(tid, _)| *tid == id)
            .map(|(_, phase)| phase)
            .collect()
    }
}

impl NotificationRenderer for RecordingRenderer {
    fn render(&self, notification: &Notification, phase: NotificationPhase) {
        if let Ok(mut transitions) = self.transitions.lock() {
            transitions.push((notification.id, phase));
        }
    }
}
