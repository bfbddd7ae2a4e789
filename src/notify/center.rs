//! Notification lifecycle scheduling.

use super::render::NotificationRenderer;
use super::Notifier;
use crate::models::{Notification, NotificationId, NotificationPhase, NotificationTimings};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Schedules notification lifecycles on the tokio runtime.
///
/// Each raised notification runs an independent fire-and-forget task:
/// a short reveal delay, a kind-specific visible duration, then a fade before
/// removal. Instances do not interact; there is no ordering guarantee between
/// concurrent instances beyond their own relative delays. The center tracks
/// live instances so callers can drain them before teardown or abort them
/// outright.
pub struct NotificationCenter {
    timings: NotificationTimings,
    renderer: Arc<dyn NotificationRenderer>,
    active: Arc<Mutex<HashMap<NotificationId, NotificationPhase>>>,
    removed_total: Arc<AtomicU64>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl NotificationCenter {
    /// Creates a center with the given timings and renderer.
    #[must_use]
    pub fn new(timings: NotificationTimings, renderer: Arc<dyn NotificationRenderer>) -> Self {
        Self {
            timings,
            renderer,
            active: Arc::new(Mutex::new(HashMap::new())),
            removed_total: Arc::new(AtomicU64::new(0)),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Returns the number of instances that have not reached `Removed`.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.lock().map(|map| map.len()).unwrap_or(0)
    }

    /// Returns the current phase of an instance, or `None` once removed.
    #[must_use]
    pub fn phase_of(&self, id: NotificationId) -> Option<NotificationPhase> {
        self.active.lock().ok().and_then(|map| map.get(&id).copied())
    }

    /// Returns how many instances have completed their lifecycle.
    #[must_use]
    pub fn removed_total(&self) -> u64 {
        self.removed_total.load(Ordering::Relaxed)
    }

    /// Waits for every outstanding lifecycle task to finish.
    pub async fn drain(&self) {
        loop {
            let handles = {
                let Ok(mut tasks) = self.tasks.lock() else {
                    return;
                };
                std::mem::take(&mut *tasks)
            };
            if handles.is_empty() {
                return;
            }
            for handle in handles {
                let _ = handle.await;
            }
        }
    }

    /// Aborts outstanding lifecycle tasks and clears the live registry.
    ///
    /// Used on teardown when waiting out the scheduled delays is not wanted.
    pub fn shutdown(&self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for handle in tasks.drain(..) {
                handle.abort();
            }
        }
        if let Ok(mut active) = self.active.lock() {
            active.clear();
        }
    }

    fn set_phase(
        active: &Mutex<HashMap<NotificationId, NotificationPhase>>,
        id: NotificationId,
        phase: NotificationPhase,
    ) {
        if let Ok(mut map) = active.lock() {
            map.insert(id, phase);
        }
    }

    async fn run_lifecycle(
        notification: Notification,
        timings: NotificationTimings,
        renderer: Arc<dyn NotificationRenderer>,
        active: Arc<Mutex<HashMap<NotificationId, NotificationPhase>>>,
        removed_total: Arc<AtomicU64>,
    ) {
        let id = notification.id;

        tokio::time::sleep(timings.reveal).await;
        Self::set_phase(&active, id, NotificationPhase::Visible);
        renderer.render(&notification, NotificationPhase::Visible);

        tokio::time::sleep(timings.visible_for(notification.kind)).await;
        Self::set_phase(&active, id, NotificationPhase::FadingOut);
        renderer.render(&notification, NotificationPhase::FadingOut);

        tokio::time::sleep(timings.fade).await;
        if let Ok(mut map) = active.lock() {
            map.remove(&id);
        }
        removed_total.fetch_add(1, Ordering::Relaxed);
        renderer.render(&notification, NotificationPhase::Removed);
        metrics::counter!("notifications_removed_total").increment(1);
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        metrics::counter!("notifications_created_total").increment(1);

        Self::set_phase(&self.active, notification.id, NotificationPhase::Created);
        self.renderer.render(&notification, NotificationPhase::Created);

        let handle = tokio::spawn(Self::run_lifecycle(
            notification,
            self.timings,
            Arc::clone(&self.renderer),
            Arc::clone(&self.active),
            Arc::clone(&self.removed_total),
        ));

        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.push(handle);
        }
    }
}
