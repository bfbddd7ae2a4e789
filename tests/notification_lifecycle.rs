//! Notification lifecycle tests.
//!
//! Verifies, under a paused tokio clock, that every notification instance
//! walks `Created → Visible → FadingOut → Removed` and that nothing lingers
//! once the scheduled durations elapse.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use comptoir::models::{
    Notification, NotificationKind, NotificationPhase, NotificationTimings, ProductName,
};
use comptoir::notify::{NotificationCenter, Notifier, RecordingRenderer};
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;

fn center() -> (NotificationCenter, Arc<RecordingRenderer>) {
    let renderer = Arc::new(RecordingRenderer::new());
    let center = NotificationCenter::new(NotificationTimings::default(), renderer.clone());
    (center, renderer)
}

#[tokio::test(start_paused = true)]
async fn every_notification_reaches_removed() {
    let (center, renderer) = center();

    let notification = Notification::item_added(&ProductName::new("Thiakry").unwrap());
    let id = notification.id;
    center.notify(notification);

    assert_eq!(center.active_count(), 1);
    assert_eq!(center.phase_of(id), Some(NotificationPhase::Created));

    center.drain().await;

    assert_eq!(center.active_count(), 0);
    assert_eq!(center.phase_of(id), None);
    assert_eq!(center.removed_total(), 1);
    assert_eq!(
        renderer.phases_of(id),
        vec![
            NotificationPhase::Created,
            NotificationPhase::Visible,
            NotificationPhase::FadingOut,
            NotificationPhase::Removed,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn concurrent_notifications_are_independent() {
    let (center, renderer) = center();

    let first = Notification::item_added(&ProductName::new("Thiakry").unwrap());
    let second = Notification::contact_accepted();
    let third = Notification::empty_cart();
    let ids = [first.id, second.id, third.id];

    center.notify(first);
    center.notify(second);
    center.notify(third);
    assert_eq!(center.active_count(), 3);

    center.drain().await;

    assert_eq!(center.active_count(), 0);
    assert_eq!(center.removed_total(), 3);
    for id in ids {
        // Each instance ran its own complete lifecycle.
        assert_eq!(
            renderer.phases_of(id),
            vec![
                NotificationPhase::Created,
                NotificationPhase::Visible,
                NotificationPhase::FadingOut,
                NotificationPhase::Removed,
            ]
        );
    }
}

#[tokio::test(start_paused = true)]
async fn visible_phase_lasts_the_configured_duration() {
    let (center, _renderer) = center();

    let notification = Notification::item_added(&ProductName::new("Tea").unwrap());
    let id = notification.id;
    center.notify(notification);

    // Reveal delay passes: the instance becomes visible.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(center.phase_of(id), Some(NotificationPhase::Visible));

    // Still visible shortly before the 3000 ms dismiss fires.
    tokio::time::sleep(Duration::from_millis(2900)).await;
    assert_eq!(center.phase_of(id), Some(NotificationPhase::Visible));

    // Past the dismiss point the instance is fading.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(center.phase_of(id), Some(NotificationPhase::FadingOut));

    // Past the fade the instance is gone.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(center.phase_of(id), None);
    assert_eq!(center.active_count(), 0);
}

#[test_case(NotificationKind::ItemAdded => Duration::from_millis(3000))]
#[test_case(NotificationKind::ContactAccepted => Duration::from_millis(4000))]
#[test_case(NotificationKind::EmptyCart => Duration::from_millis(3000))]
fn visible_durations(kind: NotificationKind) -> Duration {
    NotificationTimings::default().visible_for(kind)
}

#[test_case(NotificationKind::ItemAdded => Duration::from_millis(3310))]
#[test_case(NotificationKind::ContactAccepted => Duration::from_millis(4310))]
fn total_scheduled_lifetimes(kind: NotificationKind) -> Duration {
    NotificationTimings::default().total_for(kind)
}

#[tokio::test(start_paused = true)]
async fn shutdown_clears_outstanding_instances() {
    let (center, _renderer) = center();

    center.notify(Notification::empty_cart());
    center.notify(Notification::contact_accepted());
    assert_eq!(center.active_count(), 2);

    center.shutdown();
    assert_eq!(center.active_count(), 0);

    // Draining after shutdown returns immediately.
    center.drain().await;
}
