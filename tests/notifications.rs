use std::collections::HashSet;
use std::time::{Duration, Instant};

use walkers_terminal::notify::{
    DEFAULT_DURATION, EXIT_ANIMATION, NotificationPhase, NotificationQueue,
};

#[test]
fn notification_expires_at_its_duration() {
    let mut queue = NotificationQueue::new();
    let t0 = Instant::now();
    let d = Duration::from_millis(2000);
    let id = queue.push("Title", "Body", None, Some(d), t0);

    queue.tick(t0 + d - Duration::from_millis(1));
    assert_eq!(queue.visible().len(), 1);

    queue.tick(t0 + d);
    assert!(queue.visible().is_empty());
    let item = queue.get(&id).expect("still rendered during exit");
    assert_eq!(item.phase(), NotificationPhase::Dismissed);

    queue.tick(t0 + d + EXIT_ANIMATION);
    assert!(queue.get(&id).is_none());
    assert!(queue.is_empty());
}

#[test]
fn late_tick_still_removes_expired_items() {
    let mut queue = NotificationQueue::new();
    let t0 = Instant::now();
    queue.push("Title", "Body", None, None, t0);
    queue.tick(t0 + DEFAULT_DURATION + EXIT_ANIMATION + Duration::from_secs(5));
    assert!(queue.is_empty());
}

#[test]
fn dismissal_keeps_item_for_exit_window_only() {
    let mut queue = NotificationQueue::new();
    let t0 = Instant::now();
    let first = queue.push("One", "a", None, None, t0);
    let second = queue.push("Two", "b", None, None, t0);

    let closed_at = t0 + Duration::from_millis(300);
    assert!(queue.dismiss(&first, closed_at));
    assert!(!queue.dismiss(&first, closed_at));

    queue.tick(closed_at + EXIT_ANIMATION - Duration::from_millis(1));
    assert_eq!(queue.rendered().len(), 2);
    assert_eq!(queue.visible().len(), 1);

    queue.tick(closed_at + EXIT_ANIMATION);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.rendered()[0].id, second);
}

#[test]
fn dismiss_latest_targets_newest_visible() {
    let mut queue = NotificationQueue::new();
    let t0 = Instant::now();
    let older = queue.push("Old", "a", None, None, t0);
    let newer = queue.push("New", "b", None, None, t0);

    assert!(queue.dismiss_latest(t0));
    assert_eq!(
        queue.get(&newer).map(|n| n.phase()),
        Some(NotificationPhase::Dismissed)
    );
    assert!(queue.dismiss_latest(t0));
    assert_eq!(
        queue.get(&older).map(|n| n.phase()),
        Some(NotificationPhase::Dismissed)
    );
    assert!(!queue.dismiss_latest(t0));
}

#[test]
fn queued_ids_are_unique() {
    let mut queue = NotificationQueue::new();
    let t0 = Instant::now();
    let ids: HashSet<String> = (0..200)
        .map(|i| queue.push(format!("n{i}"), "body", None, None, t0))
        .collect();
    assert_eq!(ids.len(), 200);
    assert!(ids.iter().all(|id| id.len() == 9));
}

#[test]
fn unknown_id_is_not_dismissed() {
    let mut queue = NotificationQueue::new();
    assert!(!queue.dismiss("missing", Instant::now()));
}
