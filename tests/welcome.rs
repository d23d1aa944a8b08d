mod common;

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use common::{RecordingAdapter, app_with};
use walkers_terminal::data::fixtures;
use walkers_terminal::notify::NotificationQueue;
use walkers_terminal::prefs::PreferenceStore;
use walkers_terminal::welcome::{WelcomeScheduler, select_featured_fixture, welcome_text};

const GRACE: Duration = Duration::from_secs(2 * 60 * 60);

fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn scheduler() -> WelcomeScheduler {
    WelcomeScheduler::new(
        Duration::from_millis(1500),
        GRACE,
        Duration::from_millis(8000),
    )
}

#[test]
fn first_qualifying_fixture_in_dataset_order_wins() {
    let all = fixtures();
    // The third entry kicks off earlier but comes later in the dataset.
    let picked = select_featured_fixture(&all, at("2026-02-01T12:00:00Z"), GRACE).expect("fixture");
    assert_eq!(picked.opponent, "Benfica");
    assert_eq!(picked.kickoff, all[0].kickoff);
}

#[test]
fn match_in_progress_stays_featured_within_grace() {
    let all = fixtures();
    let picked = select_featured_fixture(&all, at("2026-02-17T21:00:00Z"), GRACE).expect("fixture");
    assert_eq!(picked.kickoff, all[0].kickoff);

    let later = select_featured_fixture(&all, at("2026-02-17T22:30:00Z"), GRACE).expect("fixture");
    assert_eq!(later.opponent, "Club Atlético Osasuna");
}

#[test]
fn falls_back_to_last_fixture_when_all_are_past() {
    let all = fixtures();
    let picked = select_featured_fixture(&all, at("2026-10-19T12:00:00Z"), GRACE).expect("fixture");
    assert_eq!(picked.opponent, all[all.len() - 1].opponent);
}

#[test]
fn unbounded_grace_admits_every_fixture() {
    let all = fixtures();
    let picked = select_featured_fixture(&all, at("2026-10-19T12:00:00Z"), Duration::MAX)
        .expect("fixture");
    assert_eq!(picked.opponent, all[0].opponent);
}

#[test]
fn empty_dataset_selects_nothing() {
    assert!(select_featured_fixture(&[], Utc::now(), GRACE).is_none());
}

#[test]
fn welcome_text_substitutes_opponent_per_language() {
    let all = fixtures();
    let (title, body) = welcome_text("ru", &all[0]);
    assert_eq!(title, "С возвращением!");
    assert!(body.contains("Benfica"));
    assert!(!body.contains("{opponent}"));

    let (title, _) = welcome_text("rmtv", &all[0]);
    assert_eq!(title, "Welcome Back!");
}

#[test]
fn scheduler_enqueues_exactly_once_after_delay() {
    let all = fixtures();
    let mut queue = NotificationQueue::new();
    let mut welcome = scheduler();
    let t0 = Instant::now();
    let wall = at("2026-02-20T10:00:00Z");
    welcome.schedule("en", t0);

    assert!(welcome.poll(t0 + Duration::from_millis(1499), wall, &all, &mut queue).is_none());
    let id = welcome
        .poll(t0 + Duration::from_millis(1500), wall, &all, &mut queue)
        .expect("welcome fired");
    assert!(welcome.poll(t0 + Duration::from_secs(10), wall, &all, &mut queue).is_none());

    let item = queue.get(&id).expect("queued");
    assert_eq!(queue.len(), 1);
    assert_eq!(item.title, "Welcome Back!");
    assert!(item.body.contains("Osasuna"));
    assert_eq!(item.icon.as_deref(), Some(all[1].opponent_logo.as_str()));
    assert_eq!(item.duration, Duration::from_millis(8000));
}

#[test]
fn language_change_cancels_and_rearms() {
    let all = fixtures();
    let mut queue = NotificationQueue::new();
    let mut welcome = scheduler();
    let t0 = Instant::now();
    let wall = at("2026-02-20T10:00:00Z");
    welcome.schedule("en", t0);

    assert!(welcome.language_changed("hy", t0 + Duration::from_millis(1000)));
    assert!(!welcome.language_changed("hy", t0 + Duration::from_millis(1200)));
    assert!(welcome.poll(t0 + Duration::from_millis(1500), wall, &all, &mut queue).is_none());

    let id = welcome
        .poll(t0 + Duration::from_millis(2500), wall, &all, &mut queue)
        .expect("rescheduled welcome fired");
    assert_eq!(queue.get(&id).map(|n| n.title.as_str()), Some("Բարի վերադարձ"));
    assert_eq!(queue.len(), 1);
}

#[test]
fn every_firing_adds_a_new_notification() {
    let all = fixtures();
    let mut queue = NotificationQueue::new();
    let mut welcome = scheduler();
    let t0 = Instant::now();
    let wall = at("2026-02-20T10:00:00Z");

    welcome.schedule("en", t0);
    welcome.poll(t0 + Duration::from_secs(2), wall, &all, &mut queue);
    welcome.language_changed("ru", t0 + Duration::from_secs(3));
    welcome.poll(t0 + Duration::from_secs(5), wall, &all, &mut queue);

    assert_eq!(queue.visible().len(), 2);
}

#[test]
fn cancelled_welcome_never_fires() {
    let all = fixtures();
    let mut queue = NotificationQueue::new();
    let mut welcome = scheduler();
    let t0 = Instant::now();
    welcome.schedule("en", t0);
    welcome.cancel();
    assert!(!welcome.is_scheduled());
    assert!(welcome.poll(t0 + Duration::from_secs(5), Utc::now(), &all, &mut queue).is_none());
}

#[test]
fn app_tick_shows_localized_welcome_after_delay() {
    let wall = at("2026-02-20T10:00:00Z");
    let (adapter, _) = RecordingAdapter::new(false);
    let (mut state, t0) = app_with(adapter, PreferenceStore::in_memory(), "/", wall);

    state.tick(t0 + Duration::from_millis(1499), wall);
    assert!(state.notifications.is_empty());

    state.tick(t0 + Duration::from_millis(1500), wall);
    let shown = state.notifications.visible();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "С возвращением!");
    assert!(shown[0].body.contains("Osasuna"));
    assert_eq!(shown[0].duration, Duration::from_millis(8000));
    assert!(state.logs.iter().any(|l| l == "[INFO] Welcome notification shown"));

    state.tick(t0 + Duration::from_secs(5), wall);
    assert_eq!(state.notifications.len(), 1);
}

#[test]
fn language_switch_after_welcome_adds_a_second_one() {
    let wall = at("2026-02-20T10:00:00Z");
    let (adapter, _) = RecordingAdapter::new(false);
    let (mut state, t0) = app_with(adapter, PreferenceStore::in_memory(), "/", wall);
    state.tick(t0 + Duration::from_millis(1500), wall);

    let switched = t0 + Duration::from_secs(2);
    state.set_language("en", switched);
    state.tick(switched + Duration::from_millis(1499), wall);
    assert_eq!(state.notifications.len(), 1);

    state.tick(switched + Duration::from_millis(1500), wall);
    let shown = state.notifications.visible();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].title, "С возвращением!");
    assert_eq!(shown[1].title, "Welcome Back!");
    assert!(shown[1].body.contains("Osasuna"));

    state.set_language("en", switched + Duration::from_secs(2));
    state.tick(switched + Duration::from_secs(6), wall);
    assert_eq!(state.notifications.len(), 2);
}
