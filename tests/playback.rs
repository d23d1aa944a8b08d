mod common;

use std::time::{Duration, Instant};

use chrono::Utc;
use common::{RecordingAdapter, Sent, app_with};
use walkers_terminal::anthem::{AnthemEvent, AnthemPlayer, FADE_PERIOD};
use walkers_terminal::data::{ANTHEM_URL, HIGHLIGHTS};
use walkers_terminal::i18n::find_language;
use walkers_terminal::playback::{
    PlaybackEvent, PlaybackHandle, PlaybackSession, PlaybackStatus, PlayerProgress,
    SourceDescriptor, SourceKind, Surface,
};
use walkers_terminal::prefs::PreferenceStore;
use walkers_terminal::router::Route;

const LINK: Duration = Duration::from_millis(1200);
const SYNC: Duration = Duration::from_secs(1);

fn hls() -> SourceDescriptor {
    SourceDescriptor::classify("https://cdn.test/live/index.m3u8")
}

fn attached_session(adapter: &mut RecordingAdapter, now: Instant) -> PlaybackSession {
    let mut session = PlaybackSession::new();
    session.open(Some(hls()), adapter, now);
    assert_eq!(session.tick(now + LINK, adapter), Some(PlaybackEvent::Started));
    session
}

#[test]
fn stream_attaches_after_link_phase() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = PlaybackSession::new();
    session.open(Some(hls()), &mut adapter, t0);

    assert_eq!(session.status(), PlaybackStatus::Connecting);
    assert_eq!(session.tick(t0 + LINK - Duration::from_millis(1), &mut adapter), None);
    assert_eq!(session.tick(t0 + LINK, &mut adapter), Some(PlaybackEvent::Started));
    assert_eq!(session.status(), PlaybackStatus::Playing);
    assert_eq!(journal.borrow().attached.len(), 1);
    assert_eq!(journal.borrow().attached[0].0, Surface::Video);
}

#[test]
fn attach_failure_leaves_session_paused_without_retry() {
    let (mut adapter, journal) = RecordingAdapter::new(true);
    let t0 = Instant::now();
    let mut session = PlaybackSession::new();
    session.open(Some(hls()), &mut adapter, t0);

    let event = session.tick(t0 + LINK, &mut adapter);
    assert!(matches!(event, Some(PlaybackEvent::AttachFailed(_))));
    assert_eq!(session.status(), PlaybackStatus::Paused);
    assert!(session.last_error().is_some());

    session.tick(t0 + LINK * 5, &mut adapter);
    assert_eq!(journal.borrow().attached.len(), 1);
}

#[test]
fn pause_and_volume_reach_the_player() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = attached_session(&mut adapter, t0);

    session.toggle_play(t0, &mut adapter).expect("pause");
    assert_eq!(session.status(), PlaybackStatus::Paused);
    session.set_volume(0.0, t0, &mut adapter).expect("volume");
    assert!(session.is_muted());

    assert_eq!(
        journal.borrow().sent,
        vec![
            (PlaybackHandle(1), Sent::Paused(true)),
            (PlaybackHandle(1), Sent::Volume(0.0)),
            (PlaybackHandle(1), Sent::Muted(true)),
        ]
    );

    session.toggle_play(t0, &mut adapter).expect("resume");
    session.toggle_mute(t0, &mut adapter).expect("unmute");
    let commands = journal.borrow().commands();
    assert_eq!(&commands[3..], &[Sent::Paused(false), Sent::Muted(false)]);
}

#[test]
fn refused_command_leaves_state_untouched() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = attached_session(&mut adapter, t0);
    journal.borrow_mut().refuse_controls = true;

    assert!(session.toggle_play(t0, &mut adapter).is_err());
    assert_eq!(session.status(), PlaybackStatus::Playing);
    assert!(session.toggle_mute(t0, &mut adapter).is_err());
    assert!(!session.is_muted());
    assert!(session.toggle_fullscreen(t0, &mut adapter).is_err());
    assert!(!session.is_fullscreen());
}

#[test]
fn volume_is_clamped_and_zero_means_muted() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = attached_session(&mut adapter, t0);

    session.set_volume(1.8, t0, &mut adapter).expect("volume");
    assert_eq!(session.volume(), 1.0);
    assert!(!session.is_muted());

    session.set_volume(-0.3, t0, &mut adapter).expect("volume");
    assert_eq!(session.volume(), 0.0);
    assert!(session.is_muted());

    session.set_volume(0.5, t0, &mut adapter).expect("volume");
    assert!(!session.is_muted());
    assert!(journal.borrow().commands().contains(&Sent::Volume(1.0)));
}

#[test]
fn seek_is_clamped_to_reported_duration() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = attached_session(&mut adapter, t0);
    journal.borrow_mut().progress = PlayerProgress {
        position: Some(12.0),
        duration: Some(90.0),
    };
    session.tick(t0 + LINK + SYNC, &mut adapter);
    assert_eq!(session.duration(), Some(90.0));
    assert_eq!(session.position(), 12.0);

    session.seek_to(200.0, t0, &mut adapter).expect("seek");
    assert_eq!(session.position(), 90.0);
    session.seek_by(-500.0, t0, &mut adapter).expect("seek");
    assert_eq!(session.position(), 0.0);
    session.seek_to(f64::NAN, t0, &mut adapter).expect("seek");
    assert_eq!(session.position(), 0.0);
    assert_eq!(
        &journal.borrow().commands()[..2],
        &[Sent::Seek(90.0), Sent::Seek(0.0)]
    );
}

#[test]
fn unknown_duration_blocks_forward_seek() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = attached_session(&mut adapter, t0);
    journal.borrow_mut().progress = PlayerProgress {
        position: Some(40.0),
        duration: None,
    };
    session.tick(t0 + LINK + SYNC, &mut adapter);
    assert_eq!(session.duration(), None);

    session.seek_by(10.0, t0, &mut adapter).expect("seek");
    assert_eq!(session.position(), 40.0);
    session.seek_by(-10.0, t0, &mut adapter).expect("seek");
    assert_eq!(session.position(), 30.0);
}

#[test]
fn settings_chosen_while_connecting_are_applied_after_attach() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = PlaybackSession::new();
    session.open(Some(hls()), &mut adapter, t0);
    session.toggle_fullscreen(t0, &mut adapter).expect("fullscreen");
    session.toggle_zoom(t0, &mut adapter).expect("zoom");
    assert!(journal.borrow().sent.is_empty());

    session.tick(t0 + LINK, &mut adapter);
    session.tick(t0 + LINK + SYNC, &mut adapter);
    assert_eq!(
        journal.borrow().commands(),
        vec![Sent::Fullscreen(true), Sent::Zoomed(true)]
    );

    session.tick(t0 + LINK + SYNC * 2, &mut adapter);
    assert_eq!(journal.borrow().sent.len(), 2);
}

#[test]
fn controls_hide_after_idle_while_playing() {
    let (mut adapter, _) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = attached_session(&mut adapter, t0);
    let started = t0 + LINK;

    session.tick(started + Duration::from_millis(2900), &mut adapter);
    assert!(session.controls_visible());
    session.tick(started + Duration::from_secs(3), &mut adapter);
    assert!(!session.controls_visible());

    session
        .toggle_fullscreen(started + Duration::from_secs(4), &mut adapter)
        .expect("fullscreen");
    assert!(session.controls_visible());
    assert!(session.is_fullscreen());
}

#[test]
fn youtube_sources_ignore_transport_controls() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = PlaybackSession::new();
    let source = SourceDescriptor::classify("https://www.youtube.com/watch?v=abc");
    assert_eq!(source.kind, SourceKind::YouTube);
    session.open(Some(source), &mut adapter, t0);
    session.tick(t0 + LINK, &mut adapter);

    session.toggle_play(t0 + LINK, &mut adapter).expect("no-op");
    assert_eq!(session.status(), PlaybackStatus::Playing);
    session.set_volume(0.0, t0 + LINK, &mut adapter).expect("no-op");
    assert_eq!(session.volume(), 1.0);
    assert!(journal.borrow().sent.is_empty());
}

#[test]
fn closing_detaches_the_stream() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut session = attached_session(&mut adapter, t0);
    session.close(&mut adapter);
    assert_eq!(session.status(), PlaybackStatus::Idle);
    assert_eq!(journal.borrow().detached, vec![PlaybackHandle(1)]);
}

#[test]
fn anthem_fade_lowers_player_volume_then_stops() {
    let (mut adapter, journal) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut anthem = AnthemPlayer::new(ANTHEM_URL);
    assert_eq!(anthem.toggle(&mut adapter), AnthemEvent::Started);
    assert_eq!(journal.borrow().attached[0].0, Surface::Audio);

    anthem.begin_fade(t0);
    assert_eq!(anthem.tick(t0 + FADE_PERIOD, &mut adapter), None);
    assert!(anthem.volume() < 1.0);
    assert!(matches!(
        journal.borrow().commands().as_slice(),
        [Sent::Volume(v)] if (*v - 0.95).abs() < 1e-6
    ));

    let event = anthem.tick(t0 + FADE_PERIOD * 40, &mut adapter);
    assert_eq!(event, Some(AnthemEvent::FadedOut));
    assert!(!anthem.is_playing());
    assert!(!anthem.is_fading());
    assert_eq!(anthem.volume(), 1.0);
    assert_eq!(journal.borrow().detached.len(), 1);

    let volumes: Vec<f32> = journal
        .borrow()
        .commands()
        .into_iter()
        .filter_map(|cmd| match cmd {
            Sent::Volume(v) => Some(v),
            _ => None,
        })
        .collect();
    assert!(volumes.len() >= 18);
    assert!(volumes.windows(2).all(|pair| pair[1] < pair[0]));
}

#[test]
fn manual_toggle_cancels_fade() {
    let (mut adapter, _) = RecordingAdapter::new(false);
    let t0 = Instant::now();
    let mut anthem = AnthemPlayer::new(ANTHEM_URL);
    anthem.toggle(&mut adapter);
    anthem.begin_fade(t0);
    anthem.tick(t0 + FADE_PERIOD * 3, &mut adapter);

    assert_eq!(anthem.toggle(&mut adapter), AnthemEvent::Stopped);
    assert!(!anthem.is_fading());
    assert_eq!(anthem.volume(), 1.0);
}

#[test]
fn watch_page_streams_language_channel_and_detaches_on_leave() {
    let (adapter, journal) = RecordingAdapter::new(false);
    let (mut state, t0) = app_with(adapter, PreferenceStore::in_memory(), "/", Utc::now());
    state.navigate("/watch?lang=rmtv", t0);
    assert_eq!(state.playback.status(), PlaybackStatus::Connecting);

    state.tick(t0 + LINK, Utc::now());
    let expected = find_language("rmtv").and_then(|l| l.stream_url).expect("rmtv stream");
    assert_eq!(journal.borrow().attached, vec![(Surface::Video, expected.to_string())]);

    state.navigate("/squad", t0 + LINK * 2);
    assert_eq!(state.playback.status(), PlaybackStatus::Idle);
    assert_eq!(journal.borrow().detached.len(), 1);
}

#[test]
fn watch_keys_drive_the_player_and_log_refusals() {
    let (adapter, journal) = RecordingAdapter::new(false);
    let (mut state, t0) = app_with(adapter, PreferenceStore::in_memory(), "/watch?lang=rmtv", Utc::now());
    state.tick(t0 + LINK, Utc::now());

    state.activate(t0 + LINK);
    state.select_next(t0 + LINK);
    assert_eq!(state.playback.status(), PlaybackStatus::Paused);
    assert_eq!(
        journal.borrow().commands(),
        vec![Sent::Paused(true), Sent::Volume(0.9), Sent::Muted(false)]
    );

    journal.borrow_mut().refuse_controls = true;
    state.toggle_play(t0 + LINK);
    assert_eq!(state.playback.status(), PlaybackStatus::Paused);
    assert!(state.logs.iter().any(|l| l.starts_with("[WARN] Player control failed")));
}

#[test]
fn watch_failure_is_logged_as_warning() {
    let (adapter, _) = RecordingAdapter::new(true);
    let (mut state, t0) = app_with(adapter, PreferenceStore::in_memory(), "/watch?lang=rmtv", Utc::now());
    state.tick(t0 + LINK, Utc::now());
    assert_eq!(state.playback.status(), PlaybackStatus::Paused);
    assert!(state.logs.iter().any(|l| l.starts_with("[WARN] Playback failed")));
}

#[test]
fn playing_a_highlight_opens_its_video() {
    let (adapter, _) = RecordingAdapter::new(false);
    let (mut state, t0) = app_with(adapter, PreferenceStore::in_memory(), "/backup", Utc::now());
    state.play_highlight(t0);

    assert_eq!(state.route(), Route::Watch);
    let source = state.playback.source().expect("highlight source");
    assert_eq!(source.url, HIGHLIGHTS[0].video_url);
    assert_eq!(source.kind, SourceKind::Hls);
}

#[test]
fn entering_watch_fades_the_anthem() {
    let (adapter, journal) = RecordingAdapter::new(false);
    let (mut state, t0) = app_with(adapter, PreferenceStore::in_memory(), "/", Utc::now());
    state.toggle_anthem();
    assert!(state.anthem.is_playing());

    state.navigate("/watch", t0);
    assert!(state.anthem.is_fading());
    state.tick(t0 + FADE_PERIOD * 40, Utc::now());
    assert!(!state.anthem.is_playing());
    assert!(journal
        .borrow()
        .attached
        .iter()
        .any(|(surface, url)| *surface == Surface::Audio && url == ANTHEM_URL));
    assert!(journal
        .borrow()
        .commands()
        .iter()
        .any(|cmd| matches!(cmd, Sent::Volume(v) if *v < 1.0)));
}
