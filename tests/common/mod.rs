#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use walkers_terminal::config::AppConfig;
use walkers_terminal::playback::{
    PlaybackHandle, PlayerProgress, SourceDescriptor, StreamAdapter, Surface,
};
use walkers_terminal::prefs::PreferenceStore;
use walkers_terminal::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Paused(bool),
    Seek(f64),
    Volume(f32),
    Muted(bool),
    Fullscreen(bool),
    Zoomed(bool),
}

#[derive(Default)]
pub struct Journal {
    pub attached: Vec<(Surface, String)>,
    pub detached: Vec<PlaybackHandle>,
    pub sent: Vec<(PlaybackHandle, Sent)>,
    pub progress: PlayerProgress,
    pub refuse_controls: bool,
}

impl Journal {
    pub fn commands(&self) -> Vec<Sent> {
        self.sent.iter().map(|(_, cmd)| cmd.clone()).collect()
    }
}

/// Stream adapter that records every call into a shared journal.
pub struct RecordingAdapter {
    journal: Rc<RefCell<Journal>>,
    fail_attach: bool,
    next: u64,
}

impl RecordingAdapter {
    pub fn new(fail_attach: bool) -> (Self, Rc<RefCell<Journal>>) {
        let journal = Rc::new(RefCell::new(Journal::default()));
        let adapter = Self {
            journal: Rc::clone(&journal),
            fail_attach,
            next: 1,
        };
        (adapter, journal)
    }

    fn send(&mut self, handle: PlaybackHandle, cmd: Sent) -> anyhow::Result<()> {
        let mut journal = self.journal.borrow_mut();
        if journal.refuse_controls {
            anyhow::bail!("player is not listening");
        }
        journal.sent.push((handle, cmd));
        Ok(())
    }
}

impl StreamAdapter for RecordingAdapter {
    fn attach(&mut self, surface: Surface, source: &SourceDescriptor) -> anyhow::Result<PlaybackHandle> {
        self.journal
            .borrow_mut()
            .attached
            .push((surface, source.url.clone()));
        if self.fail_attach {
            anyhow::bail!("no media player installed");
        }
        let handle = PlaybackHandle(self.next);
        self.next += 1;
        Ok(handle)
    }

    fn detach(&mut self, handle: PlaybackHandle) {
        self.journal.borrow_mut().detached.push(handle);
    }

    fn set_paused(&mut self, handle: PlaybackHandle, paused: bool) -> anyhow::Result<()> {
        self.send(handle, Sent::Paused(paused))
    }

    fn seek(&mut self, handle: PlaybackHandle, secs: f64) -> anyhow::Result<()> {
        self.send(handle, Sent::Seek(secs))
    }

    fn set_volume(&mut self, handle: PlaybackHandle, volume: f32) -> anyhow::Result<()> {
        self.send(handle, Sent::Volume(volume))
    }

    fn set_muted(&mut self, handle: PlaybackHandle, muted: bool) -> anyhow::Result<()> {
        self.send(handle, Sent::Muted(muted))
    }

    fn set_fullscreen(&mut self, handle: PlaybackHandle, fullscreen: bool) -> anyhow::Result<()> {
        self.send(handle, Sent::Fullscreen(fullscreen))
    }

    fn set_zoomed(&mut self, handle: PlaybackHandle, zoomed: bool) -> anyhow::Result<()> {
        self.send(handle, Sent::Zoomed(zoomed))
    }

    fn progress(&mut self, _handle: PlaybackHandle) -> anyhow::Result<PlayerProgress> {
        Ok(self.journal.borrow().progress)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        skip_loader: true,
        ..AppConfig::default()
    }
}

pub fn app_with(
    adapter: RecordingAdapter,
    prefs: PreferenceStore,
    start: &str,
    wall_now: DateTime<Utc>,
) -> (AppState, Instant) {
    let now = Instant::now();
    let state = AppState::new(&test_config(), prefs, Box::new(adapter), start, now, wall_now);
    (state, now)
}

/// App state whose player accepts everything and is never inspected.
pub fn state_at(start: &str, prefs: PreferenceStore) -> (AppState, Instant) {
    let (adapter, _) = RecordingAdapter::new(false);
    app_with(adapter, prefs, start, Utc::now())
}
