use std::time::{Duration, Instant};

use crate::playback::{PlaybackHandle, SourceDescriptor, StreamAdapter, Surface};
use crate::timers::Interval;

pub const FADE_STEP: f32 = 0.05;
pub const FADE_PERIOD: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnthemEvent {
    Started,
    Stopped,
    FadedOut,
    Failed(String),
}

/// Header anthem toggle. Opening the watch page fades it out.
#[derive(Debug, Clone)]
pub struct AnthemPlayer {
    source: SourceDescriptor,
    handle: Option<PlaybackHandle>,
    volume: f32,
    fade: Interval,
}

impl AnthemPlayer {
    pub fn new(url: &str) -> Self {
        Self {
            source: SourceDescriptor::classify(url),
            handle: None,
            volume: 1.0,
            fade: Interval::new(FADE_PERIOD),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_running()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Manual toggle; an in-flight fade is abandoned and volume restored.
    pub fn toggle(&mut self, adapter: &mut dyn StreamAdapter) -> AnthemEvent {
        self.fade.cancel();
        self.volume = 1.0;
        if let Some(handle) = self.handle.take() {
            adapter.detach(handle);
            return AnthemEvent::Stopped;
        }
        match adapter.attach(Surface::Audio, &self.source) {
            Ok(handle) => {
                self.handle = Some(handle);
                AnthemEvent::Started
            }
            Err(err) => AnthemEvent::Failed(format!("{err:#}")),
        }
    }

    pub fn begin_fade(&mut self, now: Instant) {
        if self.handle.is_some() && !self.fade.is_running() {
            self.fade.restart(now);
        }
    }

    pub fn tick(&mut self, now: Instant, adapter: &mut dyn StreamAdapter) -> Option<AnthemEvent> {
        for _ in 0..self.fade.poll(now) {
            if self.volume > FADE_STEP {
                self.volume = (self.volume - FADE_STEP).max(0.0);
                if let Some(handle) = self.handle {
                    if let Err(err) = adapter.set_volume(handle, self.volume) {
                        log::debug!("anthem volume step not applied: {err:#}");
                    }
                }
                continue;
            }
            self.fade.cancel();
            self.volume = 1.0;
            if let Some(handle) = self.handle.take() {
                adapter.detach(handle);
            }
            return Some(AnthemEvent::FadedOut);
        }
        None
    }

    pub fn stop(&mut self, adapter: &mut dyn StreamAdapter) {
        self.fade.cancel();
        self.volume = 1.0;
        if let Some(handle) = self.handle.take() {
            adapter.detach(handle);
        }
    }
}
