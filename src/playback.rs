use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{self, Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::mpv::MpvIpc;
use crate::timers::{Interval, Timeout};

const LINK_DELAY: Duration = Duration::from_millis(1200);
const CONTROLS_HIDE: Duration = Duration::from_secs(3);
const SYNC_PERIOD: Duration = Duration::from_secs(1);
pub const SEEK_STEP_SECS: f64 = 10.0;
pub const VOLUME_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Hls,
    YouTube,
    Progressive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub url: String,
    pub kind: SourceKind,
}

impl SourceDescriptor {
    pub fn classify(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        let kind = if lower.contains(".m3u8") || lower.contains(".ism") {
            SourceKind::Hls
        } else if lower.contains("youtube.com") || lower.contains("youtu.be") {
            SourceKind::YouTube
        } else {
            SourceKind::Progressive
        };
        Self {
            url: url.to_string(),
            kind,
        }
    }

    /// Embedded players own their controls; ours stay inert for them.
    pub fn has_transport_controls(&self) -> bool {
        self.kind != SourceKind::YouTube
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackHandle(pub u64);

/// What the player reports about the attached stream, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerProgress {
    pub position: Option<f64>,
    pub duration: Option<f64>,
}

/// Seam between the portal and whatever actually renders media.
pub trait StreamAdapter {
    fn attach(&mut self, surface: Surface, source: &SourceDescriptor) -> Result<PlaybackHandle>;
    fn detach(&mut self, handle: PlaybackHandle);
    fn set_paused(&mut self, handle: PlaybackHandle, paused: bool) -> Result<()>;
    fn seek(&mut self, handle: PlaybackHandle, secs: f64) -> Result<()>;
    /// `volume` in `[0, 1]`.
    fn set_volume(&mut self, handle: PlaybackHandle, volume: f32) -> Result<()>;
    fn set_muted(&mut self, handle: PlaybackHandle, muted: bool) -> Result<()>;
    fn set_fullscreen(&mut self, handle: PlaybackHandle, fullscreen: bool) -> Result<()>;
    /// Zoomed means the picture fills the surface, cropping the edges.
    fn set_zoomed(&mut self, handle: PlaybackHandle, zoomed: bool) -> Result<()>;
    fn progress(&mut self, handle: PlaybackHandle) -> Result<PlayerProgress>;
}

struct PlayerProcess {
    child: Child,
    control: Option<MpvIpc>,
}

/// Plays streams in an external media player process (mpv by default).
/// Transport commands reach mpv over its JSON IPC socket; other players
/// can only be started and stopped.
pub struct ExternalPlayer {
    command: String,
    processes: HashMap<u64, PlayerProcess>,
    next_id: u64,
}

impl ExternalPlayer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            processes: HashMap::new(),
            next_id: 1,
        }
    }

    fn build_command(
        &self,
        surface: Surface,
        source: &SourceDescriptor,
        socket: &Path,
    ) -> Result<(Command, bool)> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .context("player command is empty")?;
        let mut cmd = Command::new(program);
        cmd.args(parts);
        let is_mpv = program.rsplit('/').next() == Some("mpv");
        if is_mpv {
            cmd.arg("--really-quiet");
            cmd.arg(format!("--input-ipc-server={}", socket.display()));
            if surface == Surface::Audio {
                cmd.arg("--no-video");
            }
        }
        cmd.arg(&source.url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Ok((cmd, is_mpv))
    }

    fn socket_path(id: u64) -> PathBuf {
        env::temp_dir().join(format!("walkers-mpv-{}-{id}.sock", process::id()))
    }

    fn control(&mut self, handle: PlaybackHandle) -> Result<&mut MpvIpc> {
        let command = &self.command;
        let process = self
            .processes
            .get_mut(&handle.0)
            .context("stream is not attached")?;
        process
            .control
            .as_mut()
            .with_context(|| format!("`{command}` has no control channel"))
    }

    fn stop(mut process: PlayerProcess) {
        let _ = process.child.kill();
        let _ = process.child.wait();
        if let Some(control) = process.control {
            let _ = fs::remove_file(control.socket_path());
        }
    }
}

impl StreamAdapter for ExternalPlayer {
    fn attach(&mut self, surface: Surface, source: &SourceDescriptor) -> Result<PlaybackHandle> {
        let id = self.next_id;
        let socket = Self::socket_path(id);
        let (mut cmd, is_mpv) = self.build_command(surface, source, &socket)?;
        let child = cmd
            .spawn()
            .with_context(|| format!("failed to launch `{}`", self.command))?;
        self.next_id += 1;
        let control = is_mpv.then(|| MpvIpc::new(socket));
        self.processes.insert(id, PlayerProcess { child, control });
        Ok(PlaybackHandle(id))
    }

    fn detach(&mut self, handle: PlaybackHandle) {
        if let Some(process) = self.processes.remove(&handle.0) {
            Self::stop(process);
        }
    }

    fn set_paused(&mut self, handle: PlaybackHandle, paused: bool) -> Result<()> {
        self.control(handle)?.set_property("pause", Value::from(paused))
    }

    fn seek(&mut self, handle: PlaybackHandle, secs: f64) -> Result<()> {
        self.control(handle)?.seek_absolute(secs)
    }

    fn set_volume(&mut self, handle: PlaybackHandle, volume: f32) -> Result<()> {
        let percent = (f64::from(volume.clamp(0.0, 1.0)) * 100.0).round();
        self.control(handle)?.set_property("volume", Value::from(percent))
    }

    fn set_muted(&mut self, handle: PlaybackHandle, muted: bool) -> Result<()> {
        self.control(handle)?.set_property("mute", Value::from(muted))
    }

    fn set_fullscreen(&mut self, handle: PlaybackHandle, fullscreen: bool) -> Result<()> {
        self.control(handle)?.set_property("fullscreen", Value::from(fullscreen))
    }

    fn set_zoomed(&mut self, handle: PlaybackHandle, zoomed: bool) -> Result<()> {
        let panscan = if zoomed { 1.0 } else { 0.0 };
        self.control(handle)?.set_property("panscan", Value::from(panscan))
    }

    fn progress(&mut self, handle: PlaybackHandle) -> Result<PlayerProgress> {
        let control = self.control(handle)?;
        Ok(PlayerProgress {
            position: control.get_number("time-pos")?,
            duration: control.get_number("duration")?,
        })
    }
}

impl Drop for ExternalPlayer {
    fn drop(&mut self) {
        for (_, process) in self.processes.drain() {
            Self::stop(process);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Connecting,
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Started,
    AttachFailed(String),
}

/// Transport state for the watch page. The stream attaches after a short
/// "establishing link" phase; a failed attach leaves it paused, no retry.
/// Every control is sent to the player first and only reflected here once
/// the player accepted it.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    source: Option<SourceDescriptor>,
    handle: Option<PlaybackHandle>,
    link: Timeout,
    sync: Interval,
    settings_pending: bool,
    playing: bool,
    volume: f32,
    muted: bool,
    position: f64,
    duration: Option<f64>,
    last_tick: Option<Instant>,
    fullscreen: bool,
    zoomed: bool,
    controls_visible: bool,
    controls_hide: Timeout,
    last_error: Option<String>,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self {
            source: None,
            handle: None,
            link: Timeout::new(LINK_DELAY),
            sync: Interval::new(SYNC_PERIOD),
            settings_pending: false,
            playing: false,
            volume: 1.0,
            muted: false,
            position: 0.0,
            duration: None,
            last_tick: None,
            fullscreen: false,
            zoomed: false,
            controls_visible: true,
            controls_hide: Timeout::new(CONTROLS_HIDE),
            last_error: None,
        }
    }

    /// Switch to `source`, tearing down any attached stream first.
    pub fn open(
        &mut self,
        source: Option<SourceDescriptor>,
        adapter: &mut dyn StreamAdapter,
        now: Instant,
    ) {
        self.close(adapter);
        self.source = source;
        if self.source.is_some() {
            self.link.arm(now);
        }
    }

    pub fn close(&mut self, adapter: &mut dyn StreamAdapter) {
        if let Some(handle) = self.handle.take() {
            adapter.detach(handle);
        }
        self.link.cancel();
        self.sync.cancel();
        self.controls_hide.cancel();
        self.settings_pending = false;
        self.source = None;
        self.playing = false;
        self.position = 0.0;
        self.duration = None;
        self.last_tick = None;
        self.controls_visible = true;
        self.last_error = None;
    }

    pub fn tick(&mut self, now: Instant, adapter: &mut dyn StreamAdapter) -> Option<PlaybackEvent> {
        if self.playing {
            if let Some(last) = self.last_tick {
                self.position += now.saturating_duration_since(last).as_secs_f64();
                if let Some(duration) = self.duration {
                    self.position = self.position.min(duration);
                }
            }
        }
        self.last_tick = Some(now);

        if self.controls_hide.fire(now) && self.playing {
            self.controls_visible = false;
        }

        if self.sync.poll(now) > 0 {
            self.sync_with_player(adapter);
        }

        if !self.link.fire(now) {
            return None;
        }
        let source = self.source.as_ref()?;
        match adapter.attach(Surface::Video, source) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.playing = true;
                self.settings_pending = true;
                self.sync.restart(now);
                self.controls_hide.arm(now);
                Some(PlaybackEvent::Started)
            }
            Err(err) => {
                let msg = format!("{err:#}");
                self.playing = false;
                self.last_error = Some(msg.clone());
                Some(PlaybackEvent::AttachFailed(msg))
            }
        }
    }

    /// Pushes carried-over settings to a fresh player, then reads back
    /// position and duration. The player may not be listening yet; the next
    /// sync tries again.
    fn sync_with_player(&mut self, adapter: &mut dyn StreamAdapter) {
        let Some(handle) = self.handle else {
            return;
        };
        if self.settings_pending {
            match self.apply_settings(handle, adapter) {
                Ok(()) => self.settings_pending = false,
                Err(err) => log::debug!("player settings not applied yet: {err:#}"),
            }
        }
        match adapter.progress(handle) {
            Ok(progress) => {
                if progress.duration.is_some() {
                    self.set_duration(progress.duration);
                }
                if let Some(position) = progress.position.filter(|p| p.is_finite()) {
                    self.position = match self.duration {
                        Some(duration) => position.clamp(0.0, duration),
                        None => position.max(0.0),
                    };
                }
            }
            Err(err) => log::debug!("player progress unavailable: {err:#}"),
        }
    }

    fn apply_settings(&self, handle: PlaybackHandle, adapter: &mut dyn StreamAdapter) -> Result<()> {
        if self.fullscreen {
            adapter.set_fullscreen(handle, true)?;
        }
        if self.zoomed {
            adapter.set_zoomed(handle, true)?;
        }
        if self.controls_enabled() {
            if self.volume < 1.0 {
                adapter.set_volume(handle, self.volume)?;
            }
            if self.muted {
                adapter.set_muted(handle, true)?;
            }
        }
        Ok(())
    }

    /// The attached handle, when this source takes transport commands.
    fn transport(&self) -> Option<PlaybackHandle> {
        let enabled = self
            .source
            .as_ref()
            .is_some_and(SourceDescriptor::has_transport_controls);
        self.handle.filter(|_| enabled)
    }

    fn controls_enabled(&self) -> bool {
        self.transport().is_some()
    }

    /// Any input brings the controls back and restarts the hide countdown.
    pub fn touch(&mut self, now: Instant) {
        self.controls_visible = true;
        self.controls_hide.arm(now);
    }

    pub fn toggle_play(&mut self, now: Instant, adapter: &mut dyn StreamAdapter) -> Result<()> {
        self.touch(now);
        let Some(handle) = self.transport() else {
            return Ok(());
        };
        adapter.set_paused(handle, self.playing)?;
        self.playing = !self.playing;
        Ok(())
    }

    pub fn toggle_mute(&mut self, now: Instant, adapter: &mut dyn StreamAdapter) -> Result<()> {
        self.touch(now);
        let Some(handle) = self.transport() else {
            return Ok(());
        };
        adapter.set_muted(handle, !self.muted)?;
        self.muted = !self.muted;
        Ok(())
    }

    pub fn set_volume(
        &mut self,
        value: f32,
        now: Instant,
        adapter: &mut dyn StreamAdapter,
    ) -> Result<()> {
        self.touch(now);
        let Some(handle) = self.transport() else {
            return Ok(());
        };
        let value = if value.is_finite() { value.clamp(0.0, 1.0) } else { 1.0 };
        adapter.set_volume(handle, value)?;
        self.volume = value;
        let muted = value == 0.0;
        adapter.set_muted(handle, muted)?;
        self.muted = muted;
        Ok(())
    }

    pub fn nudge_volume(
        &mut self,
        delta: f32,
        now: Instant,
        adapter: &mut dyn StreamAdapter,
    ) -> Result<()> {
        self.set_volume(self.volume + delta, now, adapter)
    }

    /// Clamped to `[0, duration]`. While the duration is unknown (live
    /// streams, or the player has not reported it yet) only backward seeks
    /// are accepted.
    pub fn seek_to(&mut self, secs: f64, now: Instant, adapter: &mut dyn StreamAdapter) -> Result<()> {
        self.touch(now);
        let Some(handle) = self.transport() else {
            return Ok(());
        };
        let upper = self.duration.unwrap_or(self.position);
        let target = if secs.is_finite() { secs.clamp(0.0, upper) } else { 0.0 };
        adapter.seek(handle, target)?;
        self.position = target;
        Ok(())
    }

    pub fn seek_by(&mut self, delta: f64, now: Instant, adapter: &mut dyn StreamAdapter) -> Result<()> {
        self.seek_to(self.position + delta, now, adapter)
    }

    pub fn set_duration(&mut self, secs: Option<f64>) {
        self.duration = secs.filter(|d| d.is_finite() && *d > 0.0);
        if let Some(duration) = self.duration {
            self.position = self.position.min(duration);
        }
    }

    pub fn toggle_fullscreen(
        &mut self,
        now: Instant,
        adapter: &mut dyn StreamAdapter,
    ) -> Result<()> {
        self.touch(now);
        if let Some(handle) = self.handle {
            adapter.set_fullscreen(handle, !self.fullscreen)?;
        }
        self.fullscreen = !self.fullscreen;
        Ok(())
    }

    pub fn toggle_zoom(&mut self, now: Instant, adapter: &mut dyn StreamAdapter) -> Result<()> {
        self.touch(now);
        if let Some(handle) = self.handle {
            adapter.set_zoomed(handle, !self.zoomed)?;
        }
        self.zoomed = !self.zoomed;
        Ok(())
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.source.is_none() {
            PlaybackStatus::Idle
        } else if self.link.is_pending() {
            PlaybackStatus::Connecting
        } else if self.playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Paused
        }
    }

    pub fn source(&self) -> Option<&SourceDescriptor> {
        self.source.as_ref()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

pub fn format_clock(secs: f64) -> String {
    let total = if secs.is_finite() { secs.max(0.0) as u64 } else { 0 };
    let (h, m, s) = (total / 3600, (total / 60) % 60, total % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
