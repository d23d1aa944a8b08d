use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::anthem::{AnthemEvent, AnthemPlayer};
use crate::carousel::{Carousel, GALLERY_PERIOD, GALLERY_RESUME, SIDEBAR_PERIOD};
use crate::config::AppConfig;
use crate::data::{
    ANTHEM_URL, BACKGROUNDS, COLOR_SCHEMES, Fixture, HIGHLIGHTS, HighlightMatch,
    PERFORMANCE_STATS, PLAYER_LIST, SQUAD, fixtures,
};
use crate::i18n::{LANGUAGES, Language, Translations, picker_languages, resolve_language};
use crate::loader::{DEFAULT_LINK_SPEED_MBPS, InitialLoader};
use crate::logging;
use crate::notify::NotificationQueue;
use crate::playback::{
    PlaybackEvent, PlaybackSession, SEEK_STEP_SECS, SourceDescriptor, StreamAdapter, VOLUME_STEP,
};
use crate::prefs::{PreferenceStore, ResetOutcome};
use crate::router::{History, Location, Route};
use crate::theme::Palette;
use crate::timers::Interval;
use crate::welcome::WelcomeScheduler;

const MAX_LOGS: usize = 200;
const CLOCK_PERIOD: Duration = Duration::from_secs(1);
pub const OPACITY_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Settings,
    AboutUs,
    AboutSite,
    Contacts,
    Privacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Opacity,
    ColorScheme,
    Background,
    FavPlayer,
    Language,
    Reset,
}

impl SettingsField {
    pub const ALL: [SettingsField; 6] = [
        SettingsField::Opacity,
        SettingsField::ColorScheme,
        SettingsField::Background,
        SettingsField::FavPlayer,
        SettingsField::Language,
        SettingsField::Reset,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    Squad,
    Highlights,
    Bracket,
    Settings,
    Contacts,
    AboutUs,
    AboutSite,
    Privacy,
}

pub const MENU_ITEMS: [MenuItem; 9] = [
    MenuItem::Home,
    MenuItem::Squad,
    MenuItem::Highlights,
    MenuItem::Bracket,
    MenuItem::Settings,
    MenuItem::Contacts,
    MenuItem::AboutUs,
    MenuItem::AboutSite,
    MenuItem::Privacy,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerCount {
    pub count: usize,
    pub demo: bool,
}

#[derive(Debug, Clone)]
pub enum Delta {
    CounterUpdate { count: usize, demo: bool },
    Log(String),
}

/// Languages offered in Settings: every standard language, no special channels.
pub fn settings_languages() -> Vec<&'static Language> {
    LANGUAGES.iter().filter(|lang| !lang.is_special).collect()
}

pub struct AppState {
    pub fixtures: Vec<Fixture>,
    pub history: History,
    pub prefs: PreferenceStore,
    pub language: &'static Language,
    pub palette: Palette,
    pub modal: Option<Modal>,
    pub menu_open: bool,
    pub menu_selected: usize,
    pub help_overlay: bool,
    pub settings_field: SettingsField,
    pub notifications: NotificationQueue,
    pub welcome: WelcomeScheduler,
    clock: Interval,
    pub wall_clock: DateTime<Utc>,
    pub loader: InitialLoader,
    skip_loader: bool,
    pub sidebar: Carousel,
    pub gallery: Carousel,
    pub anthem: AnthemPlayer,
    pub playback: PlaybackSession,
    adapter: Box<dyn StreamAdapter>,
    pub picker_selected: usize,
    pub squad_selected: usize,
    pub squad_detail: bool,
    pub highlight_selected: usize,
    pub overview_open: bool,
    pub viewer: Option<ViewerCount>,
    pub logs: VecDeque<String>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        prefs: PreferenceStore,
        adapter: Box<dyn StreamAdapter>,
        start: &str,
        now: Instant,
        wall_now: DateTime<Utc>,
    ) -> Self {
        let language = resolve_language(None, prefs.stored_language().as_deref());
        let palette = Palette::from_prefs(prefs.theme_index(), &prefs.background(), prefs.ui_opacity());
        let loader = if config.skip_loader {
            InitialLoader::finished()
        } else {
            InitialLoader::new(DEFAULT_LINK_SPEED_MBPS, now)
        };
        let mut welcome = WelcomeScheduler::new(
            config.welcome_delay,
            config.welcome_grace,
            config.welcome_duration,
        );
        welcome.schedule(language.code, now);
        let persistent = prefs.is_persistent();

        let mut state = Self {
            fixtures: fixtures(),
            history: History::new(Location::new(Route::Home)),
            prefs,
            language,
            palette,
            modal: None,
            menu_open: false,
            menu_selected: 0,
            help_overlay: false,
            settings_field: SettingsField::Opacity,
            notifications: NotificationQueue::new(),
            welcome,
            clock: Interval::started(CLOCK_PERIOD, now),
            wall_clock: wall_now,
            loader,
            skip_loader: config.skip_loader,
            sidebar: Carousel::new(
                PERFORMANCE_STATS.len() + 1,
                SIDEBAR_PERIOD,
                Duration::ZERO,
                now,
            ),
            gallery: Carousel::new(0, GALLERY_PERIOD, GALLERY_RESUME, now),
            anthem: AnthemPlayer::new(ANTHEM_URL),
            playback: PlaybackSession::new(),
            adapter,
            picker_selected: 0,
            squad_selected: 0,
            squad_detail: false,
            highlight_selected: 0,
            overview_open: false,
            viewer: None,
            logs: VecDeque::new(),
        };

        if !persistent {
            state.push_log("[WARN] Preferences are not persisted this session");
        }
        state.enter(start, now, true);
        state
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn route(&self) -> Route {
        self.history.current().route
    }

    pub fn t(&self) -> &'static Translations {
        self.language.translations
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        logging::forward_console_line(&msg);
        self.logs.push_back(msg);
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn navigate(&mut self, raw: &str, now: Instant) {
        self.enter(raw, now, false);
    }

    fn enter(&mut self, raw: &str, now: Instant, replace: bool) {
        let previous = self.history.current().clone();
        let (location, redirected) = Location::parse(raw);
        if redirected {
            self.push_log(format!("[WARN] Unknown path {raw}, redirecting to /"));
        }
        if replace {
            self.history.replace(location);
        } else {
            self.history.push(location);
        }
        self.inject_language();
        self.location_changed(&previous, now);
    }

    pub fn back(&mut self, now: Instant) -> bool {
        let previous = self.history.current().clone();
        if !self.history.back() {
            return false;
        }
        self.inject_language();
        self.location_changed(&previous, now);
        true
    }

    pub fn forward(&mut self, now: Instant) -> bool {
        let previous = self.history.current().clone();
        if !self.history.forward() {
            return false;
        }
        self.inject_language();
        self.location_changed(&previous, now);
        true
    }

    /// Rewrites the current entry in place when it has no `lang` parameter.
    fn inject_language(&mut self) {
        if self.history.current().has_param("lang") {
            return;
        }
        let stored = self.prefs.stored_language();
        let code = resolve_language(None, stored.as_deref()).code;
        let location = self.history.current().clone().with_param("lang", code);
        self.history.replace(location);
    }

    fn location_changed(&mut self, previous: &Location, now: Instant) {
        let current = self.history.current().clone();
        let stored = self.prefs.stored_language();
        let language = resolve_language(current.param("lang"), stored.as_deref());
        let language_changed = language.code != self.language.code;
        if language_changed {
            self.language = language;
            self.welcome.language_changed(language.code, now);
            self.push_log(format!("[INFO] Language set to {}", language.name));
        }

        self.menu_open = false;
        let route_changed = previous.route != current.route;

        if route_changed && previous.route == Route::Backup {
            self.gallery.stop();
            self.overview_open = false;
        }
        if route_changed && previous.route == Route::Squad {
            self.squad_detail = false;
        }

        match current.route {
            Route::Watch => {
                if route_changed {
                    self.anthem.begin_fade(now);
                }
                let source = self.watch_source();
                let same_source = self.playback.source().map(|s| s.url.as_str())
                    == source.as_ref().map(|s| s.url.as_str());
                if route_changed || language_changed || !same_source {
                    self.playback.open(source, self.adapter.as_mut(), now);
                }
            }
            _ if previous.route == Route::Watch => {
                self.playback.close(self.adapter.as_mut());
            }
            _ => {}
        }

        if route_changed && current.route == Route::Backup {
            self.reset_gallery(now);
        }
    }

    /// Explicit `url` parameter first, otherwise the language's own channel.
    pub fn watch_source(&self) -> Option<SourceDescriptor> {
        self.location()
            .param("url")
            .filter(|url| !url.trim().is_empty())
            .or(self.language.stream_url)
            .map(SourceDescriptor::classify)
    }

    pub fn set_language(&mut self, code: &str, now: Instant) {
        self.prefs.set_language(code);
        let previous = self.history.current().clone();
        let location = previous.clone().with_param("lang", code);
        self.history.replace(location);
        self.location_changed(&previous, now);
    }

    pub fn refresh_palette(&mut self) {
        self.palette = Palette::from_prefs(
            self.prefs.theme_index(),
            &self.prefs.background(),
            self.prefs.ui_opacity(),
        );
    }

    pub fn request_reset(&mut self, now: Instant) -> ResetOutcome {
        let outcome = self.prefs.reset_all(now);
        match outcome {
            ResetOutcome::Armed => self.push_log("[INFO] Press again to clear all settings"),
            ResetOutcome::Cleared => {
                self.push_log("[INFO] Settings cleared");
                self.reload(now);
            }
        }
        outcome
    }

    /// Fresh start after a reset, like reloading the page: preferences are
    /// re-read, overlays closed, and the current location entered again as
    /// the only history entry.
    fn reload(&mut self, now: Instant) {
        let url = self.location().to_url();
        self.playback.close(self.adapter.as_mut());
        self.anthem.stop(self.adapter.as_mut());
        self.gallery.stop();
        self.notifications.clear();
        self.modal = None;
        self.menu_open = false;
        self.help_overlay = false;
        self.settings_field = SettingsField::Opacity;
        self.picker_selected = 0;
        self.squad_selected = 0;
        self.squad_detail = false;
        self.highlight_selected = 0;
        self.overview_open = false;
        self.refresh_palette();
        self.language = resolve_language(None, self.prefs.stored_language().as_deref());
        self.history = History::new(Location::new(Route::Home));
        self.loader = if self.skip_loader {
            InitialLoader::finished()
        } else {
            InitialLoader::new(DEFAULT_LINK_SPEED_MBPS, now)
        };
        self.enter(&url, now, true);
        self.welcome.schedule(self.language.code, now);
    }

    pub fn tick(&mut self, now: Instant, wall_now: DateTime<Utc>) {
        if !self.loader.is_done() {
            self.loader.tick(now, &mut rand::thread_rng());
        }
        if self.clock.poll(now) > 0 {
            self.wall_clock = wall_now;
        }
        self.notifications.tick(now);
        if self
            .welcome
            .poll(now, wall_now, &self.fixtures, &mut self.notifications)
            .is_some()
        {
            self.push_log("[INFO] Welcome notification shown");
        }
        self.sidebar.tick(now);
        if self.route() == Route::Backup {
            self.gallery.tick(now);
        }
        match self.anthem.tick(now, self.adapter.as_mut()) {
            Some(AnthemEvent::FadedOut) => self.push_log("[INFO] Anthem faded out"),
            Some(_) | None => {}
        }
        match self.playback.tick(now, self.adapter.as_mut()) {
            Some(PlaybackEvent::Started) => self.push_log("[INFO] Stream attached"),
            Some(PlaybackEvent::AttachFailed(err)) => {
                self.push_log(format!("[WARN] Playback failed to start: {err}"))
            }
            None => {}
        }
    }

    pub fn toggle_anthem(&mut self) {
        match self.anthem.toggle(self.adapter.as_mut()) {
            AnthemEvent::Started => self.push_log("[INFO] Anthem playing"),
            AnthemEvent::Stopped => self.push_log("[INFO] Anthem stopped"),
            AnthemEvent::FadedOut => {}
            AnthemEvent::Failed(err) => self.push_log(format!("[WARN] Anthem unavailable: {err}")),
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_selected = 0;
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % MENU_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = (self.menu_selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub fn menu_activate(&mut self, now: Instant) {
        let item = MENU_ITEMS[self.menu_selected % MENU_ITEMS.len()];
        self.menu_open = false;
        match item {
            MenuItem::Home => self.go_to(Route::Home, now),
            MenuItem::Squad => self.go_to(Route::Squad, now),
            MenuItem::Highlights => self.go_to(Route::Backup, now),
            MenuItem::Bracket => self.go_to(Route::Bracket, now),
            MenuItem::Settings => self.open_modal(Modal::Settings),
            MenuItem::Contacts => self.open_modal(Modal::Contacts),
            MenuItem::AboutUs => self.open_modal(Modal::AboutUs),
            MenuItem::AboutSite => self.open_modal(Modal::AboutSite),
            MenuItem::Privacy => self.open_modal(Modal::Privacy),
        }
    }

    /// Route links carry the active language, like the menu entries do.
    pub fn go_to(&mut self, route: Route, now: Instant) {
        let target = Location::new(route).with_param("lang", self.language.code);
        self.navigate(&target.to_url(), now);
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.menu_open = false;
        if modal == Modal::Settings {
            self.settings_field = SettingsField::Opacity;
        }
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Closes the topmost overlay; false when nothing was open.
    pub fn close_overlay(&mut self) -> bool {
        if self.help_overlay {
            self.help_overlay = false;
        } else if self.modal.is_some() {
            self.modal = None;
        } else if self.menu_open {
            self.menu_open = false;
        } else if self.overview_open {
            self.overview_open = false;
        } else if self.squad_detail {
            self.squad_detail = false;
        } else {
            return false;
        }
        true
    }

    pub fn settings_next(&mut self) {
        let idx = (self.settings_field.index() + 1) % SettingsField::ALL.len();
        self.settings_field = SettingsField::ALL[idx];
    }

    pub fn settings_prev(&mut self) {
        let len = SettingsField::ALL.len();
        let idx = (self.settings_field.index() + len - 1) % len;
        self.settings_field = SettingsField::ALL[idx];
    }

    pub fn settings_adjust(&mut self, step: i32, now: Instant) {
        match self.settings_field {
            SettingsField::Opacity => {
                let value = self.prefs.ui_opacity() + OPACITY_STEP * step as f32;
                self.prefs.set_ui_opacity(value);
                self.refresh_palette();
            }
            SettingsField::ColorScheme => {
                let idx = cycle(self.prefs.theme_index(), COLOR_SCHEMES.len(), step);
                self.prefs.set_theme_index(idx);
                self.refresh_palette();
            }
            SettingsField::Background => {
                let current = self.prefs.background();
                let pos = BACKGROUNDS.iter().position(|bg| bg.id == current).unwrap_or(0);
                let idx = cycle(pos, BACKGROUNDS.len(), step);
                self.prefs.set_background(BACKGROUNDS[idx].id);
                self.refresh_palette();
            }
            SettingsField::FavPlayer => {
                let current = self.prefs.fav_player();
                let pos = PLAYER_LIST.iter().position(|p| *p == current).unwrap_or(0);
                let idx = cycle(pos, PLAYER_LIST.len(), step);
                self.prefs.set_fav_player(PLAYER_LIST[idx]);
            }
            SettingsField::Language => {
                let options = settings_languages();
                let pos = options
                    .iter()
                    .position(|l| l.code == self.language.code)
                    .unwrap_or(0);
                let idx = cycle(pos, options.len(), step);
                let code = options[idx].code;
                self.set_language(code, now);
            }
            SettingsField::Reset => {}
        }
    }

    pub fn settings_activate(&mut self, now: Instant) {
        if self.settings_field == SettingsField::Reset {
            self.request_reset(now);
        } else {
            self.settings_adjust(1, now);
        }
    }

    pub fn select_next(&mut self, now: Instant) {
        match self.route() {
            Route::Home => {
                let len = picker_languages().len();
                self.picker_selected = (self.picker_selected + 1) % len.max(1);
            }
            Route::Squad => {
                self.squad_selected = (self.squad_selected + 1).min(SQUAD.len().saturating_sub(1));
            }
            Route::Backup => {
                let next = (self.highlight_selected + 1).min(HIGHLIGHTS.len().saturating_sub(1));
                self.select_highlight(next, now);
            }
            Route::Watch => self.with_player(|session, player| {
                session.nudge_volume(-VOLUME_STEP, now, player)
            }),
            Route::Bracket => {}
        }
    }

    pub fn select_prev(&mut self, now: Instant) {
        match self.route() {
            Route::Home => {
                let len = picker_languages().len().max(1);
                self.picker_selected = (self.picker_selected + len - 1) % len;
            }
            Route::Squad => self.squad_selected = self.squad_selected.saturating_sub(1),
            Route::Backup => {
                let prev = self.highlight_selected.saturating_sub(1);
                self.select_highlight(prev, now);
            }
            Route::Watch => self.with_player(|session, player| {
                session.nudge_volume(VOLUME_STEP, now, player)
            }),
            Route::Bracket => {}
        }
    }

    pub fn step_left(&mut self, now: Instant) {
        match self.route() {
            Route::Backup => self.gallery.prev(now),
            Route::Watch => self.with_player(|session, player| {
                session.seek_by(-SEEK_STEP_SECS, now, player)
            }),
            Route::Home => self.sidebar.prev(now),
            _ => {}
        }
    }

    pub fn step_right(&mut self, now: Instant) {
        match self.route() {
            Route::Backup => self.gallery.next(now),
            Route::Watch => self.with_player(|session, player| {
                session.seek_by(SEEK_STEP_SECS, now, player)
            }),
            Route::Home => self.sidebar.next(now),
            _ => {}
        }
    }

    /// Enter on a page: pick a language, open a player card or the match overview.
    pub fn activate(&mut self, now: Instant) {
        match self.route() {
            Route::Home => {
                let options = picker_languages();
                if let Some(lang) = options.get(self.picker_selected) {
                    let target = Location::new(Route::Watch).with_param("lang", lang.code);
                    self.navigate(&target.to_url(), now);
                }
            }
            Route::Squad => self.squad_detail = !self.squad_detail,
            Route::Backup => self.overview_open = !self.overview_open,
            Route::Watch => self.toggle_play(now),
            Route::Bracket => {}
        }
    }

    /// Runs a transport command against the player; a refused command
    /// leaves the session unchanged and is logged.
    fn with_player(
        &mut self,
        command: impl FnOnce(&mut PlaybackSession, &mut dyn StreamAdapter) -> anyhow::Result<()>,
    ) {
        if let Err(err) = command(&mut self.playback, self.adapter.as_mut()) {
            self.push_log(format!("[WARN] Player control failed: {err:#}"));
        }
    }

    pub fn toggle_play(&mut self, now: Instant) {
        self.with_player(|session, player| session.toggle_play(now, player));
    }

    pub fn toggle_mute(&mut self, now: Instant) {
        self.with_player(|session, player| session.toggle_mute(now, player));
    }

    pub fn toggle_fullscreen(&mut self, now: Instant) {
        self.with_player(|session, player| session.toggle_fullscreen(now, player));
    }

    pub fn toggle_zoom(&mut self, now: Instant) {
        self.with_player(|session, player| session.toggle_zoom(now, player));
    }

    pub fn selected_highlight(&self) -> Option<&'static HighlightMatch> {
        HIGHLIGHTS.get(self.highlight_selected)
    }

    fn select_highlight(&mut self, idx: usize, now: Instant) {
        if idx == self.highlight_selected {
            return;
        }
        self.highlight_selected = idx;
        self.reset_gallery(now);
    }

    fn reset_gallery(&mut self, now: Instant) {
        let len = self.selected_highlight().map_or(0, |m| m.gallery.len());
        self.gallery = Carousel::new(len, GALLERY_PERIOD, GALLERY_RESUME, now);
    }

    pub fn play_highlight(&mut self, now: Instant) {
        let Some(highlight) = self.selected_highlight() else {
            return;
        };
        let target = Location::new(Route::Watch)
            .with_param("lang", self.language.code)
            .with_param("url", highlight.video_url);
        self.overview_open = false;
        self.navigate(&target.to_url(), now);
    }

    pub fn dismiss_notification(&mut self, now: Instant) -> bool {
        self.notifications.dismiss_latest(now)
    }

    /// Stops every owned timer and media process.
    pub fn shutdown(&mut self) {
        self.welcome.cancel();
        self.clock.cancel();
        self.sidebar.stop();
        self.gallery.stop();
        self.anthem.stop(self.adapter.as_mut());
        self.playback.close(self.adapter.as_mut());
    }
}

fn cycle(pos: usize, len: usize, step: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    (pos as i64 + i64::from(step)).rem_euclid(len) as usize
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::CounterUpdate { count, demo } => {
            state.viewer = Some(ViewerCount { count, demo });
        }
        Delta::Log(line) => state.push_log(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_both_directions() {
        assert_eq!(cycle(0, 4, -1), 3);
        assert_eq!(cycle(3, 4, 1), 0);
        assert_eq!(cycle(1, 4, 2), 3);
        assert_eq!(cycle(0, 0, 1), 0);
    }
}
