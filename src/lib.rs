pub mod anthem;
pub mod carousel;
pub mod config;
pub mod counter;
pub mod data;
pub mod i18n;
pub mod loader;
pub mod logging;
pub mod mpv;
pub mod notify;
pub mod playback;
pub mod prefs;
pub mod router;
pub mod state;
pub mod theme;
pub mod timers;
pub mod ui;
pub mod welcome;
