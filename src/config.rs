use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DATA_DIR: &str = "walkers_terminal";
const PREFS_FILE: &str = "prefs.sqlite";
const LOG_FILE: &str = "walkers_terminal.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tick_rate: Duration,
    pub welcome_delay: Duration,
    pub welcome_duration: Duration,
    pub welcome_grace: Duration,
    pub counter_url: Option<String>,
    pub counter_poll: Duration,
    pub player_cmd: String,
    pub prefs_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub skip_loader: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            welcome_delay: Duration::from_millis(1500),
            welcome_duration: Duration::from_millis(8000),
            welcome_grace: Duration::from_secs(2 * 60 * 60),
            counter_url: None,
            counter_poll: Duration::from_secs(30),
            player_cmd: "mpv".to_string(),
            prefs_path: None,
            log_path: None,
            skip_loader: false,
        }
    }
}

const MAX_WELCOME_DELAY_MS: u64 = 10 * 60 * 1000;
const MAX_WELCOME_DURATION_MS: u64 = 10 * 60 * 1000;
const MAX_GRACE_MINS: u64 = 7 * 24 * 60;
const MAX_COUNTER_POLL_SECS: u64 = 60 * 60;

impl AppConfig {
    /// Reads `WALKERS_*` variables; call after `.env` files are loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Numeric values are clamped to
    /// sane ranges so no later timer arithmetic can overflow.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str| lookup(key).and_then(|val| val.trim().parse::<u64>().ok());
        let text = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        let tick_ms = number("WALKERS_TICK_MS").unwrap_or(250).clamp(16, 1000);
        let welcome_delay_ms = number("WALKERS_WELCOME_DELAY_MS")
            .unwrap_or(1500)
            .min(MAX_WELCOME_DELAY_MS);
        let welcome_duration_ms = number("WALKERS_WELCOME_DURATION_MS")
            .unwrap_or(8000)
            .clamp(500, MAX_WELCOME_DURATION_MS);
        let grace_mins = number("WALKERS_WELCOME_GRACE_MINS")
            .unwrap_or(120)
            .min(MAX_GRACE_MINS);
        let counter_poll = number("WALKERS_COUNTER_POLL_SECS")
            .unwrap_or(30)
            .clamp(5, MAX_COUNTER_POLL_SECS);

        let counter_url = lookup("WALKERS_COUNTER_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|raw| !raw.is_empty());
        let player_cmd = text("WALKERS_PLAYER_CMD").unwrap_or(defaults.player_cmd);
        let prefs_path = text("WALKERS_PREFS_PATH")
            .map(PathBuf::from)
            .or_else(|| app_data_dir().map(|dir| dir.join(PREFS_FILE)));
        let log_path = text("WALKERS_LOG_PATH")
            .map(PathBuf::from)
            .or_else(|| app_data_dir().map(|dir| dir.join(LOG_FILE)));
        let skip_loader = lookup("WALKERS_SKIP_LOADER")
            .map(|raw| matches!(raw.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            tick_rate: Duration::from_millis(tick_ms),
            welcome_delay: Duration::from_millis(welcome_delay_ms),
            welcome_duration: Duration::from_millis(welcome_duration_ms),
            welcome_grace: Duration::from_secs(grace_mins * 60),
            counter_url,
            counter_poll: Duration::from_secs(counter_poll),
            player_cmd,
            prefs_path,
            log_path,
            skip_loader,
        }
    }
}

pub fn app_data_dir() -> Option<PathBuf> {
    if let Ok(base) = env::var("XDG_DATA_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(DATA_DIR));
        }
    }
    let home = env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(DATA_DIR),
    )
}
