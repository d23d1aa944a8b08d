use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};

use crate::data::{BACKGROUNDS, COLOR_SCHEMES, PLAYER_LIST, find_background};
use crate::i18n::DEFAULT_LANGUAGE;
use crate::timers::Timeout;

pub const THEME: &str = "app-theme";
pub const BACKGROUND: &str = "app-bg";
pub const UI_OPACITY: &str = "app-ui-opacity";
pub const FAV_PLAYER: &str = "app-fav-player";
pub const LANGUAGE: &str = "app-lang";

pub const ALL_PREFERENCES: [&str; 5] = [THEME, BACKGROUND, UI_OPACITY, FAV_PLAYER, LANGUAGE];

pub const DEFAULT_UI_OPACITY: f32 = 0.4;
pub const RESET_WINDOW: Duration = Duration::from_secs(3);

pub trait PreferenceBackend {
    fn load(&self, name: &str) -> Result<Option<String>>;
    fn save(&mut self, name: &str, value: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let conn = Connection::open(path)
            .with_context(|| format!("open preference db {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            name TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .context("create preference schema")?;
    Ok(())
}

impl PreferenceBackend for SqliteBackend {
    fn load(&self, name: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM preferences WHERE name = ?1",
                params![name],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("read preference {name}"))
    }

    fn save(&mut self, name: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO preferences (name, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(name) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![name, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("write preference {name}"))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.conn
            .execute("DELETE FROM preferences", [])
            .context("clear preferences")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self, name: &str) -> Result<Option<String>> {
        Ok(self.values.get(name).cloned())
    }

    fn save(&mut self, name: &str, value: &str) -> Result<()> {
        self.values.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.values.clear();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Armed,
    Cleared,
}

/// Effective values of every preference, defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    pub theme_index: usize,
    pub background: String,
    pub ui_opacity: f32,
    pub fav_player: String,
    pub language: String,
}

pub struct PreferenceStore {
    backend: Box<dyn PreferenceBackend>,
    persistent: bool,
    reset_window: Timeout,
}

impl PreferenceStore {
    /// Opens the on-disk store, degrading to memory when it is unavailable.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::warn!("no preference path available; settings will not persist");
            return Self::in_memory();
        };
        match SqliteBackend::open(path) {
            Ok(backend) => Self::with_backend(Box::new(backend), true),
            Err(err) => {
                log::warn!("preference store unavailable, using defaults: {err:#}");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryBackend::default()), false)
    }

    pub fn with_backend(backend: Box<dyn PreferenceBackend>, persistent: bool) -> Self {
        Self {
            backend,
            persistent,
            reset_window: Timeout::new(RESET_WINDOW),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn get_raw(&self, name: &str) -> Option<String> {
        match self.backend.load(name) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{err:#}");
                None
            }
        }
    }

    pub fn get<T: FromStr>(&self, name: &str, default: T) -> T {
        self.get_raw(name)
            .and_then(|raw| raw.trim().parse::<T>().ok())
            .unwrap_or(default)
    }

    pub fn set(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        if let Err(err) = self.backend.save(name, &value) {
            log::warn!("preference store failed, continuing in memory: {err:#}");
            self.degrade();
            let _ = self.backend.save(name, &value);
        }
    }

    fn degrade(&mut self) {
        self.backend = Box::new(MemoryBackend::default());
        self.persistent = false;
    }

    pub fn theme_index(&self) -> usize {
        let idx = self.get(THEME, 0usize);
        if idx < COLOR_SCHEMES.len() { idx } else { 0 }
    }

    pub fn set_theme_index(&mut self, idx: usize) {
        self.set(THEME, idx.min(COLOR_SCHEMES.len() - 1));
    }

    pub fn background(&self) -> String {
        self.get_raw(BACKGROUND)
            .filter(|id| find_background(id).is_some())
            .unwrap_or_else(|| BACKGROUNDS[0].id.to_string())
    }

    pub fn set_background(&mut self, id: &str) {
        self.set(BACKGROUND, id);
    }

    pub fn ui_opacity(&self) -> f32 {
        let value = self.get(UI_OPACITY, DEFAULT_UI_OPACITY);
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            DEFAULT_UI_OPACITY
        }
    }

    pub fn set_ui_opacity(&mut self, value: f32) {
        let value = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            DEFAULT_UI_OPACITY
        };
        self.set(UI_OPACITY, format!("{value:.2}"));
    }

    pub fn fav_player(&self) -> String {
        self.get_raw(FAV_PLAYER)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| PLAYER_LIST[1].to_string())
    }

    pub fn set_fav_player(&mut self, name: &str) {
        self.set(FAV_PLAYER, name);
    }

    /// The persisted language code, if the user ever chose one.
    pub fn stored_language(&self) -> Option<String> {
        self.get_raw(LANGUAGE).filter(|code| !code.trim().is_empty())
    }

    pub fn language(&self) -> String {
        self.stored_language()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    pub fn set_language(&mut self, code: &str) {
        self.set(LANGUAGE, code);
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            theme_index: self.theme_index(),
            background: self.background(),
            ui_opacity: self.ui_opacity(),
            fav_player: self.fav_player(),
            language: self.language(),
        }
    }

    /// Two-step reset: the first call arms a confirmation window, a second
    /// call inside it wipes every preference.
    pub fn reset_all(&mut self, now: Instant) -> ResetOutcome {
        if self.reset_window.is_waiting(now) {
            self.reset_window.cancel();
            if let Err(err) = self.backend.clear() {
                log::warn!("preference reset failed, continuing in memory: {err:#}");
                self.degrade();
            }
            return ResetOutcome::Cleared;
        }
        self.reset_window.arm(now);
        ResetOutcome::Armed
    }

    pub fn reset_pending(&self, now: Instant) -> bool {
        self.reset_window.is_waiting(now)
    }
}
