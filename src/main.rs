use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use walkers_terminal::config::AppConfig;
use walkers_terminal::counter;
use walkers_terminal::logging;
use walkers_terminal::playback::ExternalPlayer;
use walkers_terminal::prefs::PreferenceStore;
use walkers_terminal::router::Route;
use walkers_terminal::state::{AppState, Delta, Modal, apply_delta};
use walkers_terminal::ui;

struct App {
    state: AppState,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    fn new(config: &AppConfig, start: &str) -> Self {
        let prefs = PreferenceStore::open(config.prefs_path.as_deref());
        let player = ExternalPlayer::new(config.player_cmd.clone());
        Self {
            state: AppState::new(
                config,
                prefs,
                Box::new(player),
                start,
                Instant::now(),
                Utc::now(),
            ),
            should_quit: false,
            tick_rate: config.tick_rate,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        if !self.state.loader.is_done() {
            return;
        }
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_overlay = false;
            }
            return;
        }
        if let Some(modal) = self.state.modal {
            self.on_modal_key(modal, key, now);
            return;
        }
        if self.state.menu_open {
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.state.menu_next(),
                KeyCode::Char('k') | KeyCode::Up => self.state.menu_prev(),
                KeyCode::Enter => self.state.menu_activate(now),
                KeyCode::Char('m') | KeyCode::Esc => self.state.menu_open = false,
                _ => {}
            }
            return;
        }
        if self.state.route() == Route::Watch && self.on_watch_key(key, now) {
            return;
        }

        match key.code {
            KeyCode::Char('1') => self.state.go_to(Route::Home, now),
            KeyCode::Char('2') => self.state.go_to(Route::Watch, now),
            KeyCode::Char('3') => self.state.go_to(Route::Squad, now),
            KeyCode::Char('4') => self.state.go_to(Route::Backup, now),
            KeyCode::Char('5') => self.state.go_to(Route::Bracket, now),
            KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Char('s') => self.state.open_modal(Modal::Settings),
            KeyCode::Char('a') => self.state.toggle_anthem(),
            KeyCode::Char('n') => {
                self.state.dismiss_notification(now);
            }
            KeyCode::Char('p') if self.state.route() == Route::Backup => {
                self.state.play_highlight(now)
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(now),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(now),
            KeyCode::Char('h') | KeyCode::Left => self.state.step_left(now),
            KeyCode::Char('l') | KeyCode::Right => self.state.step_right(now),
            KeyCode::Enter => self.state.activate(now),
            KeyCode::Backspace => {
                self.state.back(now);
            }
            KeyCode::Esc => {
                if !self.state.close_overlay() && self.state.route() != Route::Home {
                    self.state.go_to(Route::Home, now);
                }
            }
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => {}
        }
    }

    /// Transport keys on the player page; returns false for keys it leaves alone.
    fn on_watch_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char(' ') => self.state.toggle_play(now),
            KeyCode::Char('x') => self.state.toggle_mute(now),
            KeyCode::Char('f') => self.state.toggle_fullscreen(now),
            KeyCode::Char('z') => self.state.toggle_zoom(now),
            _ => return false,
        }
        true
    }

    fn on_modal_key(&mut self, modal: Modal, key: KeyEvent, now: Instant) {
        if modal != Modal::Settings {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('s')) {
                self.state.close_modal();
            }
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.settings_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.settings_prev(),
            KeyCode::Char('h') | KeyCode::Left => self.state.settings_adjust(-1, now),
            KeyCode::Char('l') | KeyCode::Right => self.state.settings_adjust(1, now),
            KeyCode::Enter => self.state.settings_activate(now),
            KeyCode::Esc | KeyCode::Char('s') => self.state.close_modal(),
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        if let Err(err) = logging::init_file_logger(path) {
            eprintln!("warning: file logging disabled: {err:#}");
        }
    }
    log::info!("starting walkers_terminal");

    let start = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    counter::spawn_counter(tx, config.counter_url.clone(), config.counter_poll);

    let mut app = App::new(&config, &start);
    let res = run_app(&mut terminal, &mut app, rx);
    app.state.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("terminal loop failed: {err}");
        eprintln!("error: {err}");
    }
    log::info!("walkers_terminal stopped");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = app.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui::draw(f, &app.state, Instant::now()))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.state.tick(Instant::now(), Utc::now());
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
