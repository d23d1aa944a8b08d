use std::time::Instant;

use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

use crate::data::{
    BACKGROUNDS, BRACKET_PATHS, CLUB_NAME, CLUB_SHORT, COLOR_SCHEMES, CONTACT_LINKS, EventKind,
    EventSide, HIGHLIGHTS, HighlightMatch, PERFORMANCE_STATS, SQUAD, bracket_path,
    find_background, standings_sorted,
};
use crate::i18n::{Translations, picker_languages};
use crate::loader::LoaderStage;
use crate::notify::NotificationPhase;
use crate::playback::{PlaybackStatus, SourceKind, format_clock};
use crate::router::Route;
use crate::state::{AppState, MENU_ITEMS, MenuItem, Modal, SettingsField};
use crate::theme::Palette;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.size();
    if !state.loader.is_done() {
        render_loader(frame, area, state);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(header_text(state))
        .style(state.palette.panel())
        .block(Block::default().borders(Borders::BOTTOM).border_style(state.palette.title()));
    frame.render_widget(header, chunks[0]);

    match state.route() {
        Route::Home => render_home(frame, chunks[1], state),
        Route::Watch => render_watch(frame, chunks[1], state),
        Route::Squad => render_squad(frame, chunks[1], state),
        Route::Backup => render_backup(frame, chunks[1], state),
        Route::Bracket => render_bracket(frame, chunks[1], state),
    }

    let footer = Paragraph::new(footer_text(state))
        .style(state.palette.dim())
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if state.menu_open {
        render_menu(frame, chunks[1], state);
    }
    if let Some(modal) = state.modal {
        render_modal(frame, area, state, modal, now);
    }
    render_toasts(frame, area, state, now);
    if state.help_overlay {
        render_help_overlay(frame, area);
    }
}

fn route_title(t: &Translations, route: Route) -> &'static str {
    match route {
        Route::Home => t.home,
        Route::Watch => t.live_arena,
        Route::Squad => t.squad,
        Route::Backup => t.bright_moments,
        Route::Bracket => t.ucl_bracket,
    }
}

fn header_text(state: &AppState) -> String {
    let t = state.t();
    let clock = state.wall_clock.with_timezone(&Local).format("%H:%M:%S");
    let anthem = if state.anthem.is_playing() {
        format!("♫ {} [ON]", t.anthem)
    } else {
        format!("♫ {} [OFF]", t.anthem)
    };
    let viewers = match state.viewer {
        Some(v) if v.demo => format!("● {} online (DEMO)", v.count),
        Some(v) => format!("● {} online", v.count),
        None => "● -- online".to_string(),
    };
    let line1 = format!(
        " ≡  WALKERS MADRID | {} | {clock}",
        route_title(t, state.route()).to_uppercase()
    );
    let line2 = format!(" {viewers} | {anthem}");
    let line3 = format!(
        " ★ {} | {}",
        state.prefs.fav_player(),
        state.language.native_name
    );
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    let keys = match state.route() {
        Route::Home => "↑/↓ Language | Enter Watch | ←/→ Stats | m Menu | s Settings | a Anthem | ? Help | q Quit",
        Route::Watch => {
            "Space Play | ←/→ Seek | ↑/↓ Volume | x Mute | f Fullscreen | z Zoom | Esc Back | ? Help | q Quit"
        }
        Route::Squad => "↑/↓ Player | Enter Card | m Menu | Esc Back | ? Help | q Quit",
        Route::Backup => {
            "↑/↓ Match | Enter Overview | ←/→ Photos | p Play | m Menu | Esc Back | ? Help | q Quit"
        }
        Route::Bracket => "m Menu | Esc Back | ? Help | q Quit",
    };
    format!("{}\n{keys}", state.t().copyright)
}

fn render_loader(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup = centered_rect(50, 30, area);
    let style = match state.loader.stage() {
        LoaderStage::Fading => state.palette.dim(),
        _ => state.palette.title(),
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {CLUB_NAME} "))
                .borders(Borders::ALL),
        )
        .gauge_style(style)
        .percent(u16::from(state.loader.progress().min(100)))
        .label(format!("{}%", state.loader.progress()));
    frame.render_widget(gauge, popup);
}

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.panel())
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.t();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .split(area);

    let schedule = Paragraph::new(schedule_text(state))
        .block(panel(t.match_schedule, &state.palette));
    frame.render_widget(schedule, cols[0]);

    let mut lines = vec![
        Line::styled(t.premium_access.to_uppercase(), state.palette.title()),
        Line::raw(t.ultimate_experience),
        Line::raw(""),
        Line::raw(t.choose_language),
        Line::raw(""),
    ];
    for (idx, lang) in picker_languages().into_iter().enumerate() {
        let label = format!("  {}  ({})", lang.native_name, lang.code.to_uppercase());
        if idx == state.picker_selected {
            lines.push(Line::styled(format!(">{label}"), state.palette.highlight()));
        } else {
            lines.push(Line::raw(format!(" {label}")));
        }
    }
    let picker = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(panel(CLUB_NAME, &state.palette));
    frame.render_widget(picker, cols[1]);

    let stats = Paragraph::new(stats_slide_text(state))
        .block(panel(t.live_performance, &state.palette));
    frame.render_widget(stats, cols[2]);
}

fn schedule_text(state: &AppState) -> String {
    if state.fixtures.is_empty() {
        return "No fixtures".to_string();
    }
    state
        .fixtures
        .iter()
        .map(|f| {
            let kickoff = f.kickoff.with_timezone(&Local).format("%d.%m %H:%M");
            let venue = if f.is_home { "H" } else { "A" };
            format!("{kickoff} {venue} {}\n   {}", f.opponent, f.competition)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn stats_slide_text(state: &AppState) -> String {
    let slide = state.sidebar.index();
    let dots = (0..state.sidebar.len())
        .map(|i| if i == slide { '●' } else { '○' })
        .collect::<String>();
    let body = match PERFORMANCE_STATS.get(slide) {
        Some(stat) => format!(
            "{}\n\nPlayed  {:>3}\nWins    {:>3}\nDraws   {:>3}\nLosses  {:>3}\nGoals   {}:{}\n{}",
            stat.competition.to_uppercase(),
            stat.played,
            stat.wins,
            stat.draws,
            stat.losses,
            stat.goals_for,
            stat.goals_against,
            share_bar(stat.goal_share(), 16)
        ),
        None => standings_sorted()
            .iter()
            .map(|row| {
                format!(
                    "{:>2}. {:<12} {:>2} {:>3}",
                    row.position, row.team, row.played, row.points
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    format!("{body}\n\n{dots}")
}

fn share_bar(share: f64, width: usize) -> String {
    let share = if share.is_finite() { share.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (share * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_watch(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.t();
    let session = &state.playback;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(area);

    let title = if session.is_fullscreen() {
        format!("{} [FULLSCREEN]", t.live_arena)
    } else {
        t.live_arena.to_string()
    };

    let mut lines = vec![Line::styled(t.ultra_hd_stream, state.palette.title())];
    match session.status() {
        PlaybackStatus::Idle => {
            lines.push(Line::raw(t.exclusive_broadcast));
            lines.push(Line::raw(t.broadcast_description));
        }
        PlaybackStatus::Connecting => {
            lines.push(Line::raw(t.establishing_link));
            lines.push(Line::raw(t.connecting_to));
        }
        PlaybackStatus::Playing | PlaybackStatus::Paused => {
            if let Some(source) = session.source() {
                lines.push(Line::raw(format!("{} · {}", source_label(source.kind), source.url)));
            }
            if let Some(err) = session.last_error() {
                lines.push(Line::styled(format!("! {err}"), state.palette.dim()));
            }
            if session.is_zoomed() {
                lines.push(Line::raw("zoom: fill"));
            }
        }
    }
    let screen = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel(&title, &state.palette));
    frame.render_widget(screen, rows[0]);

    if session.controls_visible() {
        frame.render_widget(
            Paragraph::new(controls_text(state)).block(panel("", &state.palette)),
            rows[1],
        );
    }
}

fn source_label(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Hls => "HLS",
        SourceKind::YouTube => "YOUTUBE",
        SourceKind::Progressive => "FILE",
    }
}

fn controls_text(state: &AppState) -> String {
    let session = &state.playback;
    let status = match session.status() {
        PlaybackStatus::Idle => "■ IDLE",
        PlaybackStatus::Connecting => "… LINK",
        PlaybackStatus::Playing => "▶ PLAY",
        PlaybackStatus::Paused => "❚❚ PAUSE",
    };
    let position = match session.duration() {
        Some(duration) => format!("{} / {}", format_clock(session.position()), format_clock(duration)),
        None => format!("{} · LIVE", format_clock(session.position())),
    };
    let volume = if session.is_muted() {
        "MUTED".to_string()
    } else {
        format!("{:>3}%", (session.volume() * 100.0).round() as u32)
    };
    let vol_bar = share_bar(f64::from(session.volume()), 10);
    format!("{status}  {position}\nVOL {vol_bar} {volume}")
}

fn render_squad(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.t();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let inner_height = cols[0].height.saturating_sub(2) as usize;
    let (start, end) = visible_range(state.squad_selected, SQUAD.len(), inner_height.max(1));
    let lines = SQUAD[start..end]
        .iter()
        .enumerate()
        .map(|(offset, player)| {
            let idx = start + offset;
            let text = format!("{:<20} {}", player.name, player.position);
            if idx == state.squad_selected {
                Line::styled(format!("> {text}"), state.palette.highlight())
            } else {
                Line::raw(format!("  {text}"))
            }
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines).block(panel(t.squad, &state.palette)), cols[0]);

    let Some(player) = SQUAD.get(state.squad_selected) else {
        return;
    };
    let mut detail = vec![
        format!("{}: {}", t.position, player.position),
        format!("{}: {}", t.nationality, player.nationality),
    ];
    if state.squad_detail {
        detail.push(String::new());
        detail.push(format!("{}: {}", t.appearances, player.apps));
        match player.clean_sheets {
            Some(clean) => detail.push(format!("{}: {clean}", t.clean_sheets)),
            None => {
                detail.push(format!("{}: {}", t.goals, player.goals));
                detail.push(format!("{}: {}", t.assists, player.assists));
            }
        }
    }
    frame.render_widget(
        Paragraph::new(detail.join("\n")).block(panel(player.name, &state.palette)),
        cols[1],
    );
}

fn render_backup(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.t();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let list = HIGHLIGHTS
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let text = format!("{} {} {}-{}", m.date, m.opponent, m.score.0, m.score.1);
            if idx == state.highlight_selected {
                Line::styled(format!("> {text}"), state.palette.highlight())
            } else {
                Line::raw(format!("  {text}"))
            }
        })
        .collect::<Vec<_>>();
    frame.render_widget(
        Paragraph::new(list).block(panel(t.bright_moments, &state.palette)),
        cols[0],
    );

    let Some(highlight) = state.selected_highlight() else {
        return;
    };
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(4)])
        .split(cols[1]);

    let stats = Paragraph::new(match_stats_text(t, highlight))
        .block(panel(t.match_stats, &state.palette));
    frame.render_widget(stats, right[0]);

    let photo = highlight
        .gallery
        .get(state.gallery.index())
        .copied()
        .unwrap_or("-");
    let paused = if state.gallery.is_paused() { " (paused)" } else { "" };
    let gallery = Paragraph::new(format!(
        "{}/{}{paused}\n{photo}",
        state.gallery.index() + 1,
        highlight.gallery.len()
    ))
    .wrap(Wrap { trim: true })
    .block(panel("Gallery", &state.palette));
    frame.render_widget(gallery, right[1]);

    if state.overview_open {
        render_overview(frame, area, state, highlight);
    }
}

fn match_stats_text(t: &Translations, m: &HighlightMatch) -> String {
    let s = &m.stats;
    let rows = [
        (t.possession, s.possession),
        (t.expected_goals, s.xg),
        (t.shots, s.shots),
        (t.shots_on_target, s.shots_on_target),
        (t.passing, s.passing),
        (t.corners, s.corners),
        (t.fouls, s.fouls),
    ];
    let mut lines = vec![format!(
        "{CLUB_SHORT} {} - {} {}  · {}",
        m.score.0, m.score.1, m.opponent, m.competition
    )];
    for (label, pair) in rows {
        lines.push(stat_row(label, pair));
    }
    lines.join("\n")
}

fn stat_row(label: &str, (club, opponent): (f32, f32)) -> String {
    let total = club + opponent;
    let share = if total > 0.0 { f64::from(club / total) } else { 0.5 };
    format!(
        "{label:<22} {:>5} {} {:<5}",
        trim_number(club),
        share_bar(share, 14),
        trim_number(opponent)
    )
}

fn trim_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn render_overview(frame: &mut Frame, area: Rect, state: &AppState, m: &HighlightMatch) {
    let popup = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup);
    let mut lines = vec![format!(
        "{CLUB_NAME} {} : {} {}",
        m.score.0, m.score.1, m.opponent
    )];
    lines.push(String::new());
    for event in m.events {
        let side = match event.side {
            EventSide::Club => CLUB_SHORT,
            EventSide::Opponent => m.opponent,
        };
        let text = match (event.kind, event.other) {
            (EventKind::Sub, Some(on)) => format!("↑ {on} ↓ {}", event.player),
            (EventKind::Goal, Some(assist)) => format!("{} ({assist})", event.player),
            _ => event.player.to_string(),
        };
        lines.push(format!(
            "{:>6} {} {side}: {text}",
            event.minute,
            event_kind_label(event.kind)
        ));
    }
    let overview = Paragraph::new(lines.join("\n"))
        .wrap(Wrap { trim: false })
        .block(panel(m.competition, &state.palette));
    frame.render_widget(overview, popup);
}

fn event_kind_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Goal => "GOAL",
        EventKind::Sub => "SUB ",
        EventKind::YellowCard => "YC  ",
        EventKind::RedCard => "RC  ",
    }
}

fn render_bracket(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.t();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for (col, (path, name)) in cols.iter().zip(BRACKET_PATHS) {
        let text = bracket_path(path)
            .iter()
            .map(|m| format!("{} vs {}\n  {} {}", m.team1, m.team2, m.date, m.time))
            .collect::<Vec<_>>()
            .join("\n");
        let title = format!("{} · {name}", t.ucl_bracket);
        frame.render_widget(Paragraph::new(text).block(panel(&title, &state.palette)), *col);
    }
}

fn menu_label(t: &Translations, item: MenuItem) -> &'static str {
    match item {
        MenuItem::Home => t.home,
        MenuItem::Squad => t.squad,
        MenuItem::Highlights => t.bright_moments,
        MenuItem::Bracket => t.ucl_bracket,
        MenuItem::Settings => t.settings,
        MenuItem::Contacts => t.contacts,
        MenuItem::AboutUs => t.about_us,
        MenuItem::AboutSite => t.about_site,
        MenuItem::Privacy => t.privacy_policy,
    }
}

fn render_menu(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.t();
    let height = (MENU_ITEMS.len() as u16 + 2).min(area.height);
    let width = 34.min(area.width);
    let popup = Rect { x: area.x, y: area.y, width, height };
    frame.render_widget(Clear, popup);
    let lines = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let label = menu_label(t, *item).to_uppercase();
            if idx == state.menu_selected {
                Line::styled(format!("> {label}"), state.palette.highlight())
            } else {
                Line::raw(format!("  {label}"))
            }
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines).block(panel("Menu", &state.palette)), popup);
}

fn render_modal(frame: &mut Frame, area: Rect, state: &AppState, modal: Modal, now: Instant) {
    let t = state.t();
    let popup = centered_rect(70, 70, area);
    frame.render_widget(Clear, popup);
    let (title, body) = match modal {
        Modal::Settings => (t.settings, settings_text(state, now)),
        Modal::AboutUs => (t.about_us, t.about_us_content.to_string()),
        Modal::AboutSite => (t.about_site, t.about_site_content.to_string()),
        Modal::Privacy => (t.privacy_policy, t.privacy_policy_content.to_string()),
        Modal::Contacts => (
            t.contacts,
            CONTACT_LINKS
                .iter()
                .map(|link| format!("{:<10} {}", link.label, link.url))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
    };
    let footer = format!("\n\n[Esc] {}", t.close);
    let paragraph = Paragraph::new(format!("{body}{footer}"))
        .wrap(Wrap { trim: false })
        .block(panel(title, &state.palette));
    frame.render_widget(paragraph, popup);
}

fn settings_text(state: &AppState, now: Instant) -> String {
    let t = state.t();
    let prefs = &state.prefs;
    let scheme = COLOR_SCHEMES
        .get(prefs.theme_index())
        .map_or("-", |s| s.name);
    let background = find_background(&prefs.background())
        .or(BACKGROUNDS.first())
        .map_or("-", |bg| bg.name);
    let reset_label = if prefs.reset_pending(now) {
        t.reset_confirm
    } else {
        t.clear_cache
    };
    SettingsField::ALL
        .iter()
        .map(|field| {
            let row = match field {
                SettingsField::Opacity => format!(
                    "{:<24} ◀ {:>3}% ▶",
                    t.window_transparency,
                    (prefs.ui_opacity() * 100.0).round() as u32
                ),
                SettingsField::ColorScheme => format!("{:<24} ◀ {scheme} ▶", t.color_scheme),
                SettingsField::Background => format!("{:<24} ◀ {background} ▶", t.background),
                SettingsField::FavPlayer => {
                    format!("{:<24} ◀ {} ▶", t.fav_player, prefs.fav_player())
                }
                SettingsField::Language => {
                    format!("{:<24} ◀ {} ▶", t.language, state.language.native_name)
                }
                SettingsField::Reset => format!("[ {} ]", reset_label.to_uppercase()),
            };
            let marker = if *field == state.settings_field { ">" } else { " " };
            format!("{marker} {row}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_toasts(frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;
    for toast in state.notifications.rendered() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect { x, y, width, height: TOAST_HEIGHT };
        frame.render_widget(Clear, rect);
        let style = match toast.phase() {
            NotificationPhase::Visible => state.palette.panel(),
            NotificationPhase::Dismissed => state.palette.dim(),
        };
        let bar_width = width.saturating_sub(2) as usize;
        let left = ((toast.remaining_fraction(now) * bar_width as f64).round() as usize).min(bar_width);
        let icon = if toast.icon.is_some() { "◆ " } else { "" };
        let text = format!("{}\n{}", toast.body, "━".repeat(left));
        let widget = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!("{icon}{}", toast.title))
                    .title_style(state.palette.title())
                    .borders(Borders::ALL),
            );
        frame.render_widget(widget, rect);
        y += TOAST_HEIGHT;
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Walkers Terminal - Help",
        "",
        "Global:",
        "  1-5          Home / Watch / Squad / Highlights / Bracket",
        "  m            Menu",
        "  s            Settings",
        "  a            Anthem on/off",
        "  n            Close latest notification",
        "  Backspace    History back",
        "  Esc          Close overlay / back",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Settings:",
        "  ↑/↓          Field",
        "  ←/→          Change value",
        "  Enter        Apply / reset (press twice)",
        "",
        "Watch:",
        "  Space        Play / pause",
        "  ←/→ ↑/↓      Seek / volume",
        "  x f z        Mute / fullscreen / zoom",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

pub fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
