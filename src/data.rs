use chrono::{DateTime, Utc};

pub const CLUB_NAME: &str = "Real Madrid";
pub const CLUB_SHORT: &str = "RMA";
pub const CLUB_LOGO: &str =
    "https://upload.wikimedia.org/wikipedia/en/thumb/5/56/Real_Madrid_CF.svg/1200px-Real_Madrid_CF.svg.png";

#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub opponent: String,
    pub opponent_logo: String,
    pub competition: String,
    pub kickoff: DateTime<Utc>,
    pub is_home: bool,
}

struct FixtureSeed {
    opponent: &'static str,
    logo: &'static str,
    competition: &'static str,
    kickoff: &'static str,
    is_home: bool,
}

// Dataset order matters for the welcome notification; it is not chronological.
const FIXTURE_SEEDS: &[FixtureSeed] = &[
    FixtureSeed {
        opponent: "Benfica",
        logo: "https://s.scr365.net/teams/2024/6/28/TPPrxvRf_64_13.png",
        competition: "Champions league",
        kickoff: "2026-02-17T19:59:00Z",
        is_home: false,
    },
    FixtureSeed {
        opponent: "Club Atlético Osasuna",
        logo: "https://s.scr365.net/teams/2025/3/27/m5RuA8nME_64_114.png",
        competition: "La Liga",
        kickoff: "2026-02-21T17:30:00Z",
        is_home: false,
    },
    FixtureSeed {
        opponent: "Benfica",
        logo: "https://s.scr365.net/teams/2024/6/28/TPPrxvRf_64_13.png",
        competition: "Champions league",
        kickoff: "2026-02-08T19:59:00Z",
        is_home: true,
    },
    FixtureSeed {
        opponent: "Getafe Club de Fútbol",
        logo: "https://s.scr365.net/teams/2024/6/28/pZkIk7JT_64_230.png",
        competition: "La Liga",
        kickoff: "2026-02-25T19:59:00Z",
        is_home: true,
    },
    FixtureSeed {
        opponent: "Real Club Celta de Vigo",
        logo: "https://s.scr365.net/teams/2024/6/28/nXreavLR3_64_259.png",
        competition: "La Liga",
        kickoff: "2026-03-02T19:59:00Z",
        is_home: false,
    },
    FixtureSeed {
        opponent: "Elche Club de Fútbol",
        logo: "https://s.scr365.net/teams/2023/7/28/xAfpod_7227.png",
        competition: "La Liga",
        kickoff: "2026-03-15T18:00:00Z",
        is_home: true,
    },
];

pub fn fixtures() -> Vec<Fixture> {
    FIXTURE_SEEDS
        .iter()
        .filter_map(|seed| {
            let kickoff = DateTime::parse_from_rfc3339(seed.kickoff).ok()?;
            Some(Fixture {
                opponent: seed.opponent.to_string(),
                opponent_logo: seed.logo.to_string(),
                competition: seed.competition.to_string(),
                kickoff: kickoff.with_timezone(&Utc),
                is_home: seed.is_home,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct TeamStats {
    pub competition: &'static str,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStats {
    pub fn goal_share(&self) -> f64 {
        let total = self.goals_for + self.goals_against;
        if total == 0 {
            return 0.0;
        }
        self.goals_for as f64 / total as f64
    }
}

pub const PERFORMANCE_STATS: &[TeamStats] = &[
    TeamStats {
        competition: "La Liga",
        played: 24,
        wins: 19,
        draws: 3,
        losses: 2,
        goals_for: 53,
        goals_against: 19,
    },
    TeamStats {
        competition: "Champions League",
        played: 9,
        wins: 6,
        draws: 0,
        losses: 3,
        goals_for: 22,
        goals_against: 12,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct StandingRow {
    pub position: u32,
    pub team: &'static str,
    pub played: u32,
    pub points: u32,
}

pub const STANDINGS: &[StandingRow] = &[
    StandingRow { position: 1, team: "Real Madrid", played: 24, points: 60 },
    StandingRow { position: 2, team: "Barcelona", played: 24, points: 58 },
    StandingRow { position: 4, team: "Villarreal", played: 23, points: 45 },
    StandingRow { position: 3, team: "Atlético", played: 24, points: 45 },
    StandingRow { position: 5, team: "Betis", played: 24, points: 45 },
];

pub fn standings_sorted() -> Vec<StandingRow> {
    let mut rows = STANDINGS.to_vec();
    rows.sort_by_key(|row| row.position);
    rows
}

#[derive(Debug, Clone, Copy)]
pub struct SquadPlayer {
    pub name: &'static str,
    pub position: &'static str,
    pub nationality: &'static str,
    pub goals: u32,
    pub assists: u32,
    pub apps: u32,
    pub clean_sheets: Option<u32>,
}

const fn outfield(
    name: &'static str,
    position: &'static str,
    nationality: &'static str,
) -> SquadPlayer {
    SquadPlayer {
        name,
        position,
        nationality,
        goals: 0,
        assists: 0,
        apps: 0,
        clean_sheets: None,
    }
}

pub const SQUAD: &[SquadPlayer] = &[
    SquadPlayer {
        name: "Thibaut Courtois",
        position: "Goalkeeper",
        nationality: "Belgium",
        goals: 0,
        assists: 0,
        apps: 0,
        clean_sheets: Some(0),
    },
    outfield("Kylian Mbappé", "Forward", "France"),
    outfield("Vinícius Jr.", "Forward", "Brazil"),
    outfield("Jude Bellingham", "Midfielder", "England"),
    outfield("Fede Valverde", "Midfielder", "Uruguay"),
    outfield("Raúl Asencio", "Defender", "Spain"),
    outfield("Antonio Rüdiger", "Defender", "Germany"),
    outfield("Rodrygo Goes", "Forward", "Brazil"),
];

/// Players offered as the favorite-player preference.
pub const PLAYER_LIST: &[&str] = &[
    "Thibaut Courtois",
    "Kylian Mbappé",
    "Vinícius Jr.",
    "Jude Bellingham",
    "Fede Valverde",
    "Antonio Rüdiger",
    "Rodrygo Goes",
    "Dani Carvajal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Goal,
    Sub,
    YellowCard,
    RedCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSide {
    Club,
    Opponent,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchEvent {
    pub minute: &'static str,
    pub kind: EventKind,
    pub side: EventSide,
    /// Scorer, booked player, or the player coming off.
    pub player: &'static str,
    /// Assist provider, or the player coming on.
    pub other: Option<&'static str>,
}

/// Each pair is (club, opponent).
#[derive(Debug, Clone, Copy)]
pub struct MatchStats {
    pub possession: (f32, f32),
    pub xg: (f32, f32),
    pub shots: (f32, f32),
    pub shots_on_target: (f32, f32),
    pub passing: (f32, f32),
    pub corners: (f32, f32),
    pub fouls: (f32, f32),
}

#[derive(Debug, Clone, Copy)]
pub struct HighlightMatch {
    pub id: &'static str,
    pub opponent: &'static str,
    pub competition: &'static str,
    pub date: &'static str,
    pub score: (u8, u8),
    pub video_url: &'static str,
    pub stats: MatchStats,
    pub events: &'static [MatchEvent],
    pub gallery: &'static [&'static str],
}

pub const HIGHLIGHTS: &[HighlightMatch] = &[HighlightMatch {
    id: "1",
    opponent: "BENFICA",
    competition: "UEFA Champions League",
    date: "18.02.2026",
    score: (1, 0),
    video_url: "https://bl.rutube.ru/route/60fc7f8b37b1b2c0912b1aeb938c5c72.m3u8",
    stats: MatchStats {
        possession: (58.0, 42.0),
        xg: (1.11, 0.41),
        shots: (16.0, 10.0),
        shots_on_target: (7.0, 3.0),
        passing: (88.0, 80.0),
        corners: (7.0, 4.0),
        fouls: (9.0, 6.0),
    },
    events: &[
        MatchEvent {
            minute: "90'+9",
            kind: EventKind::Sub,
            side: EventSide::Club,
            player: "Dani CARVAJAL",
            other: Some("Alvaro FERNANDEZ"),
        },
        MatchEvent {
            minute: "90'+4",
            kind: EventKind::Sub,
            side: EventSide::Club,
            player: "Thiago PITARCH",
            other: Some("Eduardo CAMAVINGA"),
        },
        MatchEvent {
            minute: "90'+2",
            kind: EventKind::YellowCard,
            side: EventSide::Opponent,
            player: "Georgiy SUDAKOV",
            other: None,
        },
        MatchEvent {
            minute: "87'",
            kind: EventKind::YellowCard,
            side: EventSide::Club,
            player: "Kylian MBAPPE",
            other: None,
        },
        MatchEvent {
            minute: "86'",
            kind: EventKind::Sub,
            side: EventSide::Club,
            player: "Brahim DIAZ",
            other: Some("Arda GULER"),
        },
        MatchEvent {
            minute: "81'",
            kind: EventKind::Sub,
            side: EventSide::Opponent,
            player: "Dodi LUKEBAKIO",
            other: Some("Gianluca PRESTIANNI"),
        },
        MatchEvent {
            minute: "74'",
            kind: EventKind::Sub,
            side: EventSide::Opponent,
            player: "Georgiy SUDAKOV",
            other: Some("Andreas SCHJELDERUP"),
        },
    ],
    gallery: &[
        "https://i.ytimg.com/vi/Mp82AcAWdlg/maxresdefault.jpg",
        "https://cdn.tuko.co.ke/images/1120/6af5da9ed462929d.jpeg",
        "https://www.aljazeera.com/wp-content/uploads/2026/02/GettyImages-2262179316-1771405623.jpg",
        "https://www.aljazeera.com/wp-content/uploads/2026/02/afp_6994d4ce5c3c-1771361486.jpg",
        "https://img.championat.com/i/f/m/17713672661888105224.jpg",
        "https://ss.sport-express.ru/userfiles/materials/217/2175246/1180x665.jpg",
        "https://madridistanews.com/assets/admin/news/real-madrid-return-from-lisbon-with-goal-advantage.jpg",
    ],
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketPath {
    Silver,
    Blue,
}

#[derive(Debug, Clone, Copy)]
pub struct Matchup {
    pub id: &'static str,
    pub path: BracketPath,
    pub team1: &'static str,
    pub team2: &'static str,
    pub date: &'static str,
    pub time: &'static str,
}

pub const BRACKET: &[Matchup] = &[
    Matchup { id: "s1", path: BracketPath::Silver, team1: "Monaco", team2: "Paris", date: "18 Feb", time: "00:00" },
    Matchup { id: "s2", path: BracketPath::Silver, team1: "Galatasaray", team2: "Juventus", date: "17 Feb", time: "21:45" },
    Matchup { id: "s3", path: BracketPath::Silver, team1: "Benfica", team2: "Real Madrid", date: "18 Feb", time: "00:00" },
    Matchup { id: "s4", path: BracketPath::Silver, team1: "B. Dortmund", team2: "Atalanta", date: "18 Feb", time: "00:00" },
    Matchup { id: "b1", path: BracketPath::Blue, team1: "Qarabağ", team2: "Newcastle", date: "18 Feb", time: "21:45" },
    Matchup { id: "b2", path: BracketPath::Blue, team1: "Club Brugge", team2: "Atleti", date: "19 Feb", time: "00:00" },
    Matchup { id: "b3", path: BracketPath::Blue, team1: "Bodø/Glimt", team2: "Inter", date: "19 Feb", time: "00:00" },
    Matchup { id: "b4", path: BracketPath::Blue, team1: "Olympiacos", team2: "Leverkusen", date: "19 Feb", time: "00:00" },
];

pub const BRACKET_PATHS: [(BracketPath, &str); 2] = [
    (BracketPath::Silver, "Silver Path"),
    (BracketPath::Blue, "Blue Path"),
];

pub fn bracket_path(path: BracketPath) -> Vec<&'static Matchup> {
    BRACKET.iter().filter(|m| m.path == path).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub name: &'static str,
    pub primary: (u8, u8, u8),
    pub secondary: (u8, u8, u8),
    pub accent: (u8, u8, u8),
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "Classic Gold",
        primary: (0xbf, 0x95, 0x3f),
        secondary: (0xfc, 0xf6, 0xba),
        accent: (0xaa, 0x77, 0x1c),
    },
    ColorScheme {
        name: "Royal Silver",
        primary: (0xc0, 0xc0, 0xc0),
        secondary: (0xe8, 0xe8, 0xe8),
        accent: (0x70, 0x70, 0x70),
    },
    ColorScheme {
        name: "Champagne",
        primary: (0xf7, 0xe7, 0xce),
        secondary: (0xff, 0xff, 0xff),
        accent: (0xd4, 0xaf, 0x37),
    },
    ColorScheme {
        name: "Elite Blue",
        primary: (0x1e, 0x3a, 0x8a),
        secondary: (0x60, 0xa5, 0xfa),
        accent: (0x1d, 0x4e, 0xd8),
    },
];

/// A stadium backdrop. `tint` is the dominant color used behind panels.
#[derive(Debug, Clone, Copy)]
pub struct Background {
    pub id: &'static str,
    pub name: &'static str,
    pub tint: (u8, u8, u8),
}

pub const BACKGROUNDS: &[Background] = &[
    Background { id: "bernabeu", name: "Bernabéu", tint: (38, 40, 58) },
    Background { id: "champions-league", name: "Champions league", tint: (16, 28, 72) },
    Background { id: "la-liga-field", name: "La Liga Field", tint: (18, 52, 30) },
    Background { id: "stadium-crowd", name: "Stadium Crowd", tint: (54, 44, 36) },
    Background { id: "la-liga", name: "La Liga", tint: (60, 22, 30) },
    Background { id: "stadium-dark", name: "Stadium Dark", tint: (12, 12, 16) },
];

pub fn find_background(id: &str) -> Option<&'static Background> {
    BACKGROUNDS.iter().find(|bg| bg.id == id)
}

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { label: "Instagram", url: "https://www.instagram.com/abul_walker" },
    ContactLink { label: "YouTube", url: "https://www.youtube.com/@abulwalker" },
    ContactLink { label: "TikTok", url: "https://www.tiktok.com/@abul_wa7ker" },
];

pub const ANTHEM_URL: &str = "https://cdn2.deliciousoranges.com/s3/get/music/20190613/Hala_Madrid_-_y_nada_mas_-_gimn_Reala_64993605.mp3";
