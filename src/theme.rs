use ratatui::style::{Color, Modifier, Style};

use crate::data::{BACKGROUNDS, COLOR_SCHEMES, ColorScheme, find_background};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub panel_bg: Color,
    pub text: Color,
    pub muted: Color,
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Opacity blends the backdrop tint toward black: 1.0 is solid black, 0.0 the raw tint.
pub fn panel_color(tint: (u8, u8, u8), opacity: f32) -> Color {
    let opacity = if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let keep = 1.0 - opacity;
    let scale = |c: u8| (f32::from(c) * keep).round() as u8;
    Color::Rgb(scale(tint.0), scale(tint.1), scale(tint.2))
}

impl Palette {
    pub fn from_prefs(theme_index: usize, background_id: &str, opacity: f32) -> Self {
        let scheme: &ColorScheme = COLOR_SCHEMES.get(theme_index).unwrap_or(&COLOR_SCHEMES[0]);
        let background = find_background(background_id).unwrap_or(&BACKGROUNDS[0]);
        Self {
            primary: rgb(scheme.primary),
            secondary: rgb(scheme.secondary),
            accent: rgb(scheme.accent),
            panel_bg: panel_color(background.tint, opacity),
            text: Color::White,
            muted: Color::DarkGray,
        }
    }

    pub fn panel(&self) -> Style {
        Style::default().bg(self.panel_bg).fg(self.text)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
