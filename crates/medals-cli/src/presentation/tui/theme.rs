use medals_types::{Appearance, MedalType};
use ratatui::style::{Color, Modifier, Style};

use crate::presentation::StatusLevel;

/// Colors for one appearance. Medal colors are shared by both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub selection: Color,
}

impl Palette {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self {
                background: Color::Rgb(0x12, 0x12, 0x12),
                foreground: Color::Rgb(0xE8, 0xE8, 0xE8),
                muted: Color::DarkGray,
                border: Color::Rgb(0x44, 0x44, 0x44),
                accent: Color::Cyan,
                selection: Color::Rgb(0x2A, 0x2A, 0x3A),
            },
            Appearance::Light => Self {
                background: Color::Rgb(0xFA, 0xFA, 0xFA),
                foreground: Color::Rgb(0x1E, 0x1E, 0x1E),
                muted: Color::Gray,
                border: Color::Rgb(0xBB, 0xBB, 0xBB),
                accent: Color::Blue,
                selection: Color::Rgb(0xDD, 0xE6, 0xF5),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

pub(crate) fn medal_color(medal: &MedalType) -> Color {
    let (r, g, b) = medal.rgb;
    Color::Rgb(r, g, b)
}

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
