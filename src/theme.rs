//! Color theme and glyphs for the oracle screen.
//!
//! Kanagawa Wave palette.

use ratatui::style::{Color, Modifier, Style};

pub mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const GOLD: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ERROR: Color = Color::Rgb(255, 93, 98); // peachRed
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[must_use]
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

pub mod styles {
    use super::{Modifier, Style, colors};

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn slot() -> Style {
        Style::default().fg(colors::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn slot_focused() -> Style {
        Style::default()
            .fg(colors::GOLD)
            .bg(colors::BG_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hint() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    #[must_use]
    pub fn hint_active() -> Style {
        Style::default()
            .fg(colors::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn answer() -> Style {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn error() -> Style {
        Style::default().fg(colors::ERROR)
    }
}
