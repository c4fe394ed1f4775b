//! Colors and the clock palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A drawing color. `Clear` leaves whatever is underneath visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    #[default]
    Clear,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
    pub const YELLOW: Color = Color::Rgb(0xFF, 0xFF, 0x00);
    pub const DARK_CANDY_APPLE_RED: Color = Color::Rgb(0xAA, 0x00, 0x00);
    pub const CYAN: Color = Color::Rgb(0x00, 0xFF, 0xFF);
    pub const ELECTRIC_BLUE: Color = Color::Rgb(0x55, 0xFF, 0xFF);
    pub const CELESTE: Color = Color::Rgb(0xAA, 0xFF, 0xFF);
    pub const BLUE_MOON: Color = Color::Rgb(0x00, 0x55, 0xFF);

    pub fn is_clear(&self) -> bool {
        matches!(self, Color::Clear)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Clear => f.write_str("clear"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

/// Error returned when a color string is neither `clear` nor `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}, expected \"clear\" or \"#RRGGBB\"", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("clear") {
            return Ok(Color::Clear);
        }
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Clear => ratatui::style::Color::Reset,
            Color::Rgb(r, g, b) => ratatui::style::Color::Rgb(r, g, b),
        }
    }
}

/// Colors used to paint the clock face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill for the whole layer before anything else is drawn.
    pub background: Color,
    /// Sky bands, outermost first.
    pub sky_fill: Vec<Color>,
    /// Hour ticks.
    pub sky_stroke: Color,
    pub sun_fill: Color,
    pub sun_stroke: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Clear,
            sky_fill: vec![Color::CYAN, Color::ELECTRIC_BLUE, Color::CELESTE],
            sky_stroke: Color::BLUE_MOON,
            sun_fill: Color::YELLOW,
            sun_stroke: Color::DARK_CANDY_APPLE_RED,
        }
    }
}
