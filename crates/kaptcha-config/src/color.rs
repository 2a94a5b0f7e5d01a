//! RGBA colors and the named-color registry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An sRGB color with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel; `255` is fully opaque.
    pub alpha: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Dark gray.
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);
    /// Gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Light gray.
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);
    /// Magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Orange.
    pub const ORANGE: Self = Self::rgb(255, 200, 0);
    /// Pink.
    pub const PINK: Self = Self::rgb(255, 175, 175);
    /// Red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Opaque color from red, green and blue channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Color from all four channels.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Look up a named color.
    ///
    /// Matching ignores case, underscores and spaces, so `RED`, `red`,
    /// `dark_gray` and `darkGray` all resolve. The standard palette wins over
    /// the wider CSS/X11 name table, which also accepts `#rrggbb` hex strings.
    pub fn from_name(name: &str) -> Result<Self, UnknownColorName> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if let Some(color) = standard(&normalized) {
            return Ok(color);
        }
        colornames::Color::try_from(normalized.as_str())
            .ok()
            .map(|c| {
                let (r, g, b) = c.rgb();
                Self::rgb(r, g, b)
            })
            .ok_or_else(|| UnknownColorName {
                name: name.to_string(),
            })
    }

    /// Channels as an `[r, g, b, a]` array.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

/// The standard palette keyed by normalized name.
fn standard(normalized: &str) -> Option<Color> {
    let color = match normalized {
        "black" => Color::BLACK,
        "blue" => Color::BLUE,
        "cyan" => Color::CYAN,
        "darkgray" => Color::DARK_GRAY,
        "gray" => Color::GRAY,
        "green" => Color::GREEN,
        "lightgray" => Color::LIGHT_GRAY,
        "magenta" => Color::MAGENTA,
        "orange" => Color::ORANGE,
        "pink" => Color::PINK,
        "red" => Color::RED,
        "white" => Color::WHITE,
        "yellow" => Color::YELLOW,
        _ => return None,
    };
    Some(color)
}

/// A color name that matched neither the standard palette nor the name table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no such color: '{name}'")]
pub struct UnknownColorName {
    /// Name as supplied by the caller.
    pub name: String,
}
