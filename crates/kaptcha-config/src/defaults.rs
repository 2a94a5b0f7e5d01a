//! Defaults used when a key is absent or empty.

use crate::{Color, FontDescriptor};

pub(crate) const BORDER: bool = true;
pub(crate) const BORDER_COLOR: Color = Color::BLACK;
pub(crate) const BORDER_THICKNESS: u32 = 1;

pub(crate) const NOISE_COLOR: Color = Color::BLACK;

pub(crate) const CHAR_STRING: &str = "abcde2345678gfynmnpwx";
pub(crate) const CHAR_LENGTH: u32 = 5;
pub(crate) const CHAR_SPACE: u32 = 2;

pub(crate) const FONT_SIZE: u32 = 40;
pub(crate) const FONT_COLOR: Color = Color::BLACK;
pub(crate) const FONT_FAMILIES: &[&str] = &["Arial", "Courier"];

pub(crate) const BACKGROUND_FROM: Color = Color::LIGHT_GRAY;
pub(crate) const BACKGROUND_TO: Color = Color::WHITE;

pub(crate) const IMAGE_WIDTH: u32 = 200;
pub(crate) const IMAGE_HEIGHT: u32 = 50;

/// Default session attribute name for the answer text.
pub const SESSION_KEY: &str = "KAPTCHA_SESSION_KEY";
/// Default session attribute name for the creation timestamp.
pub const SESSION_DATE: &str = "KAPTCHA_SESSION_DATE";

pub(crate) fn chars() -> Vec<char> {
    CHAR_STRING.chars().collect()
}

pub(crate) fn fonts(size: u32) -> Vec<FontDescriptor> {
    FONT_FAMILIES
        .iter()
        .map(|family| FontDescriptor::bold(*family, size))
        .collect()
}
