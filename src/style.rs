//! Terminal escape-sequence codec for the console sink.
//!
//! Colors and styles are closed enums, so invalid members cannot be
//! constructed; the only runtime validation left is "at least one color"
//! and the numeric-code conversion used when a color arrives as a raw byte.

use thiserror::Error;

/// Sequence that turns all terminal attributes off again.
///
/// Every colored span is closed with this so color never bleeds into
/// subsequent uncolored output.
pub const RESET: &str = "\x1b[0m";

/// The eight base terminal colors, by their standard code slot (0-7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Purple = 5,
    Cyan = 6,
    Gray = 7,
}

impl Color {
    /// Terminal code slot for this color (appended to `3` for foreground,
    /// `4` for background).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Color {
    type Error = StyleError;

    fn try_from(code: u8) -> Result<Self, StyleError> {
        match code {
            0 => Ok(Color::Black),
            1 => Ok(Color::Red),
            2 => Ok(Color::Green),
            3 => Ok(Color::Yellow),
            4 => Ok(Color::Blue),
            5 => Ok(Color::Purple),
            6 => Ok(Color::Cyan),
            7 => Ok(Color::Gray),
            other => Err(StyleError::ColorCodeOutOfRange(other)),
        }
    }
}

/// Terminal text attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleAttr {
    Normal = 0,
    Bold = 1,
    Dark = 2,
    Italic = 3,
    Underscore = 4,
    Blink = 5,
    Reverse = 7,
    Hide = 8,
    StrikeThrough = 9,
}

/// Invalid color configuration, detected when a combination is encoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Neither a foreground nor a background color was given.
    #[error("either a foreground or a background color is required")]
    MissingColor,
    /// A numeric color code outside the 0-7 slot range.
    #[error("color code {0} is out of range (0-7)")]
    ColorCodeOutOfRange(u8),
}

/// Encodes a color/style combination into a terminal escape sequence.
///
/// The sequence sets the style (defaulting to [`StyleAttr::Normal`]), then the
/// foreground (defaulting to the BLACK slot when only a background is given),
/// then the background if present.
///
/// # Errors
///
/// Returns [`StyleError::MissingColor`] if both colors are absent.
pub fn encode(
    fg: Option<Color>,
    bg: Option<Color>,
    style: Option<StyleAttr>,
) -> Result<String, StyleError> {
    if fg.is_none() && bg.is_none() {
        return Err(StyleError::MissingColor);
    }
    Ok(encode_unchecked(fg, bg, style))
}

/// Foreground-only sequence. Infallible: a color is always supplied.
#[must_use]
pub fn fg_sequence(color: Color, style: Option<StyleAttr>) -> String {
    encode_unchecked(Some(color), None, style)
}

/// Background-only sequence. Infallible: a color is always supplied.
#[must_use]
pub fn bg_sequence(color: Color, style: Option<StyleAttr>) -> String {
    encode_unchecked(None, Some(color), style)
}

fn encode_unchecked(fg: Option<Color>, bg: Option<Color>, style: Option<StyleAttr>) -> String {
    let style = style.unwrap_or(StyleAttr::Normal) as u8;
    let fg = fg.map_or(0, Color::code);
    match bg {
        Some(bg) => format!("\x1b[{style};3{fg};4{}m", bg.code()),
        None => format!("\x1b[{style};3{fg}m"),
    }
}
