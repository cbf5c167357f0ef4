//! Fixed per-severity color table for the console sink.
//!
//! The file sink never consults this table; color is a console-only
//! presentation concern.

use std::sync::OnceLock;

use crate::{
    level::Severity,
    style::{self, Color, StyleAttr},
};

/// Escape sequences for one severity: `badge` colors the bracketed level
/// name (background), `text` colors the record body (foreground).
#[derive(Debug, Clone)]
pub struct LevelStyle {
    pub badge: String,
    pub text: String,
}

impl LevelStyle {
    fn plain(color: Color) -> Self {
        Self {
            badge: style::bg_sequence(color, None),
            text: style::fg_sequence(color, None),
        }
    }
}

static TABLE: OnceLock<[LevelStyle; 5]> = OnceLock::new();

/// Console presentation for the given severity.
///
/// Built once at first use; immutable afterwards. The table is total over
/// [`Severity`], so every level has a row.
#[must_use]
pub fn level_style(severity: Severity) -> &'static LevelStyle {
    let table = TABLE.get_or_init(|| {
        [
            // Debug
            LevelStyle::plain(Color::Cyan),
            // Info
            LevelStyle::plain(Color::Green),
            // Warning
            LevelStyle::plain(Color::Yellow),
            // Error
            LevelStyle::plain(Color::Purple),
            // Critical: blinking badge, bold text
            LevelStyle {
                badge: style::bg_sequence(Color::Red, Some(StyleAttr::Blink)),
                text: style::fg_sequence(Color::Red, Some(StyleAttr::Bold)),
            },
        ]
    });
    &table[severity as usize]
}
