//! Record rendering, per sink kind.

use chrono::{DateTime, Local};

use crate::{
    level::Severity,
    presentation::level_style,
    style::RESET,
};

/// Which template table a sink renders with.
///
/// Tagged explicitly at sink creation; kind is never inferred from the
/// concrete writer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkKind {
    /// Colored output for an interactive stream.
    Console,
    /// Plain output for persisted text; never contains escape sequences.
    File,
}

/// Fixed timestamp layout: `YYYY-MM-DD HH:MM:SS,mmm`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Fixed padding width for the bracketed level name.
const LEVEL_PAD: usize = 10;

/// Renders one record line for the given sink kind.
///
/// Pure: same inputs, same output, no side effects.
///
/// - `Console`: `[ts] <badge>[NAME      ]<reset><text>body<reset>`
/// - `File`: `[ts] [NAME      ] body`
#[must_use]
pub fn render(kind: SinkKind, severity: Severity, timestamp: DateTime<Local>, body: &str) -> String {
    let ts = timestamp.format(TIMESTAMP_FORMAT);
    let name = severity.as_str();
    match kind {
        SinkKind::Console => {
            let colors = level_style(severity);
            format!(
                "[{ts}] {badge}[{name:<LEVEL_PAD$}]{RESET}{text}{body}{RESET}",
                badge = colors.badge,
                text = colors.text,
            )
        }
        SinkKind::File => format!("[{ts}] [{name:<LEVEL_PAD$}] {body}"),
    }
}
