//! Normalizes ad-hoc error context into the fixed three-part record body.
//!
//! Every record body has the same shape (message, exception, traceback),
//! whether or not the call carried an error. Trace text is only surfaced for
//! `Error`/`Critical` records, and only when a non-empty trace was actually
//! supplied.

use crate::level::Severity;

const MESSAGE_TAG: &str = "\n\t<MESSAGE>: ";
const EXCEPTION_TAG: &str = "\n\t<EXCEPTION>: ";
const TRACEBACK_TAG: &str = "\n\t<TRACEBACK>: \n";

/// Explicit error context for a log call.
///
/// Trace capture is caller-driven: the report carries whatever trace text the
/// call site chose to attach. There is no ambient "current exception" slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    summary: String,
    trace: String,
}

impl ErrorReport {
    /// Report with a summary and no trace.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            trace: String::new(),
        }
    }

    /// Report with a summary and an explicit trace.
    pub fn with_trace(summary: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            trace: trace.into(),
        }
    }

    /// Builds a report from an error value: the summary is its `Display`
    /// rendering, the trace is the `source()` cause chain, one line per cause.
    ///
    /// An error with no sources yields an empty trace, indistinguishable from
    /// a report built with [`ErrorReport::new`].
    #[must_use]
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut trace = String::new();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push_str("caused by: ");
            trace.push_str(&cause.to_string());
            trace.push('\n');
            source = cause.source();
        }
        Self {
            summary: err.to_string(),
            trace,
        }
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn trace(&self) -> &str {
        &self.trace
    }
}

/// The three sections of an assembled record body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledRecord {
    pub message: String,
    pub exception: String,
    pub trace: String,
}

impl AssembledRecord {
    /// Renders the fixed-shape block.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{MESSAGE_TAG}{}{EXCEPTION_TAG}{}{TRACEBACK_TAG}{}",
            self.message, self.exception, self.trace
        )
    }

    /// Parses a block produced by [`render`](Self::render) back into its
    /// sections.
    ///
    /// Returns `None` if the tags are missing or out of order. Recovery is
    /// exact as long as no section embeds one of the literal tag strings.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix(MESSAGE_TAG)?;
        let exc_at = rest.find(EXCEPTION_TAG)?;
        let (message, rest) = rest.split_at(exc_at);
        let rest = &rest[EXCEPTION_TAG.len()..];
        let trace_at = rest.find(TRACEBACK_TAG)?;
        let (exception, rest) = rest.split_at(trace_at);
        let trace = &rest[TRACEBACK_TAG.len()..];
        Some(Self {
            message: message.to_string(),
            exception: exception.to_string(),
            trace: trace.to_string(),
        })
    }
}

/// Assembles the record body for one log call.
///
/// The trace section is kept only when `severity` is `Error` or `Critical`
/// **and** the report carries a non-empty trace; in every other case it is
/// empty. The three-part shape is always produced, `Debug`/`Info` included.
#[must_use]
pub fn assemble(severity: Severity, message: Option<&str>, error: Option<&ErrorReport>) -> String {
    let trace = match error {
        Some(report) if severity >= Severity::Error => report.trace(),
        _ => "",
    };
    AssembledRecord {
        message: message.unwrap_or_default().to_string(),
        exception: error.map(|r| r.summary().to_string()).unwrap_or_default(),
        trace: trace.to_string(),
    }
    .render()
}
