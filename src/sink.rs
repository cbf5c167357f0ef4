//! Output sinks. Each sink owns its threshold, its kind tag, and a mutex
//! around the writer so concurrent callers cannot interleave partial lines.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::{
    format::{self, SinkKind},
    level::Severity,
};

/// Fatal sink construction failure. Never raised after attachment.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log file could not be opened or created.
    #[error("cannot open log file {path}: {source}")]
    Attach {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A destination for rendered records.
///
/// Implementations apply their own threshold: a record below it is silently
/// dropped at that sink only, never affecting any other sink.
pub trait RecordSink: Send + Sync {
    fn kind(&self) -> SinkKind;
    fn threshold(&self) -> Severity;
    /// Renders and writes one record. Must never fail the caller; write
    /// errors after attachment are swallowed.
    fn emit(&self, severity: Severity, timestamp: DateTime<Local>, body: &str);
}

/// Sink that renders through its [`SinkKind`] template and writes whole lines
/// to an owned writer.
pub struct WriterSink {
    kind: SinkKind,
    threshold: Severity,
    out: Mutex<Box<dyn Write + Send>>,
    path: Option<PathBuf>,
}

impl WriterSink {
    /// Colored console sink on standard error.
    #[must_use]
    pub fn console(threshold: Severity) -> Self {
        Self::from_writer(SinkKind::Console, threshold, Box::new(io::stderr()))
    }

    /// Plain-text file sink writing to `{current-date}-{name}.log` inside
    /// `dir`, opened in append mode and created if absent. The date is fixed
    /// here: there is no mid-run rollover.
    ///
    /// # Errors
    ///
    /// [`SinkError::Attach`] if the file cannot be opened; fatal, no retry.
    pub fn file<D: AsRef<Path>>(
        dir: D,
        name: &str,
        threshold: Severity,
    ) -> Result<Self, SinkError> {
        let fname = format!("{}-{name}.log", Local::now().format("%F"));
        let path = dir.as_ref().join(fname);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Attach {
                path: path.clone(),
                source,
            })?;
        let mut sink = Self::from_writer(SinkKind::File, threshold, Box::new(file));
        sink.path = Some(path);
        Ok(sink)
    }

    /// Sink over an arbitrary writer; lets embedders and tests capture output.
    #[must_use]
    pub fn from_writer(kind: SinkKind, threshold: Severity, writer: Box<dyn Write + Send>) -> Self {
        Self {
            kind,
            threshold,
            out: Mutex::new(writer),
            path: None,
        }
    }

    /// Path of the backing file, for file sinks.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl RecordSink for WriterSink {
    fn kind(&self) -> SinkKind {
        self.kind
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn emit(&self, severity: Severity, timestamp: DateTime<Local>, body: &str) {
        if severity < self.threshold {
            return;
        }
        let line = format::render(self.kind, severity, timestamp, body);
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Default)]
pub struct NullSink;

impl RecordSink for NullSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn threshold(&self) -> Severity {
        Severity::Critical
    }

    #[inline]
    fn emit(&self, _severity: Severity, _timestamp: DateTime<Local>, _body: &str) {}
}
