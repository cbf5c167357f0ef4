//! The public logging facade: one named stream, fanned out to a colored
//! console sink and a plain dated-file sink.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{
    level::Severity,
    message::{self, ErrorReport},
    sink::{RecordSink, SinkError, WriterSink},
};

/// Construction parameters for [`LogStack`].
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Overall capture threshold; calls below it never reach any sink.
    pub trap: Severity,
    /// Console sink threshold.
    pub console: Severity,
    /// File sink threshold.
    pub file: Severity,
    /// Directory the dated log file is created in.
    pub dir: PathBuf,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            trap: Severity::Debug,
            console: Severity::Debug,
            file: Severity::Debug,
            dir: PathBuf::from("."),
        }
    }
}

/// Named logging facade.
///
/// Each severity method runs synchronously to completion: assemble the
/// three-part body, stamp one timestamp, fan out to every sink. Sinks apply
/// their own thresholds independently. After construction, log calls never
/// fail the caller.
///
/// Two `LogStack`s created directly with the same name append to the same
/// dated file. Use [`Registry`](crate::registry::Registry) to get singleton
/// semantics per name.
pub struct LogStack {
    name: String,
    trap: Severity,
    sinks: Vec<Box<dyn RecordSink>>,
    file_path: Option<PathBuf>,
}

impl LogStack {
    /// Facade with default thresholds (`Debug` everywhere) writing the dated
    /// file into the current working directory.
    ///
    /// # Errors
    ///
    /// [`SinkError::Attach`] if the log file cannot be opened.
    pub fn create(name: &str) -> Result<Self, SinkError> {
        Self::create_with(name, StackConfig::default())
    }

    /// Facade with explicit thresholds and target directory.
    ///
    /// # Errors
    ///
    /// [`SinkError::Attach`] if the log file cannot be opened.
    pub fn create_with(name: &str, config: StackConfig) -> Result<Self, SinkError> {
        let console = WriterSink::console(config.console);
        let file = WriterSink::file(&config.dir, name, config.file)?;
        let file_path = file.path().map(Path::to_path_buf);
        Ok(Self {
            name: name.to_string(),
            trap: config.trap,
            sinks: vec![Box::new(console), Box::new(file)],
            file_path,
        })
    }

    /// Facade over caller-supplied sinks. Used by embedders that need custom
    /// destinations, and by tests to capture output.
    #[must_use]
    pub fn with_sinks(name: &str, trap: Severity, sinks: Vec<Box<dyn RecordSink>>) -> Self {
        Self {
            name: name.to_string(),
            trap,
            sinks,
            file_path: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the active dated log file, when a file sink was attached.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Logs one record at the given severity.
    ///
    /// Calls below the trap threshold return without assembling anything.
    pub fn log(&self, severity: Severity, message: Option<&str>, error: Option<&ErrorReport>) {
        if severity < self.trap {
            return;
        }
        let body = message::assemble(severity, message, error);
        let timestamp = Local::now();
        for sink in &self.sinks {
            sink.emit(severity, timestamp, &body);
        }
    }

    pub fn debug(&self, message: Option<&str>, error: Option<&ErrorReport>) {
        self.log(Severity::Debug, message, error);
    }

    pub fn info(&self, message: Option<&str>, error: Option<&ErrorReport>) {
        self.log(Severity::Info, message, error);
    }

    pub fn warning(&self, message: Option<&str>, error: Option<&ErrorReport>) {
        self.log(Severity::Warning, message, error);
    }

    pub fn error(&self, message: Option<&str>, error: Option<&ErrorReport>) {
        self.log(Severity::Error, message, error);
    }

    pub fn critical(&self, message: Option<&str>, error: Option<&ErrorReport>) {
        self.log(Severity::Critical, message, error);
    }
}
