//! Logstack is a leveled logging facility with two parallel sinks per named
//! stream: a level-colored console sink on standard error and a plain-text
//! sink appending to a dated log file.
//!
//! Every record body is normalized into the same three-part shape (message,
//! exception summary, trace), and trace text is only surfaced for `Error` and
//! `Critical` records. Color never reaches the file sink.
//!
//! The crate is structured into small modules, leaves first: escape-sequence
//! encoding, the per-severity color table, record rendering, body assembly,
//! sinks, the facade, and a name-keyed registry.

/// Record rendering templates, per sink kind.
pub mod format;
/// Ordered severity levels.
pub mod level;
/// Leveled logging macros, feature-gated per level.
pub mod macros;
/// Three-part record body assembly and parsing.
pub mod message;
/// Fixed per-severity console color table.
pub mod presentation;
/// Name-keyed facade registry with get-or-create semantics.
pub mod registry;
/// Console, file, and null sinks.
pub mod sink;
/// The public logging facade.
pub mod stack;
/// Terminal color/style escape-sequence codec.
pub mod style;

pub use format::SinkKind;
pub use level::Severity;
pub use message::{AssembledRecord, ErrorReport};
pub use registry::Registry;
pub use sink::{NullSink, RecordSink, SinkError, WriterSink};
pub use stack::{LogStack, StackConfig};
pub use style::{Color, StyleAttr, StyleError};
