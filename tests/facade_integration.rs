#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::Local;
use logstack::{
    AssembledRecord, ErrorReport, LogStack, Registry, Severity, SinkKind, StackConfig, WriterSink,
    stack_error, stack_info,
};

/// Writer whose contents stay readable after the sink takes ownership.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("logstack-it-{tag}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_in(dir: &Path) -> StackConfig {
    StackConfig {
        dir: dir.to_path_buf(),
        ..StackConfig::default()
    }
}

#[test]
fn file_output_is_plain_and_three_part() {
    let dir = temp_dir("plain");
    let stack = LogStack::create_with("plain", config_in(&dir)).unwrap();

    stack.info(Some("starting up"), None);
    stack.error(
        Some("load failed"),
        Some(&ErrorReport::with_trace("missing file", "caused by: ENOENT\n")),
    );

    let text = fs::read_to_string(stack.file_path().unwrap()).unwrap();
    assert!(!text.contains('\x1b'), "file sink must never carry color");
    assert!(text.contains("[INFO      ] "));
    assert!(text.contains("<MESSAGE>: starting up"));
    assert!(text.contains("<EXCEPTION>: missing file"));
    assert!(text.contains("<TRACEBACK>: \ncaused by: ENOENT"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn file_name_carries_todays_date() {
    let dir = temp_dir("dated");
    let stack = LogStack::create_with("dated", config_in(&dir)).unwrap();

    let expected = format!("{}-dated.log", Local::now().format("%F"));
    let name = stack.file_path().unwrap().file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name, expected);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn per_sink_thresholds_filter_independently() {
    let dir = temp_dir("thresholds");
    let config = StackConfig {
        file: Severity::Error,
        ..config_in(&dir)
    };
    let stack = LogStack::create_with("thresholds", config).unwrap();

    stack.debug(Some("too quiet"), None);
    stack.warning(Some("still too quiet"), None);
    stack.error(Some("loud enough"), None);
    stack.critical(Some("very loud"), None);

    let text = fs::read_to_string(stack.file_path().unwrap()).unwrap();
    assert!(!text.contains("too quiet"));
    assert!(!text.contains("still too quiet"));
    assert!(text.contains("loud enough"));
    assert!(text.contains("very loud"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn console_records_are_badge_wrapped() {
    let buf = SharedBuf::default();
    let console = WriterSink::from_writer(SinkKind::Console, Severity::Debug, Box::new(buf.clone()));
    let stack = LogStack::with_sinks("console", Severity::Debug, vec![Box::new(console)]);

    stack.warning(Some("careful"), None);

    let out = buf.contents();
    // Yellow badge right after the timestamp, reset closing the body.
    assert!(out.contains("] \x1b[0;30;43m[WARNING   ]\x1b[0m\x1b[0;33m"));
    assert!(out.trim_end().ends_with("\x1b[0m"));
}

#[test]
fn same_name_facades_share_one_file() {
    let dir = temp_dir("shared");
    let first = LogStack::create_with("shared", config_in(&dir)).unwrap();
    let second = LogStack::create_with("shared", config_in(&dir)).unwrap();

    assert_eq!(first.file_path(), second.file_path());

    first.info(Some("from first"), None);
    second.info(Some("from second"), None);

    let text = fs::read_to_string(first.file_path().unwrap()).unwrap();
    assert!(text.contains("from first"));
    assert!(text.contains("from second"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn registry_deduplicates_by_name() {
    let dir = temp_dir("registry");
    let registry = Registry::new();

    let a = registry.get_or_create("svc", config_in(&dir)).unwrap();
    let b = registry.get_or_create("svc", config_in(&dir)).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    a.info(Some("once"), None);
    let text = fs::read_to_string(a.file_path().unwrap()).unwrap();
    assert_eq!(text.matches("once").count(), 1, "no duplicate sinks");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn records_in_file_round_trip_through_parse() {
    let dir = temp_dir("roundtrip");
    let stack = LogStack::create_with("roundtrip", config_in(&dir)).unwrap();

    stack.critical(Some("shutting down"), Some(&ErrorReport::new("disk full")));

    let text = fs::read_to_string(stack.file_path().unwrap()).unwrap();
    let block_start = text.find("\n\t<MESSAGE>").unwrap();
    let parsed = AssembledRecord::parse(&text[block_start..]).unwrap();
    assert_eq!(parsed.message, "shutting down");
    assert_eq!(parsed.exception, "disk full");
    assert_eq!(parsed.trace, "\n"); // the record's trailing newline

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn macros_format_and_dispatch() {
    let dir = temp_dir("macros");
    let stack = LogStack::create_with("macros", config_in(&dir)).unwrap();

    stack_info!(stack, "peer {} connected", 7);
    stack_error!(stack, "lost {} packets", 3);

    let text = fs::read_to_string(stack.file_path().unwrap()).unwrap();
    assert!(text.contains("<MESSAGE>: peer 7 connected"));
    assert!(text.contains("<MESSAGE>: lost 3 packets"));

    let _ = fs::remove_dir_all(dir);
}
