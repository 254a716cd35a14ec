#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use logkit::{FileSink, LogLevel, LogSink, Logger, MemorySink, logger_error, logger_info};

#[test]
fn debug_is_dropped_and_info_passes_at_info_level() {
    let logger = Logger::new(LogLevel::Info);
    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());

    logger.log(LogLevel::Debug, "x", logkit::call_site!());
    assert!(sink.is_empty());

    logger.log(LogLevel::Info, "hello", logkit::call_site!());
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("[INFO] hello"), "got: {}", lines[0]);
}

#[test]
fn two_sinks_both_receive_an_error() {
    let logger = Logger::new(LogLevel::Info);
    let first = Arc::new(MemorySink::new());
    let second = Arc::new(MemorySink::new());
    logger.add_sink(first.clone());
    logger.add_sink(second.clone());

    logger_error!(logger, "boom");

    for sink in [&first, &second] {
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR] boom"), "got: {}", lines[0]);
    }
}

#[test]
fn macros_interpolate_and_capture_this_file() {
    let logger = Logger::new(LogLevel::Info);
    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());

    logger_info!(logger, "peer {} connected after {}ms", "10.0.0.3", 42);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].ends_with("[INFO] peer 10.0.0.3 connected after 42ms"),
        "got: {}",
        lines[0]
    );
    assert!(lines[0].contains("log_dispatch.rs:"), "got: {}", lines[0]);
}

#[test]
fn macros_skip_interpolation_below_the_minimum_level() {
    let logger = Logger::new(LogLevel::Error);
    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());

    logger_info!(logger, "not rendered {}", 1);

    assert!(sink.is_empty());
}

#[cfg(not(feature = "log-trace"))]
#[test]
fn trace_macro_compiles_out_under_default_features() {
    let logger = Logger::new(LogLevel::Trace);
    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());

    logkit::logger_trace!(logger, "invisible {}", 1);

    assert!(sink.is_empty());
}

#[test]
fn file_sink_persists_rendered_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    let logger = Logger::new(LogLevel::Info);
    logger.add_sink(Arc::new(FileSink::new(&path)));

    logger_info!(logger, "started");
    logger_error!(logger, "exit code {}", 3);

    let contents = std::fs::read_to_string(&path).expect("log file readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] started"), "got: {}", lines[0]);
    assert!(lines[1].ends_with("[ERROR] exit code 3"), "got: {}", lines[1]);
}

#[test]
fn unwritable_file_sink_never_raises() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("app.log");

    let logger = Logger::new(LogLevel::Info);
    let sink = FileSink::new(&path);
    assert!(!sink.is_open());
    logger.add_sink(Arc::new(sink));

    logger_info!(logger, "dropped on the floor");

    assert!(!path.exists());
}

#[test]
fn custom_sink_implementations_plug_in() {
    struct Counter(std::sync::atomic::AtomicUsize);

    impl LogSink for Counter {
        fn write(&self, _line: &str) {
            self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    }

    let logger = Logger::new(LogLevel::Info);
    let counter = Arc::new(Counter(std::sync::atomic::AtomicUsize::new(0)));
    logger.add_sink(counter.clone());

    logger_info!(logger, "one");
    logger_info!(logger, "two");

    assert_eq!(counter.0.load(std::sync::atomic::Ordering::Relaxed), 2);
}
