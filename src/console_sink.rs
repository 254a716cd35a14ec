use std::io::{self, Write};

use crate::log_sink::LogSink;

/// Sink that writes each line to standard output.
///
/// Holding the stdout lock for the duration of one `writeln!` keeps a
/// line from being torn by concurrent writers.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, line: &str) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{line}");
    }
}
