use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::{Mutex, PoisonError},
};

use crate::log_sink::LogSink;

/// Sink that appends each line to a plain text file.
///
/// The file is opened once, at construction, in create+append mode. If it
/// cannot be opened the sink degrades to a no-op: every `write` is
/// swallowed and nothing is reported, matching the capability contract.
pub struct FileSink {
    file: Option<Mutex<File>>,
}

impl FileSink {
    /// Opens `path` for appending, creating the file if it is missing.
    ///
    /// Never fails; an unopenable path (e.g. a missing parent directory)
    /// yields a sink that silently drops every line.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
            .map(Mutex::new);
        Self { file }
    }

    /// Whether the underlying file was opened successfully.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl LogSink for FileSink {
    fn write(&self, line: &str) {
        if let Some(file) = &self.file {
            let mut f = file.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = writeln!(f, "{line}");
        }
    }
}
