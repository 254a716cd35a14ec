use crate::log_record::LogRecord;

/// Renders a [`LogRecord`] into the one-line layout every sink receives:
///
/// ```text
/// [2025-11-02 02:30:45] [src/session.rs:214] [myapp::session] [INFO] peer connected
/// ```
///
/// The timestamp is local time at whole-second resolution, without an
/// offset. The message passes through untouched, embedded newlines
/// included; normalization is a sink concern, not a formatter concern.
/// Identical records render identically.
#[must_use]
pub fn format_record(record: &LogRecord) -> String {
    format!(
        "[{}] [{}:{}] [{}] [{}] {}",
        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
        record.call_site.file,
        record.call_site.line,
        record.call_site.target,
        record.level.as_str(),
        record.message,
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::{call_site::CallSite, log_level::LogLevel};
    use chrono::{Local, TimeZone};

    fn fixed_record(level: LogLevel, message: &str) -> LogRecord {
        let ts = Local
            .with_ymd_and_hms(2025, 11, 21, 14, 30, 45)
            .single()
            .expect("unambiguous local time");
        LogRecord::new(
            level,
            message,
            CallSite {
                file: "src/session.rs",
                line: 214,
                target: "myapp::session",
            },
            ts,
        )
    }

    #[test]
    fn renders_fixed_layout() {
        let record = fixed_record(LogLevel::Info, "peer connected");
        assert_eq!(
            format_record(&record),
            "[2025-11-21 14:30:45] [src/session.rs:214] [myapp::session] [INFO] peer connected"
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let record = fixed_record(LogLevel::Error, "boom");
        assert_eq!(format_record(&record), format_record(&record));
    }

    #[test]
    fn message_passes_through_unescaped() {
        let record = fixed_record(LogLevel::Warn, "line one\nline two");
        let line = format_record(&record);
        assert!(line.ends_with("[WARN] line one\nline two"));
    }
}
