use chrono::{DateTime, Local};

use crate::{call_site::CallSite, log_level::LogLevel};

/// Represents a single log event between the level check and rendering.
///
/// This struct encapsulates the metadata associated with a log entry:
/// its severity, the wall-clock timestamp taken when it passed the level
/// filter, the call site that issued it, and the message content itself.
/// Records are ephemeral; the logger builds one per passing call, renders
/// it, and drops it.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// The severity level of the record.
    pub level: LogLevel,
    /// Wall-clock timestamp of the event, in local time.
    pub timestamp: DateTime<Local>,
    /// The message payload, already interpolated.
    pub message: String,
    /// Where the log call was issued.
    pub call_site: CallSite,
}

impl LogRecord {
    /// Creates a new `LogRecord` instance.
    ///
    /// # Arguments
    ///
    /// * `level` - The severity `LogLevel` of the record.
    /// * `message` - The message content. Accepts any type that implements `Into<String>`.
    /// * `call_site` - The captured origin of the log call.
    /// * `timestamp` - The wall-clock instant of the event.
    pub fn new(
        level: LogLevel,
        message: impl Into<String>,
        call_site: CallSite,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            level,
            timestamp,
            message: message.into(),
            call_site,
        }
    }
}
