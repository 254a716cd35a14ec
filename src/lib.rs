//! Process-wide leveled logging with pluggable sinks.
//!
//! One [`Logger`] accepts leveled messages, filters them against a
//! configurable minimum level, renders each passing record once
//! (timestamp, call site, level, message), and fans the rendered line out
//! to every registered [`LogSink`] in registration order. Console, file,
//! in-memory, and no-op sinks are provided; anything implementing the
//! one-method [`LogSink`] trait can join them.
//!
//! ```
//! use std::sync::Arc;
//!
//! use logkit::{ConsoleSink, LogLevel, Logger, log_info};
//!
//! let logger = Logger::instance();
//! logger.set_level(LogLevel::Debug);
//! logger.add_sink(Arc::new(ConsoleSink));
//!
//! log_info!("listening on {}", "127.0.0.1:7000");
//! ```

/// Call-site capture for log invocations.
pub mod call_site;
/// Sink that writes to standard output.
pub mod console_sink;
/// Sink that appends to a file, degrading silently if it cannot be opened.
pub mod file_sink;
/// Severity levels and their ordering.
pub mod log_level;
/// Caller-facing leveled macros, feature-gated per level.
pub mod log_macros;
/// The in-memory representation of one log event.
pub mod log_record;
/// The sink capability trait.
pub mod log_sink;
/// The dispatch core: level filtering and sink fan-out.
pub mod logger;
/// Sink that captures lines in memory.
pub mod memory_sink;
/// Sink that discards everything.
pub mod noop_log_sink;
/// Rendering of records into one-line text.
pub mod record_format;

pub use call_site::CallSite;
pub use console_sink::ConsoleSink;
pub use file_sink::FileSink;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use log_sink::LogSink;
pub use logger::Logger;
pub use memory_sink::MemorySink;
pub use noop_log_sink::NoopLogSink;
pub use record_format::format_record;
