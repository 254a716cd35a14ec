use std::sync::{
    Arc, OnceLock, PoisonError, RwLock,
    atomic::{AtomicU8, Ordering},
};

use chrono::Local;

use crate::{
    call_site::CallSite, log_level::LogLevel, log_record::LogRecord, log_sink::LogSink,
    record_format::format_record,
};

/// Minimum level the process-wide logger starts with.
const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// Synchronous fan-out logger.
///
/// Holds the configured minimum level and an ordered registry of sinks.
/// [`log`](Self::log) filters by level, stamps and renders the record
/// once, then hands the same line to every registered sink in
/// registration order.
///
/// Most code goes through [`Logger::instance`] and the level macros.
/// Tests and embedding applications can construct their own logger with
/// [`Logger::new`] and share it behind an `Arc` instead.
///
/// # Thread safety
///
/// All methods take `&self` and are safe to call concurrently. The level
/// lives in an atomic (a `set_level` racing a `log` may or may not be
/// observed by that call); the registry lives behind an `RwLock`, so
/// concurrent `log` calls fan out in parallel while `add_sink` briefly
/// takes the write side.
pub struct Logger {
    level: AtomicU8,
    sinks: RwLock<Vec<Arc<dyn LogSink>>>,
}

impl Logger {
    /// Creates a logger with no sinks and the given minimum level.
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level.as_u8()),
            sinks: RwLock::new(Vec::new()),
        }
    }

    /// Returns the process-wide logger, creating it on first access.
    ///
    /// Construction happens exactly once even when first accesses race.
    /// The instance starts at [`LogLevel::Info`] with no sinks; it lives
    /// until process exit.
    #[must_use]
    pub fn instance() -> &'static Logger {
        INSTANCE.get_or_init(|| Logger::new(DEFAULT_LEVEL))
    }

    /// Replaces the minimum level. Last write wins; subsequent `log`
    /// calls observe the new value, in-flight ones may not.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Snapshot of the current minimum level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` would currently be dispatched.
    ///
    /// The level macros call this before interpolating their arguments,
    /// so filtered-out calls never build the message string.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Appends a sink to the registry. Every later record that passes the
    /// level filter is delivered to it, after all earlier-registered sinks.
    pub fn add_sink(&self, sink: Arc<dyn LogSink>) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }

    /// Dispatches one message.
    ///
    /// Returns immediately, with no allocation and no sink calls, when
    /// `level` is below the current minimum. Otherwise the record is
    /// stamped with the current local time, rendered once, and written to
    /// every registered sink in registration order.
    ///
    /// Never panics and has no error channel: sink failures stay inside
    /// the sink.
    pub fn log(&self, level: LogLevel, message: &str, call_site: CallSite) {
        if !self.enabled(level) {
            return;
        }

        let record = LogRecord::new(level, message, call_site, Local::now());
        let line = format_record(&record);

        let sinks = self.sinks.read().unwrap_or_else(PoisonError::into_inner);
        for sink in sinks.iter() {
            sink.write(&line);
        }
    }
}
