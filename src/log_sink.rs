/// Capability for anything that can emit one rendered log line.
///
/// `write` has no error channel: a sink that cannot emit (closed file,
/// broken pipe) swallows the condition. Implementations must be safe to
/// call from multiple threads at once without tearing a line; whole lines
/// interleaving across threads is acceptable.
pub trait LogSink: Send + Sync {
    fn write(&self, line: &str);
}
