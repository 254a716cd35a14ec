/// The location in calling code that issued a log call.
///
/// Captured by [`call_site!`](crate::call_site!) at the macro invocation
/// site. The logger core is a shared singleton far from the caller, so it
/// never inspects its own location; it only forwards what the caller
/// captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Source file, as produced by `file!()`.
    pub file: &'static str,
    /// 1-based line number, as produced by `line!()`.
    pub line: u32,
    /// Module path of the invocation, as produced by `module_path!()`.
    ///
    /// Rust has no macro for the enclosing function name, so the module
    /// path stands in for it.
    pub target: &'static str,
}

/// Captures the current source location as a [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::call_site::CallSite {
            file: file!(),
            line: line!(),
            target: module_path!(),
        }
    };
}
