//! Diagnostic sink capability
//!
//! The converter reports unsupported constructs through an explicit sink passed
//! in by the host rather than a process-wide logger. Sinks must not panic and
//! must not block: a failing diagnostic channel is never allowed to abort a
//! conversion.

use std::io::Write;
use std::sync::Mutex;

/// Capability the host supplies for conversion diagnostics.
///
/// `warn` is used for the deduplicated unsupported-node summary emitted once
/// per document conversion; `info` is used for best-effort fallbacks such as
/// unrecognized inline styles.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
}

/// Default sink: best-effort writes to stderr. Write failures are swallowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&self, message: &str) {
        let _ = writeln!(std::io::stderr(), "warning: {message}");
    }

    fn info(&self, message: &str) {
        let _ = writeln!(std::io::stderr(), "info: {message}");
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
}

/// Severity of a captured diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Info,
}

/// One captured diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// In-memory sink for tests and embedding hosts that surface diagnostics
/// through their own channels.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured entries, in emission order.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warn)
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(Severity::Info)
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message)
            .collect()
    }

    fn record(&self, severity: Severity, message: &str) {
        // A poisoned lock means another sink user panicked; dropping the entry
        // is preferable to propagating the panic into the conversion.
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Diagnostic {
                severity,
                message: message.to_string(),
            });
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.record(Severity::Warn, message);
    }

    fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }
}
