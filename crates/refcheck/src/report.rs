//! Reporters: where scenario headers and assertion outcomes go

use tracing::{info, warn};

/// Sink for progress lines and assertion failures.
///
/// The runner calls `info` once per scenario header and once per passing
/// assertion, and `warn` once per failing assertion or faulted scenario.
pub trait Reporter {
    /// A success or progress line
    fn info(&mut self, text: &str);

    /// An assertion failure
    fn warn(&mut self, text: &str);
}

/// Reporter that emits through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&mut self, text: &str) {
        info!(target: "refcheck::report", "{}", text);
    }

    fn warn(&mut self, text: &str) {
        warn!(target: "refcheck::report", "{}", text);
    }
}

/// Severity of a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Sent via `info`
    Info,
    /// Sent via `warn`
    Warn,
}

/// Reporter that keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    lines: Vec<(Level, String)>,
}

impl MemoryReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in arrival order.
    pub fn lines(&self) -> &[(Level, String)] {
        &self.lines
    }

    /// Captured `info` lines.
    pub fn infos(&self) -> Vec<&str> {
        self.at(Level::Info)
    }

    /// Captured `warn` lines.
    pub fn warnings(&self) -> Vec<&str> {
        self.at(Level::Warn)
    }

    fn at(&self, level: Level) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, text: &str) {
        self.lines.push((Level::Info, text.to_string()));
    }

    fn warn(&mut self, text: &str) {
        self.lines.push((Level::Warn, text.to_string()));
    }
}
