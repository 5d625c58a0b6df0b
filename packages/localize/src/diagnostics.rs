//! Diagnostics Module
//!
//! Collects the warnings and errors produced while extracting, parsing and
//! rendering translation files. One collector lives for one command
//! invocation and is drained exactly once at the end.

use std::fmt;

/// Severity of a collected diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "{}", self.message),
            Severity::Warning => write!(f, "Warning: {}", self.message),
            Severity::Error => write!(f, "Error: {}", self.message),
        }
    }
}

/// Append-only collector of diagnostics.
///
/// Work that runs in parallel gets its own collector and is folded back in
/// with [`Diagnostics::merge`] in a fixed order, so the final report does not
/// depend on scheduling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Info, message));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Warning, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::new(Severity::Error, message));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.messages.push(diagnostic);
    }

    /// Move every message of `other` to the end of this collector.
    pub fn merge(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Error)
    }

    /// Process exit status: 1 when any error was recorded.
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            1
        } else {
            0
        }
    }

    /// Take every collected message, leaving the collector empty.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.messages)
    }

    /// Append an `ERRORS:` / `WARNINGS:` summary to `message`.
    pub fn format_diagnostics(&self, message: &str) -> String {
        let mut out = message.to_string();
        let errors = self.lines_with(Severity::Error);
        let warnings = self.lines_with(Severity::Warning);
        if !errors.is_empty() {
            out.push_str("\nERRORS:\n");
            out.push_str(&errors.join("\n"));
        }
        if !warnings.is_empty() {
            out.push_str("\nWARNINGS:\n");
            out.push_str(&warnings.join("\n"));
        }
        out
    }

    fn lines_with(&self, severity: Severity) -> Vec<String> {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .map(|m| format!(" - {}", m.message))
            .collect()
    }
}
