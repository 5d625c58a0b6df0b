//! Logging Module
//!
//! Console output of the `locl` commands.

pub mod console_logger;
pub mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};

use localize::{Diagnostic, Severity};

/// Print a collected diagnostic through `logger`.
pub fn log_diagnostic(logger: &dyn Logger, diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Info => logger.info(&diagnostic.to_string()),
        Severity::Warning => logger.warn(&diagnostic.to_string()),
        Severity::Error => logger.error(&diagnostic.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        level: LogLevel,
        lines: Mutex<Vec<(LogLevel, String)>>,
    }

    impl Recorder {
        fn new(level: LogLevel) -> Self {
            Recorder {
                level,
                lines: Mutex::new(Vec::new()),
            }
        }
    }

    impl Logger for Recorder {
        fn level(&self) -> LogLevel {
            self.level
        }

        fn write(&self, level: LogLevel, msg: &str) {
            self.lines.lock().unwrap().push((level, msg.to_string()));
        }
    }

    #[test]
    fn test_order_levels() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_pick_level_from_verbosity() {
        assert_eq!(LogLevel::for_verbosity(true), LogLevel::Debug);
        assert_eq!(LogLevel::for_verbosity(false), LogLevel::Info);
        assert!(!ConsoleLogger::new(LogLevel::for_verbosity(false)).is_enabled(LogLevel::Debug));
    }

    #[test]
    fn test_drop_lines_below_level() {
        let logger = Recorder::new(LogLevel::Info);
        logger.debug("hidden");
        logger.info("shown");
        logger.error("failed");
        let lines = logger.lines.lock().unwrap().clone();
        assert_eq!(
            lines,
            vec![(LogLevel::Info, "shown".to_string()), (LogLevel::Error, "failed".to_string())]
        );
    }

    #[test]
    fn test_route_diagnostics_by_severity() {
        let logger = Recorder::new(LogLevel::Debug);
        log_diagnostic(&logger, &Diagnostic::new(Severity::Warning, "no locale"));
        log_diagnostic(&logger, &Diagnostic::new(Severity::Error, "bad id"));
        let lines = logger.lines.lock().unwrap().clone();
        assert_eq!(
            lines,
            vec![
                (LogLevel::Warn, "Warning: no locale".to_string()),
                (LogLevel::Error, "Error: bad id".to_string()),
            ]
        );
    }

    #[test]
    fn test_keep_null_logger_silent() {
        let logger = NullLogger::new();
        assert!(!logger.is_enabled(LogLevel::Error));
        logger.error("ignored");
    }
}
