// Console Logger
//
// Info lines go to stdout so they can be piped; everything else to stderr.

use super::logger::{LogLevel, Logger};

#[derive(Debug)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn write(&self, level: LogLevel, msg: &str) {
        match level {
            LogLevel::Debug => eprintln!("[DEBUG] {}", msg),
            LogLevel::Info => println!("{}", msg),
            LogLevel::Warn | LogLevel::Error => eprintln!("{}", msg),
        }
    }
}
