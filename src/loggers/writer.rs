//! Built-in log sinks.

use crate::loggers::Log;

/// Discards every message.
#[derive(Default)]
pub struct NopLog;

impl Log for NopLog {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Writes info lines to stdout and error lines to stderr.
#[derive(Default)]
pub struct StdLog;

impl Log for StdLog {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}
