//! The logging capability the supervisor writes diagnostics to.
//!
//! [`Log`] is a minimal sink with two severities: informational
//! lifecycle lines and handler failures. Three implementations are
//! provided:
//! - [`NopLog`] — discards everything
//! - [`StdLog`] — info to stdout, errors to stderr
//! - [`CaptureLog`] — records lines in memory for test assertions

mod capture;
mod log;
mod writer;

pub use capture::CaptureLog;
pub use log::{Log, LogRef};
pub use writer::{NopLog, StdLog};
