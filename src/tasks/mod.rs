//! Caller-supplied handlers: the supervised operation and its graceful
//! stop.
//!
//! This module provides the handler-related types:
//! - [`RunTask`] / [`ShutdownTask`] — traits for the two handlers
//! - [`RunFn`] / [`ShutdownFn`] — function-backed implementations
//! - [`RunRef`] / [`ShutdownRef`] — shared handles (`Arc<dyn …>`)

mod task;
mod task_fn;

pub use task::{RunRef, RunTask, ShutdownRef, ShutdownTask};
pub use task_fn::{RunFn, ShutdownFn};
