//! Error types used by the sigvisor runtime and the caller-supplied handlers.
//!
//! This module defines two main error enums:
//!
//! - [`TaskError`] — failures of the run/shutdown handlers themselves.
//! - [`RuntimeError`] — failures of the coordination runtime, plus the
//!   handler outcome it surfaces to the caller.
//!
//! Both types provide an `as_label` helper for logs/metrics.

use thiserror::Error;

use crate::signals::Signal;

/// # Errors produced by the caller-supplied handlers.
///
/// Returned by [`RunTask`](crate::RunTask) and
/// [`ShutdownTask`](crate::ShutdownTask) implementations. A shutdown
/// handler that panics is contained at the supervisor boundary and
/// reported as [`TaskError::Panicked`].
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Handler execution failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The shutdown handler panicked; the payload was converted into this error.
    #[error("shutdown handler panicked: {message}")]
    Panicked {
        /// Text recovered from the panic payload.
        message: String,
    },
}

impl TaskError {
    /// Creates a [`TaskError::Fail`] from any displayable error.
    ///
    /// # Example
    /// ```
    /// use sigvisor::TaskError;
    ///
    /// let err = TaskError::fail("connection refused");
    /// assert_eq!(err.to_string(), "execution failed: connection refused");
    /// ```
    pub fn fail(error: impl std::fmt::Display) -> Self {
        TaskError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use sigvisor::TaskError;
    ///
    /// let err = TaskError::fail("boom");
    /// assert_eq!(err.as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Panicked { .. } => "task_panicked",
        }
    }
}

/// # Errors returned by [`Supervisor::run`](crate::Supervisor::run).
///
/// Either the runtime failed to wire itself to the OS signal-delivery
/// mechanism, or one of the handlers failed and its error is surfaced
/// per the shutdown-biased precedence rule.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Registering a listener for one of the configured signals failed.
    #[error("failed to register {signal} listener: {source}")]
    SignalRegistration {
        /// The signal whose registration failed.
        signal: Signal,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// A handler error surfaced to the caller.
    #[error(transparent)]
    Task(#[from] TaskError),
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::SignalRegistration { .. } => "signal_registration_failed",
            RuntimeError::Task(err) => err.as_label(),
        }
    }
}
