//! Handler traits for the supervised operation and its graceful stop.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::signals::Signal;

/// Shared handle to a run handler.
pub type RunRef = Arc<dyn RunTask>;

/// Shared handle to a shutdown handler.
pub type ShutdownRef = Arc<dyn ShutdownTask>;

/// # The primary, typically long-running operation.
///
/// Invoked exactly once per [`Supervisor::run`](crate::Supervisor::run)
/// call, awaited on the caller's task. The supervisor never cancels it:
/// a run handler that should stop on shutdown is expected to poll shared
/// state the shutdown handler mutates.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use sigvisor::{RunTask, TaskError};
///
/// struct Server;
///
/// #[async_trait]
/// impl RunTask for Server {
///     async fn run(&self) -> Result<(), TaskError> {
///         // serve until asked to stop...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait RunTask: Send + Sync + 'static {
    /// Executes the operation to completion.
    async fn run(&self) -> Result<(), TaskError>;
}

/// # The graceful-stop operation.
///
/// Invoked at most once per [`Supervisor::run`](crate::Supervisor::run)
/// call, on a separate task, and only if the run handler has not already
/// completed. Receives the signal that triggered shutdown. A panic here
/// is contained by the supervisor and converted into
/// [`TaskError::Panicked`].
#[async_trait]
pub trait ShutdownTask: Send + Sync + 'static {
    /// Performs the graceful stop for `signal`.
    async fn shutdown(&self, signal: Signal) -> Result<(), TaskError>;
}
