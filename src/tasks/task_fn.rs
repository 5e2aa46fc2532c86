//! Function-backed handler implementations.
//!
//! [`RunFn`] and [`ShutdownFn`] wrap closures that produce a fresh
//! future per invocation. State shared between the two handlers belongs
//! in an explicit `Arc<...>` captured by both closures.
//!
//! ## Example
//! ```
//! use sigvisor::{RunFn, RunRef, TaskError};
//!
//! let task: RunRef = RunFn::arc(|| async {
//!     // do work...
//!     Ok::<_, TaskError>(())
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::signals::Signal;
use crate::tasks::task::{RunTask, ShutdownTask};

/// Function-backed run handler.
pub struct RunFn<F> {
    f: F,
}

impl<F> RunFn<F> {
    /// Creates a new function-backed run handler.
    ///
    /// Prefer [`RunFn::arc`] when you immediately need a
    /// [`RunRef`](crate::RunRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> RunTask for RunFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    async fn run(&self) -> Result<(), TaskError> {
        (self.f)().await
    }
}

/// Function-backed shutdown handler.
pub struct ShutdownFn<F> {
    f: F,
}

impl<F> ShutdownFn<F> {
    /// Creates a new function-backed shutdown handler.
    ///
    /// Prefer [`ShutdownFn::arc`] when you immediately need a
    /// [`ShutdownRef`](crate::ShutdownRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> ShutdownTask for ShutdownFn<F>
where
    F: Fn(Signal) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    async fn shutdown(&self, signal: Signal) -> Result<(), TaskError> {
        (self.f)(signal).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_fn_invokes_closure() {
        let task = RunFn::new(|| async { Err(TaskError::fail("boom")) });
        assert_eq!(task.run().await, Err(TaskError::fail("boom")));
    }

    #[tokio::test]
    async fn shutdown_fn_receives_signal() {
        let task = ShutdownFn::new(|signal: Signal| async move {
            assert_eq!(signal, Signal::Terminate);
            Ok(())
        });
        assert_eq!(task.shutdown(Signal::Terminate).await, Ok(()));
    }
}
