//! # sigvisor
//!
//! **Sigvisor** runs a long-lived operation and coordinates its graceful
//! shutdown when the process receives an OS termination signal.
//!
//! The caller supplies two handlers: a **run handler** (the operation
//! itself) and a **shutdown handler** (the graceful stop). The shutdown
//! handler is invoked at most once, only if the run handler has not
//! already completed, and the two never race destructively.
//!
//! ## Architecture
//! ```text
//!            ┌────────────────────────────────────────────────┐
//!            │ Supervisor::run()                              │
//!            └──────┬─────────────────────────┬───────────────┘
//!                   ▼                         ▼
//!          caller's task               spawned listener
//!   ┌─────────────────────────┐  ┌─────────────────────────────────┐
//!   │ "run handler starting"  │  │ parked on SignalSource          │
//!   │ run handler …           │  │   (or the stand-down token)     │
//!   │ run_finished = true     │  │ signal received:                │
//!   │ "run handler complete"  │  │   run finished? → skip          │
//!   │ stand_down.cancel()     │  │   else invoke shutdown handler  │
//!   │ join listener  ◄────────┼──┤   (panics contained),           │
//!   │ pick outcome            │  │   record error,                 │
//!   └─────────────────────────┘  │   shutdown_finished = true      │
//!                                └─────────────────────────────────┘
//! ```
//!
//! ## Outcome precedence
//! If the shutdown path executed, [`Supervisor::run`] returns the
//! shutdown handler's outcome, even a clean one: long-running servers
//! routinely return an error when stopped from outside, so a clean
//! shutdown wins over a run error. Otherwise it returns the run
//! handler's result. Both failures are always logged through the
//! [`Log`] capability.
//!
//! ## Features
//! | Area          | Description                                          | Key types / traits               |
//! |---------------|------------------------------------------------------|----------------------------------|
//! | **Handlers**  | Define the operation and its graceful stop.          | [`RunTask`], [`ShutdownTask`], [`RunFn`], [`ShutdownFn`] |
//! | **Signals**   | Choose which termination signals trigger shutdown.   | [`Signal`], [`Config`], [`DEFAULT_SIGNALS`] |
//! | **Logging**   | Plug in a diagnostics sink.                          | [`Log`], [`NopLog`], [`StdLog`], [`CaptureLog`] |
//! | **Errors**    | Typed errors for handlers and the runtime.           | [`TaskError`], [`RuntimeError`]  |
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::time::Duration;
//!
//! use sigvisor::{Config, RunFn, ShutdownFn, Signal, StdLog, Supervisor, TaskError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let running = Arc::new(AtomicBool::new(true));
//!
//!     let poll = Arc::clone(&running);
//!     let sup = Supervisor::new(
//!         Config::default(), // SIGHUP + SIGTERM
//!         Arc::new(StdLog),
//!         RunFn::arc(move || {
//!             let running = Arc::clone(&poll);
//!             async move {
//!                 while running.load(Ordering::SeqCst) {
//!                     tokio::time::sleep(Duration::from_millis(250)).await;
//!                 }
//!                 Ok::<_, TaskError>(())
//!             }
//!         }),
//!         ShutdownFn::arc(move |_signal: Signal| {
//!             let running = Arc::clone(&running);
//!             async move {
//!                 running.store(false, Ordering::SeqCst);
//!                 Ok::<_, TaskError>(())
//!             }
//!         }),
//!     );
//!
//!     sup.run().await?;
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod loggers;
mod signals;
mod tasks;

// ---- Public re-exports ----

pub use config::{Config, DEFAULT_SIGNALS};
pub use crate::core::Supervisor;
pub use error::{RuntimeError, TaskError};
pub use loggers::{CaptureLog, Log, LogRef, NopLog, StdLog};
pub use signals::Signal;
pub use tasks::{RunFn, RunRef, RunTask, ShutdownFn, ShutdownRef, ShutdownTask};
