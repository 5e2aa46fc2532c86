//! # Supervisor: runs the primary operation and coordinates its
//! signal-triggered graceful shutdown.
//!
//! [`Supervisor::run`] awaits the run handler on the caller's task while
//! a spawned listener parks on the configured signals. Whichever path
//! reaches a terminal decision first determines the observed outcome,
//! but both always run to completion before `run()` returns.
//!
//! ```text
//! run():
//!   ├─ substitute DEFAULT_SIGNALS if none configured (logged)
//!   ├─ SignalSource::subscribe(signals)      (registration buffers
//!   │                                         an early delivery)
//!   ├─ spawn listener ──────────────┐
//!   │                               │ parked: signal OR stand-down
//!   ├─ "run handler starting"       │
//!   ├─ run handler … returns        │ on signal:
//!   ├─ run_finished = true          │   run finished? → skip
//!   ├─ "run handler complete"       │   else invoke shutdown handler,
//!   ├─ stand_down.cancel()          │   contain panics, record error,
//!   └─ join listener ◄──────────────┘   shutdown_finished = true
//!      └─ outcome: shutdown handler's result if the shutdown path
//!         executed, else the run handler's
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::listener;
use crate::core::state::RunState;
use crate::error::RuntimeError;
use crate::loggers::LogRef;
use crate::signals::{Signal, SignalSource};
use crate::tasks::{RunRef, ShutdownRef};

/// Coordinates one run handler and one shutdown handler.
///
/// The fields are the whole configuration surface; build one with
/// [`Supervisor::new`] or as a struct literal.
pub struct Supervisor {
    /// Runtime configuration (the signal set).
    pub cfg: Config,
    /// Sink for lifecycle and failure diagnostics.
    pub logger: LogRef,
    /// The supervised operation.
    pub run: RunRef,
    /// The graceful-stop operation.
    pub shutdown: ShutdownRef,
}

impl Supervisor {
    /// Creates a supervisor from its four collaborators.
    pub fn new(cfg: Config, logger: LogRef, run: RunRef, shutdown: ShutdownRef) -> Self {
        Self {
            cfg,
            logger,
            run,
            shutdown,
        }
    }

    /// Runs the supervised operation until it completes, and its
    /// shutdown handler if a configured signal arrives first.
    ///
    /// Returns the shutdown handler's outcome whenever the shutdown path
    /// executed, even a clean one: long-running servers routinely return
    /// an error when stopped from outside, so a clean shutdown wins over
    /// a run error. Otherwise returns the run handler's result. Both
    /// failures are always logged regardless of which is returned.
    ///
    /// All coordination state is fresh per call; nothing persists across
    /// invocations.
    pub async fn run(&self) -> Result<(), RuntimeError> {
        let signals = self.effective_signals();
        let source = SignalSource::subscribe(&signals)?;

        let state = Arc::new(RunState::new());
        let stand_down = CancellationToken::new();
        let listener = tokio::spawn(listener::listen(
            source,
            Arc::clone(&state),
            stand_down.clone(),
            Arc::clone(&self.logger),
            Arc::clone(&self.shutdown),
        ));

        self.logger.info("run handler starting");
        let run_result = self.run.run().await;
        state.run_finished.set();
        self.logger.info("run handler complete");
        if let Err(err) = &run_result {
            self.logger.error(&format!("run handler failed: {err}"));
        }

        // Completion barrier: the listener either stands down (still
        // parked) or finishes the shutdown attempt it committed to.
        stand_down.cancel();
        let _ = listener.await;

        if state.shutdown_finished.is_set() {
            return match state.shutdown_error.take() {
                Some(err) => Err(err.into()),
                None => Ok(()),
            };
        }
        run_result.map_err(RuntimeError::from)
    }

    /// Resolves the configured signal set, logging the default
    /// substitution when none was supplied.
    fn effective_signals(&self) -> Vec<Signal> {
        if self.cfg.uses_default_signals() {
            let defaults = self.cfg.effective_signals();
            let names: Vec<&str> = defaults.iter().map(Signal::as_str).collect();
            self.logger.info(&format!(
                "no signals configured; defaulting to {}",
                names.join(", ")
            ));
            return defaults;
        }
        self.cfg.effective_signals()
    }
}
