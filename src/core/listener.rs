//! The shutdown-listener task.
//!
//! Parks on the signal source until either a signal arrives or the run
//! path tells it to stand down. Once the signal branch wins the select,
//! the listener is committed: stand-down is only honored while parked,
//! so a shutdown attempt in flight always runs to completion before the
//! supervisor joins it.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;

use crate::core::state::RunState;
use crate::error::TaskError;
use crate::loggers::{Log, LogRef};
use crate::signals::{Signal, SignalSource};
use crate::tasks::{ShutdownRef, ShutdownTask};

/// Waits for a signal and drives the shutdown handler.
pub(crate) async fn listen(
    mut source: SignalSource,
    state: Arc<RunState>,
    stand_down: CancellationToken,
    logger: LogRef,
    shutdown: ShutdownRef,
) {
    let signal = tokio::select! {
        signal = source.recv() => signal,
        // Run handler finished without a signal; nothing to shut down.
        _ = stand_down.cancelled() => return,
    };

    handle_signal(signal, &state, logger.as_ref(), shutdown.as_ref()).await;
}

/// Decides whether the shutdown handler fires for `signal`, and runs it.
pub(crate) async fn handle_signal(
    signal: Signal,
    state: &RunState,
    logger: &dyn Log,
    shutdown: &dyn ShutdownTask,
) {
    if state.run_finished.is_set() {
        logger.info("run handler already complete; skipping shutdown handler");
        return;
    }

    logger.info(&format!("received shutdown signal: {signal}"));
    logger.info("invoking shutdown handler");

    let result = match AssertUnwindSafe(shutdown.shutdown(signal)).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(panic_error(payload)),
    };

    logger.info("shutdown handler complete");
    if let Err(err) = result {
        logger.error(&format!("shutdown handler failed: {err}"));
        state.shutdown_error.store(err);
    }
    state.shutdown_finished.set();
}

/// Converts a contained panic payload into an ordinary handler error.
///
/// A payload that already is a [`TaskError`] is preserved as-is; string
/// payloads keep their text; anything else is opaque.
fn panic_error(payload: Box<dyn Any + Send>) -> TaskError {
    match payload.downcast::<TaskError>() {
        Ok(err) => *err,
        Err(payload) => {
            let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
                (*msg).to_string()
            } else if let Some(msg) = payload.downcast_ref::<String>() {
                msg.clone()
            } else {
                "unknown panic payload".to_string()
            };
            TaskError::Panicked { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::loggers::CaptureLog;
    use crate::tasks::ShutdownFn;

    #[tokio::test]
    async fn skips_when_run_already_finished() {
        let state = RunState::new();
        state.run_finished.set();
        let log = CaptureLog::new();

        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let shutdown = ShutdownFn::new(move |_signal: Signal| {
            let counted = Arc::clone(&counted);
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        });

        handle_signal(Signal::Terminate, &state, &log, &shutdown).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!state.shutdown_finished.is_set());
        assert!(
            log.infos()
                .iter()
                .any(|line| line.contains("skipping shutdown handler"))
        );
    }

    #[tokio::test]
    async fn executes_and_records_failure() {
        let state = RunState::new();
        let log = CaptureLog::new();
        let shutdown =
            ShutdownFn::new(|_signal: Signal| async { Err(TaskError::fail("close failed")) });

        handle_signal(Signal::Alarm, &state, &log, &shutdown).await;

        assert!(state.shutdown_finished.is_set());
        assert_eq!(
            state.shutdown_error.take(),
            Some(TaskError::fail("close failed"))
        );
        assert!(
            log.infos()
                .iter()
                .any(|line| line == "received shutdown signal: SIGALRM")
        );
        assert!(log.errors().iter().any(|line| line.contains("close failed")));
    }

    #[tokio::test]
    async fn contains_panic_and_preserves_error_payload() {
        let state = RunState::new();
        let log = CaptureLog::new();
        let shutdown = ShutdownFn::new(|_signal: Signal| async {
            std::panic::panic_any(TaskError::fail("pool poisoned"))
        });

        handle_signal(Signal::Pipe, &state, &log, &shutdown).await;

        assert!(state.shutdown_finished.is_set());
        assert_eq!(
            state.shutdown_error.take(),
            Some(TaskError::fail("pool poisoned"))
        );
    }

    #[test]
    fn panic_payload_conversion_ladder() {
        assert_eq!(
            panic_error(Box::new(TaskError::fail("kept"))),
            TaskError::fail("kept")
        );
        assert_eq!(
            panic_error(Box::new("static text")),
            TaskError::Panicked {
                message: "static text".into()
            }
        );
        assert_eq!(
            panic_error(Box::new(String::from("owned text"))),
            TaskError::Panicked {
                message: "owned text".into()
            }
        );
        assert_eq!(
            panic_error(Box::new(42_u32)),
            TaskError::Panicked {
                message: "unknown panic payload".into()
            }
        );
    }
}
