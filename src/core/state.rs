//! Synchronized completion state shared between the run path and the
//! shutdown listener.
//!
//! Each cell has a single writer and any number of readers, and is never
//! reset within one `run()` call.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::TaskError;

/// Write-once boolean cell.
#[derive(Default)]
pub(crate) struct Flag(AtomicBool);

impl Flag {
    pub(crate) fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Write-at-most-once error cell.
#[derive(Default)]
pub(crate) struct ErrorCell(Mutex<Option<TaskError>>);

impl ErrorCell {
    pub(crate) fn store(&self, err: TaskError) {
        let mut slot = self.0.lock().expect("error cell lock poisoned");
        debug_assert!(slot.is_none(), "error cell written twice");
        *slot = Some(err);
    }

    pub(crate) fn take(&self) -> Option<TaskError> {
        self.0.lock().expect("error cell lock poisoned").take()
    }
}

/// Completion state for one `run()` invocation.
#[derive(Default)]
pub(crate) struct RunState {
    /// Set once the run handler has returned.
    pub(crate) run_finished: Flag,
    /// Set once the shutdown handler was invoked and finished (or its
    /// panic was contained). Doubles as the shutdown-executed marker for
    /// the outcome-precedence decision.
    pub(crate) shutdown_finished: Flag,
    /// Failure of the shutdown handler, if any.
    pub(crate) shutdown_error: ErrorCell,
}

impl RunState {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_clear_and_latch() {
        let state = RunState::new();
        assert!(!state.run_finished.is_set());
        assert!(!state.shutdown_finished.is_set());

        state.run_finished.set();
        state.run_finished.set();
        assert!(state.run_finished.is_set());
        assert!(!state.shutdown_finished.is_set());
    }

    #[test]
    fn error_cell_round_trips() {
        let cell = ErrorCell::default();
        assert_eq!(cell.take(), None);

        cell.store(TaskError::fail("boom"));
        assert_eq!(cell.take(), Some(TaskError::fail("boom")));
        assert_eq!(cell.take(), None);
    }
}
