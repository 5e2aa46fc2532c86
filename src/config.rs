//! Supervisor configuration.
//!
//! Provides [`Config`], the signal set that triggers the shutdown
//! handler.
//!
//! ## Sentinel values
//! - `signals` empty → listen on [`DEFAULT_SIGNALS`]; the substitution
//!   happens (and is logged) when
//!   [`Supervisor::run`](crate::Supervisor::run) starts.

use crate::signals::Signal;

/// Signals used when none are configured: hangup and termination.
pub const DEFAULT_SIGNALS: [Signal; 2] = [Signal::Hangup, Signal::Terminate];

/// Configuration for the supervisor runtime.
///
/// ## Field semantics
/// - `signals`: signals that trigger the shutdown handler
///   (empty = [`DEFAULT_SIGNALS`])
///
/// Fields are public for flexibility. Prefer the helper accessors to
/// avoid sprinkling the empty-set sentinel check across the codebase.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Signals that trigger the shutdown handler.
    ///
    /// Empty means [`DEFAULT_SIGNALS`]. Fixed once `run()` begins.
    pub signals: Vec<Signal>,
}

impl Config {
    /// Creates a configuration with an explicit signal set.
    pub fn with_signals(signals: impl Into<Vec<Signal>>) -> Self {
        Self {
            signals: signals.into(),
        }
    }

    /// Whether the default pair will be substituted at startup.
    #[inline]
    pub fn uses_default_signals(&self) -> bool {
        self.signals.is_empty()
    }

    /// Returns the signal set `run()` will actually listen on.
    pub fn effective_signals(&self) -> Vec<Signal> {
        if self.signals.is_empty() {
            DEFAULT_SIGNALS.to_vec()
        } else {
            self.signals.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_falls_back_to_defaults() {
        let cfg = Config::default();
        assert!(cfg.uses_default_signals());
        assert_eq!(cfg.effective_signals(), DEFAULT_SIGNALS.to_vec());
    }

    #[test]
    fn explicit_set_is_used_verbatim() {
        let cfg = Config::with_signals([Signal::Alarm]);
        assert!(!cfg.uses_default_signals());
        assert_eq!(cfg.effective_signals(), vec![Signal::Alarm]);
    }
}
