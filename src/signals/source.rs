//! Subscription to the OS signal-delivery mechanism.
//!
//! [`SignalSource`] registers one listener per configured signal at
//! construction time, before the shutdown listener starts polling. The
//! runtime holds a delivered signal pending until the stream is first
//! polled, so an event that arrives in that window is not lost.

use crate::error::RuntimeError;
use crate::signals::Signal;

/// Listeners for the configured signal set.
#[cfg(unix)]
pub(crate) struct SignalSource {
    streams: Vec<(Signal, tokio::signal::unix::Signal)>,
}

#[cfg(unix)]
impl SignalSource {
    /// Registers a listener for every signal in `set`.
    pub(crate) fn subscribe(set: &[Signal]) -> Result<Self, RuntimeError> {
        let mut streams = Vec::with_capacity(set.len());
        for &signal in set {
            let stream = tokio::signal::unix::signal(signal.kind())
                .map_err(|source| RuntimeError::SignalRegistration { signal, source })?;
            streams.push((signal, stream));
        }
        Ok(Self { streams })
    }

    /// Waits until any of the subscribed signals is delivered.
    ///
    /// `streams` is never empty here: the supervisor substitutes the
    /// default pair before subscribing.
    pub(crate) async fn recv(&mut self) -> Signal {
        let waits: Vec<_> = self
            .streams
            .iter_mut()
            .map(|(signal, stream)| {
                let signal = *signal;
                Box::pin(async move {
                    if stream.recv().await.is_none() {
                        // Stream closed: drop out of the race for good.
                        std::future::pending::<()>().await;
                    }
                    signal
                })
            })
            .collect();

        let (signal, _, _) = futures::future::select_all(waits).await;
        signal
    }
}

/// Non-unix platforms only have ctrl-c, reported as
/// [`Signal::Interrupt`] regardless of the configured set.
#[cfg(not(unix))]
pub(crate) struct SignalSource;

#[cfg(not(unix))]
impl SignalSource {
    pub(crate) fn subscribe(_set: &[Signal]) -> Result<Self, RuntimeError> {
        Ok(Self)
    }

    pub(crate) async fn recv(&mut self) -> Signal {
        if tokio::signal::ctrl_c().await.is_ok() {
            return Signal::Interrupt;
        }
        std::future::pending().await
    }
}
