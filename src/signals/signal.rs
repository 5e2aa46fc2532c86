//! Signal identifiers recognized by the supervisor.

use std::fmt;

#[cfg(unix)]
use tokio::signal::unix::SignalKind;

/// A termination-class OS signal the supervisor can listen for.
///
/// The variants mirror the portable signals exposed by
/// [`tokio::signal::unix::SignalKind`]. [`Display`](fmt::Display)
/// renders the conventional `SIG*` name, which is what the supervisor
/// logs when a signal arrives.
///
/// # Example
/// ```
/// use sigvisor::Signal;
///
/// assert_eq!(Signal::Terminate.to_string(), "SIGTERM");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// `SIGALRM`
    Alarm,
    /// `SIGCHLD`
    Child,
    /// `SIGHUP`
    Hangup,
    /// `SIGINT`
    Interrupt,
    /// `SIGIO`
    Io,
    /// `SIGPIPE`
    Pipe,
    /// `SIGQUIT`
    Quit,
    /// `SIGTERM`
    Terminate,
    /// `SIGUSR1`
    UserDefined1,
    /// `SIGUSR2`
    UserDefined2,
}

impl Signal {
    /// Returns the conventional name of the signal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Alarm => "SIGALRM",
            Signal::Child => "SIGCHLD",
            Signal::Hangup => "SIGHUP",
            Signal::Interrupt => "SIGINT",
            Signal::Io => "SIGIO",
            Signal::Pipe => "SIGPIPE",
            Signal::Quit => "SIGQUIT",
            Signal::Terminate => "SIGTERM",
            Signal::UserDefined1 => "SIGUSR1",
            Signal::UserDefined2 => "SIGUSR2",
        }
    }

    /// Maps the identifier to the tokio registration kind.
    #[cfg(unix)]
    pub(crate) fn kind(&self) -> SignalKind {
        match self {
            Signal::Alarm => SignalKind::alarm(),
            Signal::Child => SignalKind::child(),
            Signal::Hangup => SignalKind::hangup(),
            Signal::Interrupt => SignalKind::interrupt(),
            Signal::Io => SignalKind::io(),
            Signal::Pipe => SignalKind::pipe(),
            Signal::Quit => SignalKind::quit(),
            Signal::Terminate => SignalKind::terminate(),
            Signal::UserDefined1 => SignalKind::user_defined1(),
            Signal::UserDefined2 => SignalKind::user_defined2(),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_conventional_names() {
        assert_eq!(Signal::Hangup.to_string(), "SIGHUP");
        assert_eq!(Signal::Terminate.to_string(), "SIGTERM");
        assert_eq!(Signal::UserDefined2.to_string(), "SIGUSR2");
    }

    #[cfg(unix)]
    #[test]
    fn kind_mapping_matches_tokio_presets() {
        assert_eq!(Signal::Alarm.kind(), SignalKind::alarm());
        assert_eq!(Signal::Hangup.kind(), SignalKind::hangup());
        assert_eq!(Signal::Terminate.kind(), SignalKind::terminate());
    }
}
