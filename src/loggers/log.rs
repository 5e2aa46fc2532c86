//! The logging capability trait.

use std::sync::Arc;

/// Shared handle to a logger.
pub type LogRef = Arc<dyn Log>;

/// # A passive sink for supervisor diagnostics.
///
/// The supervisor requires exactly two operations. Implementations must
/// not panic and should not block the caller.
pub trait Log: Send + Sync + 'static {
    /// Records an informational message.
    fn info(&self, message: &str);

    /// Records an error-severity message.
    fn error(&self, message: &str);
}
