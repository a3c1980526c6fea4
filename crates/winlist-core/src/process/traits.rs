//! Bar liveness trait definition.

use crate::process::types::BarHandle;

/// Answers "is the bar this publisher serves still running?".
///
/// The event loop asks after every refresh; `false` ends the loop normally.
pub trait BarProbe {
    fn is_alive(&self, bar: &BarHandle) -> bool;
}
