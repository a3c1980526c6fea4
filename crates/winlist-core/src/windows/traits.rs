//! Window query trait definition.

use crate::windows::types::WindowRecord;

/// Source of the focused desktop's windows.
pub trait WindowQuery {
    /// Windows on the focused desktop, in window-manager order.
    ///
    /// Never fails: an unreachable window manager yields an empty list.
    fn focused_desktop_windows(&self) -> Vec<WindowRecord>;
}
