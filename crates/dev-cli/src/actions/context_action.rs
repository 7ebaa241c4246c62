//! Context-sensitive actions
//!
//! `Confirm` (Enter, Space) means:
//! - Status checks: open the selected check in the browser
//! - Merge selector: choose the focused strategy
//!
//! `Back` (q, Esc) means:
//! - Loading and status checks: quit
//! - Merge selector: quit while selecting, cancel while counting down

/// Semantic actions that views interpret differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item
    Confirm,
    /// Leave the current step
    Back,
}
