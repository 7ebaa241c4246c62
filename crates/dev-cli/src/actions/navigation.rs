//! Navigation actions - shared across views
//!
//! Views translate these into their own actions.

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow)
    Next,
    /// Navigate to previous item (k, up arrow)
    Previous,
    /// Navigate to top (g, home)
    ToTop,
    /// Navigate to bottom (G, end)
    ToBottom,
}
