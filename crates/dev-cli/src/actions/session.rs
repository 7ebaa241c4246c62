//! Session termination actions

use crate::state::SessionExit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// End the session with the given summary
    Exit(SessionExit),
}
