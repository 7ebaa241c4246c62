//! Session state, owned by the store and changed only by reducers

mod app;
mod check_list;
mod exit;
mod layout;
mod merge_session;
mod snapshot;
mod spinner;

pub use app::{readiness_title, AppState, SessionViewMode};
pub use check_list::CheckListState;
pub use exit::SessionExit;
pub use layout::{LayoutState, MARGIN_HORIZONTAL, MARGIN_VERTICAL};
pub use merge_session::{MergePhase, MergeSession};
pub use snapshot::{CheckOutcome, CheckResult, PrSnapshot};
pub use spinner::SpinnerState;
