//! Browser Middleware
//!
//! Opens the details page of the selected status check.

use crate::actions::{Action, CheckListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;
use tokio::runtime::Handle;

pub struct BrowserMiddleware {
    runtime: Handle,
}

impl BrowserMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

/// Details page of the selected check, if it has one
fn selected_details_url(state: &AppState) -> Option<String> {
    state
        .check_list
        .selected_item()
        .and_then(|check| check.details_url.clone())
}

impl Middleware for BrowserMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::Checks(CheckListAction::OpenSelected) = action {
            match selected_details_url(state) {
                Some(url) => {
                    log::info!("Opening {} in browser", url);
                    self.runtime.spawn(open_url(url));
                }
                None => log::debug!("Selected check has no details page"),
            }
        }

        true
    }
}
