//! Status check list actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Open the selected check's details URL in the browser
    OpenSelected,
}
