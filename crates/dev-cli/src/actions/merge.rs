//! Merge strategy selector actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Move focus to the next strategy (wraps)
    FocusNext,
    /// Move focus to the previous strategy (wraps)
    FocusPrevious,
    /// Choose the focused strategy and start the countdown
    Confirm,
    /// Countdown wake-up for the given countdown generation
    CountdownTick { generation: u64 },
    /// Abort the running countdown
    Cancel,
    /// Cancellation notice has been visible long enough
    CancelElapsed { generation: u64 },
    /// Countdown reached zero, invoke the merge
    Start,
    /// Merge call returned successfully
    Completed,
    /// Merge call returned an error
    Failed(String),
    /// Leave the selector without merging
    Quit,
}
