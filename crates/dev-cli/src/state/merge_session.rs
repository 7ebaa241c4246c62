//! Merge strategy selector state
//!
//! ```text
//! Selecting --confirm--> Counting --ticks hit 0--> Merging --> Merged
//!     ^                      |
//!     +--- after delay --- Cancelling <--cancel--+
//! ```
//!
//! Every confirmation opens a new countdown generation. Timer wake-ups carry
//! the generation they were armed for and are ignored once it is outdated.

use gh_client::MergeMethod;

/// Strategies offered to the user, in display order
pub const MERGE_STRATEGIES: [MergeMethod; 3] = MergeMethod::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePhase {
    /// Picking a strategy
    Selecting,
    /// Strategy confirmed, counting down to the merge
    Counting,
    /// Countdown aborted, waiting before the selector resets
    Cancelling,
    /// Merge call in flight
    Merging,
    /// Merge call succeeded
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSession {
    pub focused_index: usize,
    pub confirmed: bool,
    pub countdown_ticks: u32,
    pub phase: MergePhase,
    pub generation: u64,
    initial_ticks: u32,
}

impl MergeSession {
    pub fn new(initial_ticks: u32) -> Self {
        Self {
            focused_index: 0,
            confirmed: false,
            countdown_ticks: initial_ticks,
            phase: MergePhase::Selecting,
            generation: 0,
            initial_ticks,
        }
    }

    pub fn strategies(&self) -> &'static [MergeMethod] {
        &MERGE_STRATEGIES
    }

    /// Chosen strategy
    ///
    /// # Panics
    /// When called before the user confirmed a strategy.
    pub fn strategy(&self) -> MergeMethod {
        assert!(
            self.confirmed,
            "merge strategy read before a strategy was confirmed"
        );
        MERGE_STRATEGIES[self.focused_index]
    }

    pub fn focus_next(&mut self) {
        if self.phase == MergePhase::Selecting {
            self.focused_index = (self.focused_index + 1) % MERGE_STRATEGIES.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if self.phase == MergePhase::Selecting {
            self.focused_index = self
                .focused_index
                .checked_sub(1)
                .unwrap_or(MERGE_STRATEGIES.len() - 1);
        }
    }

    /// Generation the next confirmation will start
    pub fn next_generation(&self) -> u64 {
        self.generation.wrapping_add(1)
    }

    /// Freeze the focused strategy and start counting down
    pub fn confirm(&mut self) -> bool {
        if self.phase != MergePhase::Selecting {
            return false;
        }
        self.confirmed = true;
        self.countdown_ticks = self.initial_ticks;
        self.generation = self.next_generation();
        self.phase = MergePhase::Counting;
        true
    }

    /// A countdown tick for `generation` would count down
    pub fn accepts_tick(&self, generation: u64) -> bool {
        self.phase == MergePhase::Counting && self.generation == generation
    }

    /// Countdown is over and the merge has not been started yet
    pub fn is_due(&self) -> bool {
        self.phase == MergePhase::Counting && self.countdown_ticks == 0
    }

    /// Count down one tick; stale or late ticks are ignored
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.accepts_tick(generation) || self.countdown_ticks == 0 {
            return false;
        }
        self.countdown_ticks -= 1;
        true
    }

    pub fn cancel(&mut self) -> bool {
        if self.phase != MergePhase::Counting {
            return false;
        }
        self.phase = MergePhase::Cancelling;
        true
    }

    /// Back to a fresh, unconfirmed selector once the cancellation notice was shown
    pub fn finish_cancel(&mut self, generation: u64) -> bool {
        if self.phase != MergePhase::Cancelling || self.generation != generation {
            return false;
        }
        self.reset();
        true
    }

    pub fn start_merge(&mut self) -> bool {
        if !self.is_due() {
            return false;
        }
        self.phase = MergePhase::Merging;
        true
    }

    pub fn mark_merged(&mut self) -> bool {
        if self.phase != MergePhase::Merging {
            return false;
        }
        self.phase = MergePhase::Merged;
        true
    }

    pub fn is_merged(&self) -> bool {
        self.phase == MergePhase::Merged
    }

    fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::new(self.initial_ticks);
        self.generation = generation;
    }
}

impl Default for MergeSession {
    fn default() -> Self {
        Self::new(2)
    }
}
