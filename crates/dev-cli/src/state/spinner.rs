//! Ellipsis spinner shown while waiting

const FRAMES: [&str; 4] = ["", ".", "..", "..."];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerState {
    pub frame: usize,
}

impl SpinnerState {
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn current(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }
}
