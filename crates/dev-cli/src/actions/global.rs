//! Global actions - not tied to any specific component

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Periodic tick for the spinner animation
    Tick,
    /// Quit the session
    Quit,
}
