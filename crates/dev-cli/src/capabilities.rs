//! Panel capability system
//!
//! Views declare what kind of input they can take right now. The keyboard
//! middleware only turns keys into actions a view has declared support for,
//! so e.g. arrow keys do nothing while a merge countdown is running.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a panel can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Panel can scroll vertically (jump to top/bottom)
        const SCROLL_VERTICAL = 1 << 0;

        /// Panel supports vim-style navigation keybindings (j, k, g, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 1;

        /// Panel can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 2;

        /// Panel has a primary action on the focused item (Enter, Space)
        const ITEM_ACTIVATION = 1 << 3;
    }
}

impl PanelCapabilities {
    /// Check if panel supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if panel supports vim-style navigation (j/k)
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION | Self::VIM_NAVIGATION_BINDINGS)
    }

    /// Check if panel supports jumping to the first/last item
    ///
    /// Requires vertical scrolling; `g`/`G` additionally need vim bindings
    pub fn supports_vertical_jumps(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION | Self::SCROLL_VERTICAL)
    }

    pub fn supports_item_activation(self) -> bool {
        self.contains(Self::ITEM_ACTIVATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_navigation_requires_item_navigation() {
        assert!(!PanelCapabilities::VIM_NAVIGATION_BINDINGS.supports_vim_navigation());
        assert!((PanelCapabilities::VIM_NAVIGATION_BINDINGS
            | PanelCapabilities::ITEM_NAVIGATION)
            .supports_vim_navigation());
    }

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.supports_item_navigation());
        assert!(!caps.supports_item_activation());
        assert!(!caps.supports_vertical_jumps());
    }
}
