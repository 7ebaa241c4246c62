//! Status check list state

use super::CheckResult;

/// Terminal rows taken by one list item (label, description, spacing)
pub const ITEM_HEIGHT: u16 = 3;

/// Scrollable list of status checks
///
/// Navigation is clamped at both ends, it never wraps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckListState {
    pub items: Vec<CheckResult>,
    pub selected: usize,
    /// Index of the first visible item
    pub scroll_offset: usize,
    pub width: u16,
    pub height: u16,
}

impl CheckListState {
    /// Replace all items, keeping the selection when it is still valid
    pub fn set_items(&mut self, items: Vec<CheckResult>) {
        self.items = items;
        self.selected = self.clamp_index(self.selected);
        self.scroll_offset = self.scroll_offset.min(self.selected);
        self.ensure_selected_visible();
    }

    pub fn selected_item(&self) -> Option<&CheckResult> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        self.selected = self.clamp_index(self.selected.saturating_add(1));
        self.ensure_selected_visible();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selected_visible();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.ensure_selected_visible();
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
        self.ensure_selected_visible();
    }

    /// Reflow to a new size, the selection is kept and stays visible
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.ensure_selected_visible();
    }

    /// Number of items that fit, at least one
    pub fn visible_rows(&self) -> usize {
        usize::from((self.height / ITEM_HEIGHT).max(1))
    }

    /// Items currently on screen with their absolute index
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &CheckResult)> {
        self.items
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.visible_rows())
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.items.len().saturating_sub(1))
    }

    fn ensure_selected_visible(&mut self) {
        let rows = self.visible_rows();
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + rows {
            self.scroll_offset = self.selected + 1 - rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<CheckResult> {
        (0..count)
            .map(|i| CheckResult {
                name: format!("check-{}", i),
                ..Default::default()
            })
            .collect()
    }

    fn list(count: usize) -> CheckListState {
        let mut state = CheckListState::default();
        state.set_items(items(count));
        state
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = list(3);

        state.select_previous();
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.selected, 2);

        state.select_first();
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_any_navigation_sequence_stays_in_bounds() {
        let mut state = list(4);
        // Deterministic pseudo random walk
        let mut seed: u32 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match (seed >> 16) % 4 {
                0 => state.select_next(),
                1 => state.select_previous(),
                2 => state.select_first(),
                _ => state.select_last(),
            }
            assert!(state.selected < state.items.len());
        }
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut state = list(0);
        state.select_next();
        state.select_last();
        state.select_previous();
        assert_eq!(state.selected, 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_set_items_clamps_selection() {
        let mut state = list(5);
        state.select_last();
        assert_eq!(state.selected, 4);

        state.set_items(items(2));
        assert_eq!(state.selected, 1);

        state.set_items(items(6));
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_resize_keeps_selection_visible() {
        let mut state = list(10);
        state.resize(80, ITEM_HEIGHT * 3);
        state.select_last();
        assert_eq!(state.selected, 9);
        assert_eq!(state.scroll_offset, 7);

        state.resize(40, ITEM_HEIGHT);
        assert_eq!(state.selected, 9);
        assert_eq!(state.scroll_offset, 9);

        state.resize(120, ITEM_HEIGHT * 20);
        assert_eq!(state.selected, 9);
        let visible: Vec<usize> = state.visible_items().map(|(i, _)| i).collect();
        assert!(visible.contains(&9));
    }

    #[test]
    fn test_scrolls_up_when_selection_moves_above() {
        let mut state = list(10);
        state.resize(80, ITEM_HEIGHT * 2);
        state.select_last();
        state.select_first();
        assert_eq!(state.scroll_offset, 0);
    }
}
