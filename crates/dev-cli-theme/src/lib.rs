use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
///
/// Built once at startup and handed to every view through the app state.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Accent colors
    pub accent_primary: Color,
    pub accent_highlight_bg: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_separator: Color,

    // Status colors
    pub status_success: Color,
    pub status_skipped: Color,
    pub status_failure: Color,
    pub status_unknown: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Accents
            accent_primary: Color::Rgb(0xF9, 0x74, 0x15),
            accent_highlight_bg: Color::Rgb(0x45, 0x1a, 0x03),

            // Text
            text_primary: tailwind::SLATE.c100,
            text_muted: Color::Indexed(241),
            text_separator: Color::Indexed(236),

            // Status
            status_success: Color::Indexed(42),
            status_skipped: Color::Indexed(245),
            status_failure: Color::Indexed(196),
            status_unknown: Color::Indexed(245),

            // Selection
            selected_bg: Color::Rgb(0x45, 0x1a, 0x03),
            selected_fg: Color::Rgb(0xF9, 0x74, 0x15),
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the pull request title line
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for branch names in the header (`head -> base`)
    pub fn branch_highlight(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .bg(self.accent_highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for help lines and secondary text
    pub fn subtle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the dot between help entries
    pub fn separator(&self) -> Style {
        Style::default().fg(self.text_separator)
    }

    /// Style for an unfocused merge button
    pub fn button(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for the focused merge button
    pub fn button_focused(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .bg(self.accent_highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected row of a list
    pub fn selected_item(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the spinner and other progress indicators
    pub fn spinner(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.status_success)
    }

    pub fn skipped(&self) -> Style {
        Style::default().fg(self.status_skipped)
    }

    pub fn failure(&self) -> Style {
        Style::default().fg(self.status_failure)
    }

    pub fn unknown(&self) -> Style {
        Style::default().fg(self.status_unknown)
    }

    /// Style for fatal error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_failure)
            .add_modifier(Modifier::BOLD)
    }
}
