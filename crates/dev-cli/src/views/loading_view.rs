use crate::actions::{Action, ContextAction, GlobalAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, MARGIN_HORIZONTAL, MARGIN_VERTICAL};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Shown while the status query is running
#[derive(Debug, Clone)]
pub struct LoadingView;

impl View for LoadingView {
    fn view_id(&self) -> ViewId {
        ViewId::Loading
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let inner = area.inner(Margin::new(MARGIN_HORIZONTAL, MARGIN_VERTICAL));

        let lines = vec![
            Line::from(vec![
                Span::raw("checking CI status"),
                Span::styled(state.spinner.current(), theme.spinner()),
            ]),
            Line::from(""),
            Line::from(Span::styled("q: quit", theme.subtle())),
        ];

        f.render_widget(Paragraph::new(lines), inner);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        // Nothing to navigate until the status arrives
        PanelCapabilities::empty()
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Back => Some(Action::Global(GlobalAction::Quit)),
            ContextAction::Confirm => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_) | Action::ViewContext(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_render::{contains, render_rows};

    #[test]
    fn test_renders_spinner_text() {
        let mut state = AppState::default();
        state.spinner.frame = 2;
        let rows = render_rows(&state, 40, 6);
        assert!(contains(&rows, "checking CI status.."));
        assert!(contains(&rows, "q: quit"));
    }

    #[test]
    fn test_back_quits() {
        let state = AppState::default();
        assert_eq!(
            LoadingView.translate_context_action(ContextAction::Back, &state),
            Some(Action::Global(GlobalAction::Quit))
        );
        assert_eq!(
            LoadingView.translate_context_action(ContextAction::Confirm, &state),
            None
        );
    }
}
