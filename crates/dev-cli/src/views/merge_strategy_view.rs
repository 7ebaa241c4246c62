use crate::actions::{Action, ContextAction, MergeAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, MergePhase};
use crate::views::{header, View, ViewId};
use dev_cli_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Strategy picker and merge countdown for a clean pull request
#[derive(Debug, Clone)]
pub struct MergeStrategyView;

impl View for MergeStrategyView {
    fn view_id(&self) -> ViewId {
        ViewId::MergeStrategy
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let (header_area, body) = header::split(state, area);
        header::render_header(state, header_area, f);

        let lines = match state.merge.phase {
            MergePhase::Selecting => selection_lines(state),
            MergePhase::Counting if state.merge.countdown_ticks > 0 => {
                let text = format!("merging in {}", state.merge.countdown_ticks);
                progress_lines(state, &text, "q, esc, ctrl+c: cancel")
            }
            MergePhase::Counting | MergePhase::Merging => progress_lines(state, "merging", ""),
            MergePhase::Cancelling => progress_lines(state, "cancelling merge", ""),
            MergePhase::Merged => vec![Line::from(vec![
                Span::styled("✓", state.theme.success()),
                Span::raw(" pull request merged"),
            ])],
        };

        f.render_widget(Paragraph::new(lines), body);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if state.merge.phase == MergePhase::Selecting {
            PanelCapabilities::ITEM_NAVIGATION
                | PanelCapabilities::VIM_NAVIGATION_BINDINGS
                | PanelCapabilities::ITEM_ACTIVATION
        } else {
            PanelCapabilities::empty()
        }
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        match nav {
            NavigationAction::Next => Some(Action::Merge(MergeAction::FocusNext)),
            NavigationAction::Previous => Some(Action::Merge(MergeAction::FocusPrevious)),
            NavigationAction::ToTop | NavigationAction::ToBottom => None,
        }
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        match (action, state.merge.phase) {
            (ContextAction::Confirm, MergePhase::Selecting) => {
                Some(Action::Merge(MergeAction::Confirm))
            }
            (ContextAction::Back, MergePhase::Selecting) => Some(Action::Merge(MergeAction::Quit)),
            (ContextAction::Back, MergePhase::Counting) => Some(Action::Merge(MergeAction::Cancel)),
            // An in flight merge cannot be cancelled
            _ => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Merge(_) | Action::Navigate(_) | Action::ViewContext(_) | Action::Global(_)
        )
    }
}

fn selection_lines(state: &AppState) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let session = &state.merge;
    let label_width = session
        .strategies()
        .iter()
        .map(|strategy| strategy.as_str().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("✓", theme.success()),
            Span::raw(" All checks have passed"),
        ]),
        Line::from(""),
        Line::from("choose a merge strategy"),
    ];

    for (index, strategy) in session.strategies().iter().enumerate() {
        let label = format!("{:<width$}", strategy.as_str(), width = label_width);
        lines.push(button(label, index == session.focused_index, theme));
    }

    lines.push(Line::from(""));
    lines.push(help_line(
        &["j/k, up/down: select", "enter: choose", "q, esc: quit"],
        theme,
    ));
    lines
}

fn progress_lines(state: &AppState, text: &str, help: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw(text.to_string()),
        Span::styled(state.spinner.current(), state.theme.spinner()),
    ])];
    if !help.is_empty() {
        lines.push(Line::from(""));
        lines.push(help_line(&[help], &state.theme));
    }
    lines
}

fn button(label: String, focused: bool, theme: &Theme) -> Line<'static> {
    if focused {
        Line::from(Span::styled(format!("[ {} ]", label), theme.button_focused()))
    } else {
        Line::from(vec![
            Span::styled("[ ", theme.button()),
            Span::raw(label),
            Span::styled(" ]", theme.button()),
        ])
    }
}

fn help_line(entries: &[&str], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" • ", theme.separator()));
        }
        spans.push(Span::styled(entry.to_string(), theme.subtle()));
    }
    Line::from(spans)
}
