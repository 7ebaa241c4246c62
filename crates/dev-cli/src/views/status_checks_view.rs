use crate::actions::{Action, CheckListAction, ContextAction, GlobalAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, CheckOutcome, CheckResult};
use crate::views::{header, View, ViewId};
use dev_cli_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows of the body that are not list: title, gap, help
pub const LIST_CHROME_HEIGHT: u16 = 3;

/// Status checks of a pull request that cannot be merged
#[derive(Debug, Clone)]
pub struct StatusChecksView;

impl View for StatusChecksView {
    fn view_id(&self) -> ViewId {
        ViewId::StatusChecks
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let (header_area, body) = header::split(state, area);
        header::render_header(state, header_area, f);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // readiness title
                Constraint::Length(1),
                Constraint::Min(0), // list
                Constraint::Length(1), // help
            ])
            .split(body);

        let theme = &state.theme;
        f.render_widget(
            Paragraph::new(Span::styled(state.readiness_title.as_str(), theme.title())),
            chunks[0],
        );
        render_list(state, chunks[2], f);
        f.render_widget(Paragraph::new(help_line(theme)), chunks[3]);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION
            | PanelCapabilities::VIM_NAVIGATION_BINDINGS
            | PanelCapabilities::SCROLL_VERTICAL
            | PanelCapabilities::ITEM_ACTIVATION
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CheckListAction::NavigateNext,
            NavigationAction::Previous => CheckListAction::NavigatePrevious,
            NavigationAction::ToTop => CheckListAction::NavigateToTop,
            NavigationAction::ToBottom => CheckListAction::NavigateToBottom,
        };
        Some(Action::Checks(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::Checks(CheckListAction::OpenSelected)),
            ContextAction::Back => Some(Action::Global(GlobalAction::Quit)),
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Checks(_) | Action::Navigate(_) | Action::ViewContext(_) | Action::Global(_)
        )
    }
}

fn render_list(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let list = &state.check_list;

    if list.items.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("no status checks", theme.subtle())),
            area,
        );
        return;
    }

    let mut lines = Vec::new();
    for (index, check) in list.visible_items() {
        let selected = index == list.selected;
        lines.extend(item_lines(check, selected, theme));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Label line and `<icon> <outcome>` line of one check
fn item_lines(check: &CheckResult, selected: bool, theme: &Theme) -> [Line<'static>; 2] {
    let (marker, label_style, description_style) = if selected {
        (
            Span::styled("│ ", theme.selected_item()),
            theme.selected_item(),
            theme.selected_item().remove_modifier(Modifier::BOLD),
        )
    } else {
        (
            Span::raw("  "),
            Style::default().add_modifier(Modifier::BOLD),
            theme.subtle(),
        )
    };

    let outcome = check.outcome_kind();
    [
        Line::from(vec![
            marker.clone(),
            Span::styled(check.label().to_string(), label_style),
        ]),
        Line::from(vec![
            marker,
            Span::styled(outcome.icon(), icon_style(outcome, theme)),
            Span::styled(format!(" {}", check.outcome()), description_style),
        ]),
    ]
}

fn icon_style(outcome: CheckOutcome, theme: &Theme) -> Style {
    match outcome {
        CheckOutcome::Success => theme.success(),
        CheckOutcome::Skipped => theme.skipped(),
        CheckOutcome::Failure => theme.failure(),
        CheckOutcome::Unknown => theme.unknown(),
    }
}

fn help_line(theme: &Theme) -> Line<'static> {
    let dot = Span::styled(" • ", theme.separator());
    Line::from(vec![
        Span::styled("j/k, up/down: navigate", theme.subtle()),
        dot.clone(),
        Span::styled("enter: open details", theme.subtle()),
        dot,
        Span::styled("q: quit", theme.subtle()),
    ])
}
