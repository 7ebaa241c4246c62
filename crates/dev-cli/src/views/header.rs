//! Pull request header shared by the status check and merge views

use crate::state::{AppState, LayoutState, MARGIN_HORIZONTAL, MARGIN_VERTICAL};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Split `area` into header and body following the session layout
pub fn split(state: &AppState, area: Rect) -> (Rect, Rect) {
    let layout = LayoutState::compute(
        area.width,
        area.height,
        &state.header_line(),
        state.is_draft(),
    );

    let header = Rect {
        x: area.x + MARGIN_HORIZONTAL,
        y: area.y + MARGIN_VERTICAL,
        width: layout.header_width,
        height: layout.header_height,
    }
    .intersection(area);

    let body = Rect {
        x: area.x + MARGIN_HORIZONTAL,
        y: area.y + MARGIN_VERTICAL * 2 + layout.header_height,
        width: layout.body_width,
        height: layout.body_height,
    }
    .intersection(area);

    (header, body)
}

/// `# title  (head -> base)` with highlighted branches, plus a DRAFT marker
pub fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(pr) = &state.pull_request else {
        return;
    };
    let theme = &state.theme;

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("# {}  (", pr.title), theme.title()),
        Span::styled(pr.head_branch.clone(), theme.branch_highlight()),
        Span::styled(" -> ", theme.title()),
        Span::styled(pr.base_branch.clone(), theme.branch_highlight()),
        Span::styled(")", theme.title()),
    ])];

    if pr.is_draft {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "DRAFT",
            theme.subtle().add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
