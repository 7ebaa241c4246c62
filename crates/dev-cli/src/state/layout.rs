//! Screen layout: margins, header and body area
//!
//! ```text
//! +------------------------------------+
//! |  # title  (head -> base)           |  header (wrapped, + DRAFT)
//! |                                    |
//! |  body of the active view           |
//! |                                    |
//! +------------------------------------+
//! ```

pub const MARGIN_HORIZONTAL: u16 = 2;
pub const MARGIN_VERTICAL: u16 = 1;
/// Header never wraps wider than this
pub const MAX_HEADER_WIDTH: u16 = 120;
/// Rows the DRAFT marker adds below the title (blank line + marker)
const DRAFT_MARKER_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub width: u16,
    pub height: u16,
    pub header_width: u16,
    pub header_height: u16,
    pub body_width: u16,
    pub body_height: u16,
}

impl LayoutState {
    /// Layout for a terminal of `width` x `height` with the given header
    pub fn compute(width: u16, height: u16, header: &str, is_draft: bool) -> Self {
        let header_width = header_wrap_width(width);
        let mut header_height = if header.is_empty() {
            0
        } else {
            wrapped_line_count(header, usize::from(header_width)) as u16
        };
        if is_draft {
            header_height += DRAFT_MARKER_HEIGHT;
        }

        // top margin, header, gap, body, bottom margin
        let chrome = MARGIN_VERTICAL * 3 + header_height;

        Self {
            width,
            height,
            header_width,
            header_height,
            body_width: width.saturating_sub(MARGIN_HORIZONTAL * 2),
            body_height: height.saturating_sub(chrome),
        }
    }
}

/// Width the header wraps at: terminal width minus margins, capped
pub fn header_wrap_width(width: u16) -> u16 {
    width
        .saturating_sub(MARGIN_HORIZONTAL * 2)
        .min(MAX_HEADER_WIDTH)
}

/// Number of lines `text` takes when greedily word wrapped at `width` columns
///
/// Words longer than the width are broken across lines.
pub fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return text.lines().count().max(1);
    }

    text.lines()
        .map(|line| {
            let mut lines = 1;
            let mut current = 0;
            for word in line.split_whitespace() {
                let len = word.chars().count();
                let needed = if current == 0 { len } else { current + 1 + len };
                if needed <= width {
                    current = needed;
                } else if len <= width {
                    lines += 1;
                    current = len;
                } else {
                    // Long word: continue on the current line, then break it
                    let start = if current == 0 { 0 } else { current + 1 };
                    let total = start + len;
                    lines += (total - 1) / width;
                    current = (total - 1) % width + 1;
                }
            }
            lines
        })
        .sum::<usize>()
        .max(1)
}
