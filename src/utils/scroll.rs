//! Scroll math for the transcript panel.
//!
//! The transcript paragraph wraps long lines, so the scroll bound has to be
//! computed against wrapped rows, not source lines.

use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

/// Number of terminal rows `lines` occupy at `width` once wrapped. Matches
/// the paragraph's character wrapping closely enough for scroll clamping.
pub fn wrapped_row_count(lines: &[Line<'_>], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let mut rows = 0usize;
    for line in lines {
        let line_width: usize = line.spans.iter().map(|s| s.content.width()).sum();
        rows += line_width.div_ceil(width).max(1);
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Greatest valid scroll offset for content of `total_rows` in a viewport of
/// `viewport_rows`.
pub fn max_scroll_offset(total_rows: u16, viewport_rows: u16) -> u16 {
    total_rows.saturating_sub(viewport_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn short_lines_take_one_row_each() {
        let lines = vec![Line::from("one"), Line::from("two")];
        assert_eq!(wrapped_row_count(&lines, 80), 2);
    }

    #[test]
    fn long_lines_wrap() {
        let lines = vec![Line::from("x".repeat(25))];
        assert_eq!(wrapped_row_count(&lines, 10), 3);
    }

    #[test]
    fn empty_lines_still_occupy_a_row() {
        let lines = vec![Line::from(""), Line::from("")];
        assert_eq!(wrapped_row_count(&lines, 10), 2);
    }

    #[test]
    fn offset_is_zero_when_content_fits() {
        assert_eq!(max_scroll_offset(5, 10), 0);
        assert_eq!(max_scroll_offset(15, 10), 5);
    }
}
