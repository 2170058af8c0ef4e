//! Fixed-width line formatting.
//!
//! Pure functions — (text, width) → String. No I/O. The engine decides
//! what to render; these decide what each line looks like.
//!
//! `width` is the frame width in terminal columns, excluding the trailing
//! border column: the footer and every selection line span `width + 1`
//! columns. Text is measured in display columns, not bytes.

use unicode_width::UnicodeWidthStr;

/// Centered title bounded by asterisk runs.
pub fn title_line(title: &str, width: usize) -> String {
    let adjust = width.saturating_sub(title.width()) / 2;
    if adjust > 1 {
        format!("{} {} {}", "*".repeat(adjust - 1), title, "*".repeat(adjust))
    } else {
        format!("{}{}{}", "*".repeat(adjust), title, "*".repeat(adjust))
    }
}

/// Body row: text centered between single border asterisks.
pub fn body_line(text: &str, width: usize) -> String {
    let adjust = width.saturating_sub(text.width()) / 2;
    let pad = " ".repeat(adjust);
    format!("*{pad}{text}{pad}*")
}

/// Selection row: highlight marker, 2-wide row number, left-justified
/// text, space padding out to `width + 1` columns with a closing border.
pub fn select_line(text: &str, row: usize, selected: bool, width: usize) -> String {
    let marker = if selected { "->" } else { "  " };
    let prefix = format!("{marker}{row:>2}: ");
    let used = prefix.width() + text.width();
    let pad = " ".repeat(width.saturating_sub(used).saturating_sub(1));
    format!("*{prefix}{text}{pad}*")
}

/// Closing border: a full line of asterisks, one wider than `width`.
pub fn footer_line(width: usize) -> String {
    "*".repeat(width + 1)
}

// ============================================================================
// FRAMES
// ============================================================================

/// Plain rendering of a titled block: title, one body line per row, footer.
pub fn frame_group(title: &str, rows: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(title_line(title, width));
    for row in rows {
        lines.push(body_line(row, width));
    }
    lines.push(footer_line(width));
    lines
}

/// Choose-loop rendering: title, one selection line per row (1-based,
/// highlight on `cursor`), footer. The navigation hint is not part of the
/// frame.
pub fn frame_choices(title: &str, rows: &[String], cursor: usize, width: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(title_line(title, width));
    for (index, row) in rows.iter().enumerate() {
        let number = index + 1;
        lines.push(select_line(row, number, number == cursor, width));
    }
    lines.push(footer_line(width));
    lines
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_centered_between_asterisk_runs() {
        // adjust = (40 - 2) / 2 = 19
        let expected = format!("{} HW {}", "*".repeat(18), "*".repeat(19));
        assert_eq!(title_line("HW", 40), expected);
    }

    #[test]
    fn title_wider_than_frame_degrades_to_bare_text() {
        let long = "a".repeat(50);
        assert_eq!(title_line(&long, 40), long);
    }

    #[test]
    fn body_text_is_centered_between_borders() {
        // adjust = (40 - 5) / 2 = 17
        let expected = format!("*{}Hello{}*", " ".repeat(17), " ".repeat(17));
        assert_eq!(body_line("Hello", 40), expected);
    }

    #[test]
    fn body_line_honors_configured_width() {
        // adjust = (10 - 2) / 2 = 4
        assert_eq!(body_line("ok", 10), "*    ok    *");
    }

    #[test]
    fn selected_row_carries_the_marker() {
        let line = select_line("tea", 1, true, 40);
        assert_eq!(line, format!("*-> 1: tea{}*", " ".repeat(30)));
        assert_eq!(line.len(), 41);
    }

    #[test]
    fn unselected_row_has_blank_marker() {
        let line = select_line("coffee", 2, false, 40);
        assert_eq!(line, format!("*   2: coffee{}*", " ".repeat(27)));
        assert_eq!(line.len(), 41);
    }

    #[test]
    fn row_numbers_are_right_aligned_in_two_columns() {
        let line = select_line("x", 10, false, 40);
        assert!(line.starts_with("*  10: x"));
    }

    #[test]
    fn footer_is_one_wider_than_the_frame() {
        assert_eq!(footer_line(40), "*".repeat(41));
        assert_eq!(footer_line(10), "*".repeat(11));
    }

    #[test]
    fn wide_characters_count_as_display_columns() {
        // "你好" is 4 columns wide: adjust = (40 - 4) / 2 = 18
        let expected = format!("*{}你好{}*", " ".repeat(18), " ".repeat(18));
        assert_eq!(body_line("你好", 40), expected);
    }

    #[test]
    fn frame_group_is_title_rows_footer() {
        let rows = vec!["one".to_string(), "two".to_string()];
        let lines = frame_group("G", &rows, 40);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], title_line("G", 40));
        assert_eq!(lines[1], body_line("one", 40));
        assert_eq!(lines[2], body_line("two", 40));
        assert_eq!(lines[3], footer_line(40));
    }

    #[test]
    fn frame_group_with_no_rows_still_has_title_and_footer() {
        let lines = frame_group("G", &[], 40);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], title_line("G", 40));
        assert_eq!(lines[1], footer_line(40));
    }

    #[test]
    fn frame_choices_highlights_exactly_the_cursor_row() {
        let rows = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let lines = frame_choices("G", &rows, 2, 40);

        assert_eq!(lines.len(), 5);
        assert!(!lines[1].contains("->"));
        assert!(lines[2].contains("-> 2: b"));
        assert!(!lines[3].contains("->"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let rows = vec!["Hello".to_string(), "world".to_string(), "!".to_string()];
        assert_eq!(frame_group("HW", &rows, 40), frame_group("HW", &rows, 40));
    }
}
