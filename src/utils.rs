use unicode_width::UnicodeWidthChar;

/// Shorten to at most `max_len` characters, appending "..." when cut.
/// Counts chars, not bytes, so multi-byte text never splits a codepoint.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One visual row of wrapped text: the byte range of `text` it covers.
#[derive(Debug, PartialEq)]
struct VisualLine {
    start: usize,
    end: usize,
}

/// Break `text` into visual rows the way the editor renders it: hard breaks
/// at '\n', soft breaks when the next char would exceed `max_width` columns.
fn wrap_lines(text: &str, max_width: usize) -> Vec<VisualLine> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 0;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push(VisualLine { start, end: idx });
            start = idx + 1;
            width = 0;
            continue;
        }
        let w = ch.width().unwrap_or(1);
        if width + w > max_width && width > 0 {
            lines.push(VisualLine { start, end: idx });
            start = idx;
            width = w;
        } else {
            width += w;
        }
    }

    // Final row, including the empty one after a trailing newline so the
    // cursor can sit on it.
    lines.push(VisualLine {
        start,
        end: text.len(),
    });
    lines
}

/// Visual (row, column) of a byte cursor within wrapped text. The column is
/// in display columns so wide characters position the terminal cursor
/// correctly.
pub fn wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor_index == 0 {
        return (0, 0);
    }
    let cursor = cursor_index.min(text.len());

    for (row, line) in wrap_lines(text, max_width).iter().enumerate() {
        if cursor >= line.start && cursor <= line.end {
            let col = text[line.start..cursor]
                .chars()
                .map(|c| c.width().unwrap_or(1))
                .sum();
            return (row, col);
        }
    }
    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.chars().count() <= 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("Exactly twenty!!", 20), "Exactly twenty!!");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("가나다라마", 4), "가...");
        assert_eq!(truncate_string("가나다", 3), "가나다");
    }

    #[test]
    fn test_cursor_empty_text() {
        assert_eq!(wrapped_cursor_position("", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_at_start() {
        assert_eq!(wrapped_cursor_position("Hello world", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_single_line() {
        assert_eq!(wrapped_cursor_position("Hello", 3, 10), (0, 3));
    }

    #[test]
    fn test_cursor_wraps_to_second_line() {
        let text = "This is a long line that should wrap";
        assert_eq!(wrapped_cursor_position(text, 15, 10), (1, 5));
    }

    #[test]
    fn test_cursor_multiple_wraps() {
        let text = "This is a very long text that will definitely wrap multiple times";
        assert_eq!(wrapped_cursor_position(text, 25, 10), (2, 5));
    }

    #[test]
    fn test_cursor_beyond_text_clamps_to_end() {
        assert_eq!(wrapped_cursor_position("Hi", 10, 10), (0, 2));
    }

    #[test]
    fn test_cursor_at_exact_wrap_boundary() {
        assert_eq!(wrapped_cursor_position("0123456789", 10, 10), (0, 10));
        assert_eq!(wrapped_cursor_position("0123456789A", 10, 10), (0, 10));
        assert_eq!(wrapped_cursor_position("0123456789A", 11, 10), (1, 1));
    }

    #[test]
    fn test_cursor_after_explicit_newline() {
        let text = "Line 1\nLine 2";
        assert_eq!(wrapped_cursor_position(text, 7, 20), (1, 0));
        assert_eq!(wrapped_cursor_position(text, 8, 20), (1, 1));
    }

    #[test]
    fn test_cursor_on_empty_trailing_line() {
        assert_eq!(wrapped_cursor_position("abc\n", 4, 20), (1, 0));
    }

    #[test]
    fn test_cursor_counts_display_columns_for_wide_chars() {
        // each hangul syllable is two columns wide
        assert_eq!(wrapped_cursor_position("가나다", 6, 10), (0, 4));
        assert_eq!(wrapped_cursor_position("가나다", 9, 10), (0, 6));
    }

    #[test]
    fn test_wrap_lines_explicit_newlines() {
        let lines = wrap_lines("Line 1\nLine 2\nLine 3", 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], VisualLine { start: 0, end: 6 });
        assert_eq!(lines[1], VisualLine { start: 7, end: 13 });
        assert_eq!(lines[2], VisualLine { start: 14, end: 20 });
    }

    #[test]
    fn test_wrap_lines_mixed_newlines_and_wrapping() {
        let lines = wrap_lines("Short\nThis is a longer line that should wrap", 10);
        assert_eq!(lines[0], VisualLine { start: 0, end: 5 });
        assert!(lines.len() > 2);
    }
}
