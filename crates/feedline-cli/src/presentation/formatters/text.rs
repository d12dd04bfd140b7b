use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Shorten `text` to `max_width` terminal columns, marking the cut with "..."
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return split_at_width(text, max_width).0.to_string();
    }

    let (head, _) = split_at_width(text, max_width - ELLIPSIS.len());
    format!("{}{}", head, ELLIPSIS)
}

/// Greedy word wrap by display width. Words wider than `width` are split.
/// Always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for mut word in paragraph.split_whitespace() {
            while word.width() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let (head, rest) = match split_at_width(word, width) {
                    ("", _) => word.split_at(first_char_len(word)),
                    split => split,
                };
                lines.push(head.to_string());
                word = rest;
            }

            if current.is_empty() {
                current.push_str(word);
            } else if current.width() + 1 + word.width() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }

        lines.push(current);
    }

    lines
}

/// Longest prefix that fits in `columns`, and the remainder
fn split_at_width(text: &str, columns: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > columns {
            return text.split_at(index);
        }
    }
    (text, "")
}

fn first_char_len(text: &str) -> usize {
    text.chars().next().map_or(text.len(), char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long line", 10), "this is...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_truncate_counts_columns() {
        let cut = truncate("日本語のテキスト", 8);
        assert_eq!(cut, "日本...");
        assert!(cut.width() <= 8);
        assert_eq!(truncate("Olá 👋", 6), "Olá 👋");
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap("Acabei de subir mais um projeto", 12),
            vec!["Acabei de", "subir mais", "um projeto"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_measures_wide_glyphs() {
        let rows = wrap("👋👋👋 oi", 4);
        assert_eq!(rows, vec!["👋👋", "👋", "oi"]);
        assert!(rows.iter().all(|row| row.width() <= 4));
    }

    #[test]
    fn test_wrap_glyph_wider_than_line() {
        assert_eq!(wrap("界a", 1), vec!["界", "a"]);
    }

    #[test]
    fn test_wrap_empty_is_one_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
