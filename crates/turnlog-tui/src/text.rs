//! Text wrapping for transcript rendering.
//!
//! All widths are terminal display columns, not character counts, so CJK
//! and emoji (double-width) wrap correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps text at word boundaries to fit within `width` columns.
///
/// Words wider than a full line are broken at character boundaries. Does
/// not hyphenate. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width: usize = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let fits_on_current =
            !current.is_empty() && current_width + 1 + word_width <= width;

        if fits_on_current {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            // Oversized word: hard-break, keep the last fragment open so
            // following words can share its line.
            let mut fragments = wrap_chars(word, width);
            if let Some(last) = fragments.pop() {
                lines.extend(fragments);
                current_width = last.width();
                current = last;
            }
        } else {
            current = word.to_string();
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Breaks a string at character boundaries into fragments of at most
/// `width` display columns. Zero-width characters attach to the current
/// fragment.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_width: usize = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if ch_width == 0 {
            current.push(ch);
            continue;
        }
        if current_width + ch_width > width && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() {
        parts.push(current);
    }
    if parts.is_empty() {
        parts.push(String::new());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wrap_text("hello world", 8), vec!["hello", "world"]);
    }

    #[test]
    fn breaks_oversized_words() {
        assert_eq!(
            wrap_text("supercalifragilistic", 10),
            vec!["supercalif", "ragilistic"]
        );
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn cjk_counts_double_width() {
        let wrapped = wrap_text("你好世界", 6);
        assert_eq!(wrapped, vec!["你好世", "界"]);
    }

    #[test]
    fn wrap_chars_respects_display_width() {
        let parts = wrap_chars("你好世界", 4);
        assert_eq!(parts, vec!["你好", "世界"]);
    }

    #[test]
    fn mixed_ascii_and_cjk() {
        let wrapped = wrap_text("Hi你好", 5);
        assert_eq!(wrapped, vec!["Hi你", "好"]);
    }
}
