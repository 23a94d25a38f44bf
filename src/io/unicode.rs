//! Unicode utilities for laying out widget text.
//!
//! Widths are measured in grapheme clusters so that glyphs such as `☑` or
//! an emoji with a skin tone modifier count as one column.

use unicode_segmentation::UnicodeSegmentation;

/// Counts the number of grapheme clusters in a string.
///
/// # Examples
///
/// ```
/// use vault_widget::io::unicode::grapheme_count;
///
/// assert_eq!(grapheme_count("☑ Done"), 6);
/// assert_eq!(grapheme_count("世界"), 2);
/// ```
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Wraps one line into segments of at most `width` grapheme clusters.
///
/// Breaks after the last whitespace that fits when there is one, otherwise
/// hard-breaks at the width. An empty line yields one empty segment.
#[must_use]
pub fn wrap_graphemes(line: &str, width: usize) -> Vec<&str> {
    if width == 0 || line.is_empty() {
        return vec![line];
    }

    let mut segments = Vec::new();
    let mut rest = line;

    while grapheme_count(rest) > width {
        let mut hard_break = 0;
        let mut soft_break = None;
        let mut seen_text = false;

        for (count, (offset, grapheme)) in rest.grapheme_indices(true).enumerate() {
            let blank = grapheme.chars().all(char::is_whitespace);
            if count == width {
                hard_break = offset;
                // a space right at the limit is a clean break too
                if blank && seen_text {
                    soft_break = Some(offset);
                }
                break;
            }
            if blank && seen_text {
                soft_break = Some(offset);
            }
            seen_text |= !blank;
        }

        let split = soft_break.unwrap_or(hard_break);
        segments.push(rest[..split].trim_end());
        rest = rest[split..].trim_start();
    }

    segments.push(rest);
    segments
}

/// Pads `s` with spaces on the right to `width` grapheme clusters.
#[must_use]
pub fn pad_graphemes(s: &str, width: usize) -> String {
    let count = grapheme_count(s);
    let mut padded = String::with_capacity(s.len() + width.saturating_sub(count));
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(count)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_count() {
        assert_eq!(grapheme_count(""), 0);
        assert_eq!(grapheme_count("• item"), 6);
        // Family emoji is one grapheme
        assert_eq!(grapheme_count("👨‍👩‍👧"), 1);
    }

    #[test]
    fn test_wrap_short_line() {
        assert_eq!(wrap_graphemes("☑ Done", 10), vec!["☑ Done"]);
        assert_eq!(wrap_graphemes("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_at_space() {
        assert_eq!(
            wrap_graphemes("water the plants today", 10),
            vec!["water the", "plants", "today"]
        );
    }

    #[test]
    fn test_wrap_hard_break() {
        assert_eq!(wrap_graphemes("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_respects_graphemes() {
        let segments = wrap_graphemes("☑☑☑☑☑", 2);
        assert_eq!(segments, vec!["☑☑", "☑☑", "☑"]);
        for segment in segments {
            assert!(grapheme_count(segment) <= 2);
        }
    }

    #[test]
    fn test_wrap_keeps_indent_on_first_segment() {
        let segments = wrap_graphemes("  • nested item here", 12);
        assert_eq!(segments[0], "  • nested");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad_graphemes("□", 3), "□  ");
        assert_eq!(pad_graphemes("toolong", 3), "toolong");
    }
}
