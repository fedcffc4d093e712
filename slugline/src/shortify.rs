//! Word-boundary truncation.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::strip_tags;

/// Length limit used when the caller passes zero.
pub const DEFAULT_LENGTH: usize = 255;
/// Marker appended to truncated text.
pub const DEFAULT_TAIL: &str = "…";

// Last whitespace run together with the (possibly partial) word after it.
static TRAILING_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+?(\S+)?$").expect("trailing word pattern"));

/// Strip tags from `text` and shorten it to at most `length` characters plus `tail`.
///
/// Lengths are counted in Unicode scalar values. The cut happens at the last
/// whitespace within the limit; if there is none, the text is cut hard at
/// `length`. Text already within the limit is returned without `tail`.
///
/// ```
/// use slugline::shortify;
///
/// assert_eq!(shortify("The quick brown fox jumps", 10, "…"), "The quick…");
/// assert_eq!(shortify("<em>short</em>", 255, "…"), "short");
/// ```
pub fn shortify(text: &str, length: usize, tail: &str) -> String {
    let length = if length == 0 { DEFAULT_LENGTH } else { length };
    let text = strip_tags(text);
    if text.chars().count() <= length {
        return text.into_owned();
    }

    let window: String = text.chars().take(length + 1).collect();
    let window = TRAILING_WORD.replace(&window, "");
    let mut out: String = window.chars().take(length).collect();
    out.push_str(tail);
    out
}

/// [`shortify`] with the default length and tail.
pub fn shortify_default(text: &str) -> String {
    shortify(text, DEFAULT_LENGTH, DEFAULT_TAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuts_at_word_boundary() {
        assert_eq!(shortify("The quick brown fox jumps", 10, "..."), "The quick...");
        assert_eq!(shortify("The quick brown fox jumps", 9, "..."), "The quick...");
        assert_eq!(shortify("The quick brown fox jumps", 8, "..."), "The...");
    }

    #[test]
    fn hard_cut_without_boundary() {
        assert_eq!(shortify("Supercalifragilistic", 5, "~"), "Super~");
    }

    #[test]
    fn whitespace_before_limit_is_trimmed() {
        assert_eq!(shortify("alpha    beta", 8, "|"), "alpha|");
    }

    #[test]
    fn counts_code_points_not_bytes() {
        assert_eq!(shortify("żółć gęś", 8, "…"), "żółć gęś");
        assert_eq!(shortify("żółć gęśla", 8, "…"), "żółć…");
    }

    #[test]
    fn zero_length_means_default() {
        let text = "x ".repeat(200);
        let out = shortify(&text, 0, "…");
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= DEFAULT_LENGTH + 1);
    }

    #[test]
    fn tags_do_not_count_towards_length() {
        let html = "<p><a href=\"https://example.com/very/long\">link</a> text</p>";
        assert_eq!(shortify_default(html), "link text");
    }
}
