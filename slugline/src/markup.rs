//! Minimal HTML handling: tag stripping and anchor rendering.
//!
//! This is deliberately not a sanitizer. Tags are recognized by their angle
//! brackets only; attribute values containing `>` end the tag early.

use std::borrow::Cow;

/// Remove `<...>` tags and `<!-- ... -->` comments from `text`.
///
/// A `<` followed by whitespace (or at the very end) is kept as a literal.
/// An unterminated tag swallows the rest of the input.
///
/// ```
/// use slugline::markup::strip_tags;
///
/// assert_eq!(strip_tags("<p>1 < 2 is <b>true</b></p>"), "1 < 2 is true");
/// ```
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if after.is_empty() || after.starts_with(char::is_whitespace) {
            out.push('<');
            rest = after;
            continue;
        }

        let (terminator, skip) = if after.starts_with("!--") { ("-->", 3) } else { (">", 1) };
        match after.find(terminator) {
            Some(end) => rest = &after[end + skip..],
            None => return Cow::Owned(out),
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Render a `rel="nofollow"` anchor whose href and text are both `url`, verbatim.
pub fn anchor(url: &str, new_window: bool) -> String {
    let target = if new_window { r#" target="_blank""# } else { "" };
    format!(r#"<a href="{url}" rel="nofollow"{target}>{url}</a>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(strip_tags("no tags here"), Cow::Borrowed(_)));
    }

    #[test]
    fn comments_are_removed_whole() {
        assert_eq!(strip_tags("a<!-- <b>x</b> -->b"), "ab");
    }

    #[test]
    fn unterminated_tag_drops_remainder() {
        assert_eq!(strip_tags("keep<span class='x'"), "keep");
        assert_eq!(strip_tags("trailing <"), "trailing <");
    }

    #[test]
    fn anchor_attributes() {
        assert_eq!(
            anchor("http://a.io", false),
            r#"<a href="http://a.io" rel="nofollow">http://a.io</a>"#
        );
        assert_eq!(
            anchor("www.a.io", true),
            r#"<a href="www.a.io" rel="nofollow" target="_blank">www.a.io</a>"#
        );
    }
}
