//! Auto-linking of URLs in plain text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::anchor;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://|www\.)[^\s<]{4,80}[^\s<]*").expect("url pattern")
});

/// Wrap every `http://`, `https://` or `www.` token in a `rel="nofollow"` anchor.
///
/// With `new_window` set the anchor also gets `target="_blank"`.
///
/// The matched token is inserted into the markup verbatim, including any
/// quotes or ampersands it contains. Escaping untrusted input beforehand is
/// the caller's job.
///
/// ```
/// use slugline::linkify;
///
/// assert_eq!(
///     linkify("Visit http://example.com now", false),
///     r#"Visit <a href="http://example.com" rel="nofollow">http://example.com</a> now"#
/// );
/// ```
pub fn linkify(text: &str, new_window: bool) -> String {
    URL.replace_all(text, |caps: &Captures<'_>| anchor(&caps[0], new_window))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_window_adds_target() {
        let out = linkify("Visit http://example.com now", true);
        assert!(out.contains(r#"rel="nofollow""#));
        assert!(out.contains(r#"target="_blank""#));
        assert!(!linkify("Visit http://example.com now", false).contains("target"));
    }

    #[test]
    fn www_prefix_is_kept_as_href() {
        assert_eq!(
            linkify("see www.rust-lang.org", false),
            r#"see <a href="www.rust-lang.org" rel="nofollow">www.rust-lang.org</a>"#
        );
    }

    #[test]
    fn needs_at_least_four_characters_after_prefix() {
        assert_eq!(linkify("http://abc", false), "http://abc");
        assert!(linkify("http://abcd", false).starts_with("<a "));
    }

    #[test]
    fn stops_at_whitespace_and_angle_bracket() {
        let out = linkify("<p>https://example.org/a?b=c</p> and HTTPS://EXAMPLE.ORG", false);
        assert!(out.starts_with(r#"<p><a href="https://example.org/a?b=c" rel="nofollow">"#));
        assert!(out.contains("</a></p>"));
        assert!(out.ends_with(r#"<a href="HTTPS://EXAMPLE.ORG" rel="nofollow">HTTPS://EXAMPLE.ORG</a>"#));
    }

    #[test]
    fn long_urls_are_matched_whole() {
        let url = format!("https://example.com/{}", "x".repeat(200));
        let out = linkify(&url, false);
        assert_eq!(out, format!(r#"<a href="{url}" rel="nofollow">{url}</a>"#));
    }

    #[test]
    fn text_without_urls_is_untouched() {
        assert_eq!(linkify("nothing to see, http:/ nope", false), "nothing to see, http:/ nope");
    }

    #[test]
    fn url_text_is_not_escaped() {
        let out = linkify(r#"http://x.io/"onmouseover="#, false);
        assert!(out.contains(r#"href="http://x.io/"onmouseover=""#));
    }
}
