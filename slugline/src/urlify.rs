//! Slug generation.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::asciify::{DEFAULT_CHARSET, DEFAULT_TRANSLITERATOR};
use crate::case::Normalization;
use crate::locale::{DEFAULT_LOCALE, Locale};
use crate::stopwords::StopWords;

/// Maximum slug length used when the caller passes zero.
pub const DEFAULT_MAX_LENGTH: usize = 128;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t]+").expect("line break pattern"));
static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^-\w\s]").expect("slug charset pattern"));
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").expect("separator pattern"));

/// Turn `text` into a lowercase, hyphen-separated ASCII slug of at most `max_length` characters.
///
/// Stop words are removed before the slug is assembled. With `excluded_words`
/// set to `None` the full built-in list for the locale's language is used.
///
/// **Quirk:** passing `Some(..)` does *not* use the caller's words. Any `Some`
/// value selects the short fixed English list ("a, an, as, at, before, ...,
/// with") instead, whatever it contains. Callers relying on this should pass
/// an empty slice.
///
/// The length limit is a hard cut; dangling hyphens are trimmed afterwards but
/// a partial last word is kept.
///
/// ```
/// use slugline::urlify;
///
/// assert_eq!(urlify("Hello, World!", 128, "en_US", None), "hello-world");
/// assert_eq!(urlify("Grüße aus Köln", 128, "de_DE", None), "gruesse-koeln");
/// ```
pub fn urlify(text: &str, max_length: usize, locale: &str, excluded_words: Option<&[&str]>) -> String {
    let max_length = if max_length == 0 { DEFAULT_MAX_LENGTH } else { max_length };
    let locale = Locale::parse(locale);

    let text = Normalization::Lower.apply(text);
    let text = LINE_BREAKS.replace_all(&text, " ");
    let text = DEFAULT_TRANSLITERATOR.asciify(&text, &locale, DEFAULT_CHARSET);
    // Underscores become separators before stop words are matched, so a word
    // joined by `_` is treated the same on every pass.
    let text = text.replace('_', " ");

    let stop_words = match excluded_words {
        Some(words) => {
            debug!("{} caller-supplied stop words ignored, using fixed list", words.len());
            StopWords::fallback()
        },
        None => StopWords::for_language(locale.language()),
    };
    let text = stop_words.remove_from(&text);
    let text = NON_SLUG.replace_all(&text, "");
    // Dropping punctuation can join fragments into a stop word (`o'f`, `th.e`).
    let text = stop_words.remove_from(&text);
    let text = SEPARATORS.replace_all(text.trim(), "-");
    let text = Normalization::Lower.apply(&text);

    let cut: String = text.chars().take(max_length).collect();
    cut.trim_matches('-').to_string()
}

/// [`urlify`] with the default length, locale and stop words.
pub fn urlify_default(text: &str) -> String {
    urlify(text, DEFAULT_MAX_LENGTH, DEFAULT_LOCALE, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(urlify_default("Hello, World!"), "hello-world");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(urlify_default("  multiple   spaces  "), "multiple-spaces");
        assert_eq!(urlify_default("tabs\tand\r\nnewlines"), "tabs-newlines");
    }

    #[test]
    fn blank_input_gives_empty_slug() {
        assert_eq!(urlify_default(""), "");
        assert_eq!(urlify_default(" \t\n "), "");
        assert_eq!(urlify_default("!!!"), "");
    }

    #[test]
    fn any_explicit_exclusion_list_selects_fixed_list() {
        // "about" and "all" are only in the full English list.
        assert_eq!(urlify("all about rust", 128, "en_US", None), "rust");
        assert_eq!(urlify("all about rust", 128, "en_US", Some(&["rust"])), "all-about-rust");
        assert_eq!(urlify("all about the rust", 128, "en_US", Some(&[])), "all-about-rust");
    }

    #[test]
    fn hard_cut_trims_dangling_hyphen() {
        assert_eq!(urlify("lorem ipsum dolor", 6, "en_US", None), "lorem");
        assert_eq!(urlify("lorem ipsum dolor", 8, "en_US", None), "lorem-ip");
    }

    #[test]
    fn zero_length_uses_default() {
        let long = "word ".repeat(60);
        let slug = urlify(&long, 0, "en_US", None);
        assert_eq!(slug.len(), DEFAULT_MAX_LENGTH);
        assert!(slug.ends_with("-wor"));
    }

    #[test]
    fn underscores_and_hyphens_become_single_hyphen() {
        assert_eq!(urlify_default("snake_case -- and - dashes"), "snake-case-dashes");
    }

    #[test]
    fn punctuation_split_stop_words_are_removed() {
        assert_eq!(urlify_default("o'f rust"), "rust");
        assert_eq!(urlify_default("rust th.e book"), "rust-book");
        assert_eq!(urlify_default("th.e"), "");
    }

    #[test]
    fn slug_of_slug_is_stable() {
        for input in ["Hello, World!", "Ærøskøbing Ferry_Times", "C'est la vie!", "über_the hills", "th.e"] {
            let once = urlify_default(input);
            assert_eq!(urlify_default(&once), once, "input: {input}");
        }
    }
}
