//! Locale tags as accepted by the text helpers.
//!
//! Only the language part of a tag matters: `de_AT.UTF-8` and `de` both select
//! the German tables. Anything that does not name a known language simply
//! falls through to the default tables, so parsing never fails.

use std::fmt;

/// Locale used when the caller does not supply one.
pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
    language: String,
}

impl Locale {
    /// Parse a locale tag, taking the language code from the part before the first `_`.
    ///
    /// ```
    /// use slugline::Locale;
    ///
    /// assert_eq!(Locale::parse("de_AT").language(), "de");
    /// assert_eq!(Locale::parse("FR").language(), "fr");
    /// ```
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        let language = tag.split('_').next().unwrap_or_default().to_ascii_lowercase();
        Self {
            tag: tag.to_string(),
            language,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::parse(DEFAULT_LOCALE)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}
