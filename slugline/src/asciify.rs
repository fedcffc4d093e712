//! Transliteration of arbitrary text to printable ASCII.
//!
//! Conversion runs in three passes:
//! 1. the locale's substitution table (language entries layered over the
//!    default table, longest matching sequence first);
//! 2. if anything outside printable ASCII is left, an [`AsciiFolder`] gets a
//!    chance to approximate it (the default one decomposes characters and
//!    drops the combining marks);
//! 3. whatever is still outside printable ASCII is removed.
//!
//! The result only ever contains tab, CR, LF and bytes `0x20..=0x7E`.

use std::collections::HashMap;
use std::sync::LazyLock;

use lazy_static::lazy_static;
use log::debug;
use slugline_data::{SubstitutionMap, TransliterationDef};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::locale::{DEFAULT_LOCALE, Locale};
use crate::resources::TRANSLITERATION;

/// Source charset assumed when the caller does not name one.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Best-effort approximation of non-ASCII text.
///
/// Returning `None` means the capability is unavailable for this input; the
/// transliterator then keeps the table-substituted text as it is.
pub trait AsciiFolder {
    fn fold(&self, text: &str, charset: &str) -> Option<String>;
}

/// Compatibility decomposition followed by removal of combining marks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecomposingFolder;

impl AsciiFolder for DecomposingFolder {
    fn fold(&self, text: &str, charset: &str) -> Option<String> {
        if !is_unicode_charset(charset) {
            debug!("no folding available for charset '{charset}'");
            return None;
        }
        Some(text.nfkd().filter(|c| !is_combining_mark(*c)).collect())
    }
}

/// A folder that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFolder;

impl AsciiFolder for NoFolder {
    fn fold(&self, _text: &str, _charset: &str) -> Option<String> {
        None
    }
}

// Rust strings are always UTF-8, so only labels compatible with that can be folded.
fn is_unicode_charset(charset: &str) -> bool {
    matches!(
        charset.trim().to_ascii_lowercase().as_str(),
        "utf-8" | "utf8" | "ascii" | "us-ascii"
    )
}

/// Characters allowed in transliterated output.
pub fn is_plain_ascii(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | ' '..='~')
}

/// Substitution table for one language, with the default entries folded in.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: HashMap<String, String>,
    longest: usize,
    ascii_sources: bool,
}

impl SubstitutionTable {
    /// Build the table for `language`: default entries, overridden by the language's own.
    pub fn for_language(def: &TransliterationDef, language: &str) -> Self {
        let mut table = Self::default();
        table.extend(&def.default);
        if let Some(overrides) = def.languages.get(language) {
            table.extend(overrides);
        }
        table
    }

    fn extend(&mut self, map: &SubstitutionMap) {
        for (source, replacement) in map {
            if source.is_empty() {
                continue;
            }
            self.longest = self.longest.max(source.chars().count());
            self.ascii_sources |= source.is_ascii();
            self.entries.insert(source.clone(), replacement.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every known sequence, preferring the longest match at each position.
    pub fn apply(&self, text: &str) -> String {
        if self.entries.is_empty() || (text.is_ascii() && !self.ascii_sources) {
            return text.to_string();
        }

        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(text.len()))
            .collect();
        let chars = bounds.len() - 1;
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;
        'outer: while pos < chars {
            for width in (1..=self.longest.min(chars - pos)).rev() {
                let candidate = &text[bounds[pos]..bounds[pos + width]];
                if let Some(replacement) = self.entries.get(candidate) {
                    out.push_str(replacement);
                    pos += width;
                    continue 'outer;
                }
            }
            out.push_str(&text[bounds[pos]..bounds[pos + 1]]);
            pos += 1;
        }
        out
    }
}

lazy_static! {
    static ref DEFAULT_TABLE: SubstitutionTable = SubstitutionTable::for_language(&TRANSLITERATION, "");
    static ref LANGUAGE_TABLES: HashMap<String, SubstitutionTable> = TRANSLITERATION
        .languages
        .keys()
        .map(|language| (language.clone(), SubstitutionTable::for_language(&TRANSLITERATION, language)))
        .collect();
}

/// The built-in table for a language, or the default table if the language has none.
pub fn table_for(language: &str) -> &'static SubstitutionTable {
    LANGUAGE_TABLES.get(language).unwrap_or_else(|| {
        debug!("no substitution table for language '{language}', using default");
        &*DEFAULT_TABLE
    })
}

/// Converts text to printable ASCII using the built-in tables and a folder.
pub struct Transliterator {
    folder: Box<dyn AsciiFolder + Send + Sync>,
}

impl Transliterator {
    pub fn new() -> Self {
        Self::with_folder(DecomposingFolder)
    }

    /// Use a different folding capability (or [`NoFolder`] to skip folding).
    pub fn with_folder(folder: impl AsciiFolder + Send + Sync + 'static) -> Self {
        Self {
            folder: Box::new(folder),
        }
    }

    pub fn asciify(&self, text: &str, locale: &Locale, charset: &str) -> String {
        let substituted = table_for(locale.language()).apply(text);
        if substituted.chars().all(is_plain_ascii) {
            return substituted;
        }

        let folded = match self.folder.fold(&substituted, charset) {
            Some(folded) => folded,
            None => {
                debug!("folding unavailable, keeping table output");
                substituted
            },
        };
        folded.chars().filter(|c| is_plain_ascii(*c)).collect()
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) static DEFAULT_TRANSLITERATOR: LazyLock<Transliterator> = LazyLock::new(Transliterator::new);

/// Transliterate `text` to printable ASCII for the given locale.
///
/// `locale` defaults to [`DEFAULT_LOCALE`] and `charset` to [`DEFAULT_CHARSET`]
/// in the command-line tool and in [`asciify_default`].
///
/// ```
/// use slugline::asciify;
///
/// assert_eq!(asciify("Straße in Köln", "de_DE", "UTF-8"), "Strasse in Koeln");
/// assert_eq!(asciify("Straße in Köln", "en_US", "UTF-8"), "Strasse in Koln");
/// ```
pub fn asciify(text: &str, locale: &str, charset: &str) -> String {
    DEFAULT_TRANSLITERATOR.asciify(text, &Locale::parse(locale), charset)
}

/// [`asciify`] with the default locale and charset.
pub fn asciify_default(text: &str) -> String {
    asciify(text, DEFAULT_LOCALE, DEFAULT_CHARSET)
}
