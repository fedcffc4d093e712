//! Stop-word lists used when building slugs.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use log::{debug, error};
use regex::{Regex, RegexBuilder};
use slugline_data::DEFAULT_LANGUAGE;

use crate::resources::STOP_WORDS;

/// A set of words removed from text as whole, case-insensitive matches.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Vec<String>,
    lookup: HashSet<String>,
    pattern: Option<Regex>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lookup = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && lookup.insert(w.clone()))
            .collect();
        let pattern = build_pattern(&words);
        Self { words, lookup, pattern }
    }

    /// The full built-in list for `language`, falling back to English.
    pub fn for_language(language: &str) -> &'static StopWords {
        BUILTIN.get(language).unwrap_or_else(|| {
            debug!("no stop-word list for language '{language}', using '{DEFAULT_LANGUAGE}'");
            BUILTIN.get(DEFAULT_LANGUAGE).unwrap_or(&*EMPTY)
        })
    }

    /// The short fixed English list ("a, an, as, at, before, ... with").
    pub fn fallback() -> &'static StopWords {
        &FALLBACK
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    /// Delete every whole-word occurrence, leaving the surrounding separators.
    pub fn remove_from<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, ""),
            None => Cow::Borrowed(text),
        }
    }
}

fn build_pattern(words: &[String]) -> Option<Regex> {
    if words.is_empty() {
        return None;
    }
    let alternation = words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|");
    match RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            error!("stop-word pattern failed to compile, no words will be removed: {e}");
            None
        },
    }
}

lazy_static! {
    static ref BUILTIN: HashMap<String, StopWords> = STOP_WORDS
        .languages
        .iter()
        .map(|(language, words)| (language.clone(), StopWords::new(words)))
        .collect();
    static ref FALLBACK: StopWords = StopWords::new(&STOP_WORDS.fallback);
    static ref EMPTY: StopWords = StopWords::new(Vec::<String>::new());
}
