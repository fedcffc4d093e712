use std::collections::HashSet;

use thiserror::Error;

use crate::*;

/// Problems found in a substitution table or stop-word list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty source sequence in {table} table")]
    EmptySource { table: String },
    #[error("replacement '{replacement}' for '{sequence}' in {table} table is not printable ASCII")]
    NonAsciiReplacement {
        table: String,
        sequence: String,
        replacement: String,
    },
    #[error("stop word '{word}' in {list} list is not lowercase ASCII")]
    NonLowercaseStopWord { list: String, word: String },
    #[error("duplicate stop word '{word}' in {list} list")]
    DuplicateStopWord { list: String, word: String },
    #[error("missing {kind} for language '{language}'")]
    MissingLanguage { kind: &'static str, language: String },
}

/// Check that every replacement in the substitution tables is printable ASCII.
///
/// ```
/// use slugline_data::{TransliterationDef, validate_transliteration};
///
/// let mut def = TransliterationDef::default();
/// def.default.insert("é".into(), "e".into());
/// assert!(validate_transliteration(&def).is_empty());
///
/// def.default.insert("ø".into(), "ö".into());
/// assert_eq!(validate_transliteration(&def).len(), 1);
/// ```
pub fn validate_transliteration(def: &TransliterationDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_table("default", &def.default, &mut errors);
    for (language, table) in &def.languages {
        check_table(language, table, &mut errors);
    }
    errors
}

/// Check stop-word lists: lowercase ASCII words, no duplicates, and an entry for
/// [`DEFAULT_LANGUAGE`].
pub fn validate_stop_words(def: &StopWordsDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_words("fallback", &def.fallback, &mut errors);
    for (language, words) in &def.languages {
        check_words(language, words, &mut errors);
    }
    if !def.languages.contains_key(DEFAULT_LANGUAGE) {
        errors.push(ValidationError::MissingLanguage {
            kind: "stop-word list",
            language: DEFAULT_LANGUAGE.to_string(),
        });
    }
    errors
}

fn check_table(name: &str, table: &SubstitutionMap, errors: &mut Vec<ValidationError>) {
    for (source, replacement) in table {
        if source.is_empty() {
            errors.push(ValidationError::EmptySource { table: name.to_string() });
            continue;
        }
        if !replacement.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
            errors.push(ValidationError::NonAsciiReplacement {
                table: name.to_string(),
                sequence: source.clone(),
                replacement: replacement.clone(),
            });
        }
    }
}

fn check_words(name: &str, words: &[String], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for word in words {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase() || b == b'\'') {
            errors.push(ValidationError::NonLowercaseStopWord {
                list: name.to_string(),
                word: word.clone(),
            });
        }
        if !seen.insert(word.as_str()) {
            errors.push(ValidationError::DuplicateStopWord {
                list: name.to_string(),
                word: word.clone(),
            });
        }
    }
}
