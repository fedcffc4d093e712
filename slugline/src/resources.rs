//! Built-in substitution tables and stop-word lists.
//!
//! Both resources ship as RON documents under `data/` and are compiled into the
//! binary. They are parsed once on first use and never modified afterwards.
//! A resource that fails to parse or validate is replaced by an empty one so
//! the text helpers stay total; the failure is logged.

use lazy_static::lazy_static;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use slugline_data::{StopWordsDef, TransliterationDef, ValidationError, validate_stop_words, validate_transliteration};

const TRANSLITERATION_RON: &str = include_str!("../data/transliteration.ron");
const STOP_WORDS_RON: &str = include_str!("../data/stopwords.ron");

lazy_static! {
    pub static ref TRANSLITERATION: TransliterationDef =
        load_builtin("transliteration", TRANSLITERATION_RON, validate_transliteration);
    pub static ref STOP_WORDS: StopWordsDef = load_builtin("stop-word", STOP_WORDS_RON, validate_stop_words);
}

fn load_builtin<T>(name: &str, source: &str, validate: fn(&T) -> Vec<ValidationError>) -> T
where
    T: DeserializeOwned + Default,
{
    let def: T = match ron::from_str(source) {
        Ok(def) => def,
        Err(e) => {
            error!("built-in {name} data failed to parse: {e}");
            return T::default();
        },
    };
    let errors = validate(&def);
    if !errors.is_empty() {
        for err in &errors {
            warn!("built-in {name} data: {err}");
        }
        error!("built-in {name} data failed validation with {} problems, using empty data", errors.len());
        return T::default();
    }
    info!("built-in {name} data loaded");
    def
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_transliteration_is_valid() {
        let def: TransliterationDef = ron::from_str(TRANSLITERATION_RON).expect("transliteration.ron parses");
        assert_eq!(validate_transliteration(&def), Vec::new());
        assert!(def.languages.contains_key("de"));
        assert_eq!(def.default.get("ß").map(String::as_str), Some("ss"));
    }

    #[test]
    fn builtin_stop_words_are_valid() {
        let def: StopWordsDef = ron::from_str(STOP_WORDS_RON).expect("stopwords.ron parses");
        assert_eq!(validate_stop_words(&def), Vec::new());
        assert_eq!(def.fallback.first().map(String::as_str), Some("a"));
        assert_eq!(def.fallback.last().map(String::as_str), Some("with"));
    }

    #[test]
    fn invalid_data_is_replaced_with_empty_resource() {
        let src = r#"(fallback: ["a"], languages: {"en": ["The", "the"]})"#;
        let def: StopWordsDef = load_builtin("stop-word", src, validate_stop_words);
        assert_eq!(def, StopWordsDef::default());

        let def: TransliterationDef = load_builtin("transliteration", r#"(default: {"é": "é"})"#, validate_transliteration);
        assert_eq!(def, TransliterationDef::default());
    }

    #[test]
    fn unparseable_data_is_replaced_with_empty_resource() {
        let def: StopWordsDef = load_builtin("stop-word", "(fallback: [", validate_stop_words);
        assert_eq!(def, StopWordsDef::default());
    }

    #[test]
    fn valid_data_is_kept() {
        let src = r#"(fallback: ["a"], languages: {"en": ["the"]})"#;
        let def: StopWordsDef = load_builtin("stop-word", src, validate_stop_words);
        assert_eq!(def.languages["en"], vec!["the".to_string()]);
    }

    #[test]
    fn statics_match_embedded_documents() {
        assert!(TRANSLITERATION.entry_count() > 200);
        assert!(STOP_WORDS.languages["en"].len() > STOP_WORDS.fallback.len());
    }
}
