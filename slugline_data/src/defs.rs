use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language code as derived from a locale tag (`de` for `de_AT`).
pub type LanguageCode = String;

/// Mapping from a source character (or short sequence) to its ASCII replacement.
pub type SubstitutionMap = BTreeMap<String, String>;

/// Character substitution tables used during transliteration.
///
/// The `default` table applies to every language. A language table is layered
/// over it, so `de` only needs the entries where German differs (`ä` -> `ae`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TransliterationDef {
    #[serde(default)]
    pub default: SubstitutionMap,
    #[serde(default)]
    pub languages: BTreeMap<LanguageCode, SubstitutionMap>,
}

impl TransliterationDef {
    /// Number of substitution entries across all tables.
    pub fn entry_count(&self) -> usize {
        self.default.len() + self.languages.values().map(BTreeMap::len).sum::<usize>()
    }
}

/// Stop-word lists used when building slugs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StopWordsDef {
    /// Short fixed English list used whenever a caller passes their own exclusions.
    #[serde(default)]
    pub fallback: Vec<String>,
    /// Full per-language lists used when the caller passes nothing.
    #[serde(default)]
    pub languages: BTreeMap<LanguageCode, Vec<String>>,
}

/// Language whose stop-word list backs every unknown language.
pub const DEFAULT_LANGUAGE: &str = "en";
