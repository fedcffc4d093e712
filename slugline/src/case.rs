//! Case normalization modes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How to normalize the letter case of a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    None,
    Lower,
    Upper,
}

impl Normalization {
    /// Apply the normalization, borrowing the input when nothing changes.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Normalization::None => Cow::Borrowed(text),
            Normalization::Lower if text.chars().any(char::is_uppercase) => Cow::Owned(text.to_lowercase()),
            Normalization::Upper if text.chars().any(char::is_lowercase) => Cow::Owned(text.to_uppercase()),
            Normalization::Lower | Normalization::Upper => Cow::Borrowed(text),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Normalization::None => "none",
            Normalization::Lower => "lower",
            Normalization::Upper => "upper",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case normalization '{0}' (expected none, lower or upper)")]
pub struct ParseNormalizationError(String);

impl FromStr for Normalization {
    type Err = ParseNormalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Normalization::None),
            "lower" => Ok(Normalization::Lower),
            "upper" => Ok(Normalization::Upper),
            _ => Err(ParseNormalizationError(s.to_string())),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
