//! Defaults for the command-line tool, optionally read from a TOML file.
//!
//! Every key is optional; anything missing keeps its built-in default.
//!
//! ```toml
//! [urlify]
//! max_length = 64
//! locale = "de_DE"
//!
//! [shortify]
//! tail = "..."
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::asciify::DEFAULT_CHARSET;
use crate::case::Normalization;
use crate::locale::DEFAULT_LOCALE;
use crate::shortify::{DEFAULT_LENGTH, DEFAULT_TAIL};
use crate::urlify::DEFAULT_MAX_LENGTH;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub urlify: UrlifyConfig,
    pub asciify: AsciifyConfig,
    pub shortify: ShortifyConfig,
    pub linkify: LinkifyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlifyConfig {
    pub max_length: usize,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsciifyConfig {
    pub locale: String,
    pub charset: String,
    pub case: Normalization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShortifyConfig {
    pub length: usize,
    pub tail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkifyConfig {
    pub new_window: bool,
}

impl Default for UrlifyConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Default for AsciifyConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            case: Normalization::None,
        }
    }
}

impl Default for ShortifyConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            tail: DEFAULT_TAIL.to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }
}
