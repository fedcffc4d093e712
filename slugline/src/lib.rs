#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Text helpers for URLs and short previews: slugs, ASCII transliteration,
//! word-boundary truncation and auto-linking.
//!
//! All functions are pure and never fail; odd input produces best-effort output.

pub const SLUGLINE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod asciify;
pub mod case;
pub mod config;
pub mod linkify;
pub mod locale;
pub mod markup;
pub mod resources;
pub mod shortify;
pub mod stopwords;
pub mod urlify;

// Re-exports for convenience
pub use asciify::{AsciiFolder, DecomposingFolder, NoFolder, Transliterator, asciify, asciify_default};
pub use case::Normalization;
pub use config::{Config, ConfigError};
pub use linkify::linkify;
pub use locale::Locale;
pub use shortify::{shortify, shortify_default};
pub use stopwords::StopWords;
pub use urlify::{urlify, urlify_default};
