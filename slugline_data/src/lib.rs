//! Shared data model for slugline's built-in resources.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_stop_words, validate_transliteration};
