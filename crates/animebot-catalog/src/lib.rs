//! # animebot-catalog
//!
//! Outbound HTTP collaborators: the Jikan anime catalog and the
//! translation service.

pub mod jikan;
pub mod translate;

pub use jikan::JikanClient;
pub use translate::{translate_or_original, GoogleTranslator, NoopTranslator};
