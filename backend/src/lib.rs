//! Conversion of the Sedra 3 Syriac database text export to JavaScript
//! literals and cross-reference indices.

pub mod types;
pub mod logger;
pub mod transliterate;
pub mod js_literal;
pub mod roots;
pub mod lexemes;
pub mod words;
pub mod english;
pub mod etymology;
pub mod ubs;
pub mod export_helpers;

pub use roots::{get_roots, parse_roots};
pub use lexemes::{get_lexemes, parse_lexemes};
pub use words::{get_words, parse_words};
pub use english::{get_english, parse_english};
pub use etymology::{get_etymology, parse_etymology};
pub use ubs::{get_ubs, parse_ubs};
