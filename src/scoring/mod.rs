//! RAKE scoring
//!
//! Word scores (degree / frequency) and phrase scores (sums of word scores).

pub mod phrase;
pub mod word;

pub use phrase::{score_phrases, sort_keywords};
pub use word::{score_words, WordScoreTable};
