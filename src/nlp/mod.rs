//! Natural Language Processing components
//!
//! This module provides tokenization and the bundled stoplists.

pub mod stopwords;
pub mod tokenizer;
