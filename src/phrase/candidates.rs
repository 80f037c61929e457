//! Candidate phrase generation
//!
//! Walks the token sequence and cuts it into candidate phrases at stopwords
//! and at tokens ending in punctuation.
//!
//! Two behaviours are fixed and covered by tests:
//! - only the **last** character of a token is checked for punctuation;
//! - a buffer still open when the input ends is **discarded**.

use rustc_hash::FxHashSet;

use crate::nlp::stopwords::StopwordSet;
use crate::nlp::tokenizer::{Tokenizer, DEFAULT_WORD_DELIMITERS};
use crate::types::CandidatePhrase;

/// The 32 ASCII punctuation characters.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Configuration for candidate generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Characters that close a phrase when they end a token
    pub punctuation: String,
    /// Characters that separate tokens
    pub word_delimiters: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            word_delimiters: DEFAULT_WORD_DELIMITERS.to_string(),
        }
    }
}

/// Splits text into candidate phrases
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    punctuation: FxHashSet<char>,
    tokenizer: Tokenizer,
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateGenerator {
    /// Create a generator with default punctuation and delimiters
    pub fn new() -> Self {
        Self::with_config(&GeneratorConfig::default())
    }

    /// Create a generator from a config
    pub fn with_config(config: &GeneratorConfig) -> Self {
        Self {
            punctuation: config.punctuation.chars().collect(),
            tokenizer: Tokenizer::with_delimiters(&config.word_delimiters),
        }
    }

    /// Replace the punctuation set
    pub fn with_punctuation(mut self, punctuation: &str) -> Self {
        self.punctuation = punctuation.chars().collect();
        self
    }

    /// Replace the word delimiters
    pub fn with_word_delimiters(mut self, delimiters: &str) -> Self {
        self.tokenizer = Tokenizer::with_delimiters(delimiters);
        self
    }

    /// Tokenizer used by [`Self::generate`]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize `text` and generate candidates from it
    pub fn generate(&self, text: &str, stopwords: &StopwordSet) -> Vec<CandidatePhrase> {
        let tokens = self.tokenizer.tokenize(text);
        self.generate_from_tokens(&tokens, stopwords)
    }

    /// Generate candidates from pre-tokenized input
    ///
    /// Empty tokens are skipped, matching what the tokenizer would produce.
    pub fn generate_from_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        stopwords: &StopwordSet,
    ) -> Vec<CandidatePhrase> {
        let mut phrases = Vec::new();
        let mut builder: Vec<String> = Vec::new();

        for token in tokens.iter().map(AsRef::as_ref).filter(|t| !t.is_empty()) {
            let mut word = token.to_lowercase();

            let punct = match word.chars().next_back() {
                Some(last) if self.punctuation.contains(&last) => {
                    word.truncate(word.len() - last.len_utf8());
                    true
                }
                _ => false,
            };
            let stopword = stopwords.contains(&word);

            if !stopword && !punct {
                builder.push(word);
            } else if stopword && !builder.is_empty() {
                phrases.push(CandidatePhrase::new(std::mem::take(&mut builder)));
            } else if punct && !builder.is_empty() && !stopword {
                builder.push(word);
                phrases.push(CandidatePhrase::new(std::mem::take(&mut builder)));
            }
        }

        // An unterminated trailing run is dropped.
        phrases
    }
}
