//! Stage trait definitions for the pipeline.
//!
//! Each trait is one stage boundary. The [`super::runner::Pipeline`] is
//! generic over them, so the default stages are statically dispatched and the
//! zero-sized ones cost nothing.

use std::borrow::Cow;

use super::artifacts::CandidateSet;
use crate::nlp::stopwords::StopwordSet;
use crate::phrase::candidates::{CandidateGenerator, GeneratorConfig};
use crate::scoring::{score_phrases, score_words, WordScoreTable};
use crate::types::KeywordScore;

// ============================================================================
// Preprocessor — optional text normalization (stage 0)
// ============================================================================

/// Optional text normalization before tokenizing.
///
/// # Contract
///
/// - Borrow the input unchanged when there is nothing to do.
/// - **Idempotent**: preprocessing twice equals preprocessing once.
pub trait Preprocessor {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Passes text through unchanged. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    #[inline]
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

// ============================================================================
// CandidateSelector — tokens → candidate phrases (stage 1)
// ============================================================================

/// Splits text into tokens and tokens into candidate phrases.
///
/// Tokenizing is separate from selection so the runner can enforce token
/// limits before any phrase is built.
pub trait CandidateSelector {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn select<S: AsRef<str>>(&self, tokens: &[S], stopwords: &StopwordSet) -> CandidateSet;
}

/// Splits at stopwords and trailing punctuation. The default.
#[derive(Debug, Clone, Default)]
pub struct DelimiterCandidateSelector {
    generator: CandidateGenerator,
}

impl DelimiterCandidateSelector {
    pub fn new(generator: CandidateGenerator) -> Self {
        Self { generator }
    }

    pub fn with_config(config: &GeneratorConfig) -> Self {
        Self::new(CandidateGenerator::with_config(config))
    }
}

impl CandidateSelector for DelimiterCandidateSelector {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.generator.tokenizer().tokenize(text)
    }

    fn select<S: AsRef<str>>(&self, tokens: &[S], stopwords: &StopwordSet) -> CandidateSet {
        CandidateSet::new(self.generator.generate_from_tokens(tokens, stopwords))
    }
}

// ============================================================================
// WordScorer (stage 2)
// ============================================================================

pub trait WordScorer {
    fn score(&self, candidates: &CandidateSet) -> WordScoreTable;
}

/// `degree / frequency`, rounded half to even at two decimals. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeFrequencyScorer;

impl WordScorer for DegreeFrequencyScorer {
    #[inline]
    fn score(&self, candidates: &CandidateSet) -> WordScoreTable {
        score_words(candidates.phrases())
    }
}

// ============================================================================
// PhraseScorer (stage 3)
// ============================================================================

/// Scores unique candidates and returns them ranked.
pub trait PhraseScorer {
    fn score(&self, candidates: &CandidateSet, word_scores: &WordScoreTable) -> Vec<KeywordScore>;
}

/// Sums word statistics per phrase. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumPhraseScorer;

impl PhraseScorer for SumPhraseScorer {
    #[inline]
    fn score(&self, candidates: &CandidateSet, word_scores: &WordScoreTable) -> Vec<KeywordScore> {
        score_phrases(candidates.phrases(), word_scores)
    }
}
