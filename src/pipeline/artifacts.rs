//! Pipeline artifacts.
//!
//! Typed intermediate results flowing between stages, and the final
//! [`RakeResult`] handed to callers.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::types::{CandidatePhrase, KeywordScore, WordScore};

/// Candidate phrases in the order they were emitted, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    phrases: Vec<CandidatePhrase>,
}

impl CandidateSet {
    pub fn new(phrases: Vec<CandidatePhrase>) -> Self {
        Self { phrases }
    }

    pub fn phrases(&self) -> &[CandidatePhrase] {
        &self.phrases
    }

    pub fn texts(&self) -> Vec<&str> {
        self.phrases.iter().map(|p| p.text()).collect()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of distinct phrase texts.
    pub fn unique_count(&self) -> usize {
        self.phrases
            .iter()
            .map(|p| p.text())
            .collect::<FxHashSet<_>>()
            .len()
    }

    pub fn into_phrases(self) -> Vec<CandidatePhrase> {
        self.phrases
    }
}

/// Output of one extraction run.
///
/// Every run builds its own result; nothing is shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RakeResult {
    /// Candidate phrases, duplicates included
    pub candidates: CandidateSet,
    /// Word scores by score descending
    pub word_scores: Vec<WordScore>,
    /// Unique phrases by score descending
    pub keyword_scores: Vec<KeywordScore>,
}

impl RakeResult {
    /// Ranked phrase texts.
    pub fn keywords(&self) -> Vec<&str> {
        self.keyword_scores.iter().map(|k| k.phrase.as_str()).collect()
    }

    /// The `n` best keywords.
    pub fn top_n(&self, n: usize) -> &[KeywordScore] {
        &self.keyword_scores[..n.min(self.keyword_scores.len())]
    }

    /// The first `len / divisor` keywords, e.g. `top_fraction(3)` for the
    /// top third. A zero divisor yields nothing.
    pub fn top_fraction(&self, divisor: usize) -> &[KeywordScore] {
        match divisor {
            0 => &[],
            d => self.top_n(self.keyword_scores.len() / d),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(phrase: &str, score: f64) -> KeywordScore {
        KeywordScore {
            phrase: phrase.into(),
            sum_degree: 0,
            sum_frequency: 0,
            score,
        }
    }

    fn phrase(text: &str) -> CandidatePhrase {
        CandidatePhrase::new(text.split(' ').map(String::from).collect())
    }

    #[test]
    fn test_candidate_set_counts() {
        let set = CandidateSet::new(vec![phrase("big data"), phrase("big data"), phrase("big")]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.unique_count(), 2);
        assert_eq!(set.texts(), vec!["big data", "big data", "big"]);
        assert_eq!(serde_json::to_value(&set).unwrap()[2], "big");
    }

    #[test]
    fn test_top_fraction() {
        let result = RakeResult {
            keyword_scores: (0..7).map(|i| keyword(&format!("k{i}"), 7.0 - i as f64)).collect(),
            ..RakeResult::default()
        };
        assert_eq!(result.top_fraction(3).len(), 2);
        assert_eq!(result.top_fraction(1).len(), 7);
        assert!(result.top_fraction(0).is_empty());
        assert_eq!(result.top_n(100).len(), 7);
        assert_eq!(result.keywords()[0], "k0");
    }

    #[test]
    fn test_empty_result() {
        let result = RakeResult::default();
        assert!(result.is_empty());
        assert!(result.top_fraction(3).is_empty());
        assert!(result.candidates.is_empty());
    }
}
