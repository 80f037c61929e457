//! Word scoring
//!
//! Each distinct word gets its frequency, its degree (sum of the lengths of
//! the phrases it occurs in, once per occurrence) and the ratio of the two.

use rustc_hash::FxHashMap;

use crate::types::{round_ratio, CandidatePhrase, WordScore};

/// Word scores in first-seen order, with lookup by word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordScoreTable {
    index: FxHashMap<String, usize>,
    entries: Vec<WordScore>,
}

impl WordScoreTable {
    /// Score of `word`, if it occurred in any candidate
    pub fn get(&self, word: &str) -> Option<&WordScore> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    /// Entries in the order their words first appeared
    pub fn entries(&self) -> &[WordScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by score descending, ties broken alphabetically by word
    pub fn sorted(&self) -> Vec<WordScore> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        sorted
    }

    /// Top `n` entries of [`Self::sorted`]
    pub fn top_n(&self, n: usize) -> Vec<WordScore> {
        let mut sorted = self.sorted();
        sorted.truncate(n);
        sorted
    }
}

/// Accumulate degree and frequency over every candidate, repeats included.
pub fn score_words(phrases: &[CandidatePhrase]) -> WordScoreTable {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut counts: Vec<(String, usize, usize)> = Vec::new();

    for phrase in phrases {
        let degree = phrase.degree();
        for word in phrase.scoring_words() {
            let slot = match index.get(word) {
                Some(&slot) => slot,
                None => {
                    index.insert(word.to_string(), counts.len());
                    counts.push((word.to_string(), 0, 0));
                    counts.len() - 1
                }
            };
            let entry = &mut counts[slot];
            entry.1 += degree;
            entry.2 += 1;
        }
    }

    // frequency >= 1 for every entry, so the division is always defined.
    let entries = counts
        .into_iter()
        .map(|(word, degree, frequency)| WordScore {
            word,
            degree,
            frequency,
            score: round_ratio(degree, frequency),
        })
        .collect();

    WordScoreTable { index, entries }
}
