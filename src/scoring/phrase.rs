//! Phrase scoring
//!
//! A phrase's score is the sum of its words' scores. Degree and frequency are
//! summed the same way. A word repeated inside a phrase is counted once per
//! occurrence.

use rustc_hash::FxHashSet;

use super::word::WordScoreTable;
use crate::types::{CandidatePhrase, KeywordScore};

/// Score each unique candidate and rank the results.
///
/// Candidates are de-duplicated by phrase text. Output is sorted by score
/// descending, ties broken alphabetically by phrase.
///
/// # Panics
///
/// If a word of a candidate is missing from `word_scores`. The table built by
/// [`super::word::score_words`] from the same candidates always contains every
/// word.
pub fn score_phrases(
    phrases: &[CandidatePhrase],
    word_scores: &WordScoreTable,
) -> Vec<KeywordScore> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut keywords: Vec<KeywordScore> = phrases
        .iter()
        .filter(|p| seen.insert(p.text()))
        .map(|p| score_phrase(p, word_scores))
        .collect();

    sort_keywords(&mut keywords);
    keywords
}

/// Sum the word statistics of a single phrase.
pub fn score_phrase(phrase: &CandidatePhrase, word_scores: &WordScoreTable) -> KeywordScore {
    let mut keyword = KeywordScore {
        phrase: phrase.text().to_string(),
        sum_degree: 0,
        sum_frequency: 0,
        score: 0.0,
    };

    for word in phrase.scoring_words() {
        let Some(ws) = word_scores.get(word) else {
            panic!("word `{word}` of candidate `{phrase}` has no word score");
        };
        keyword.sum_degree += ws.degree;
        keyword.sum_frequency += ws.frequency;
        keyword.score += ws.score;
    }

    keyword
}

/// Score descending, then phrase ascending.
pub fn sort_keywords(keywords: &mut [KeywordScore]) {
    keywords.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.phrase.cmp(&b.phrase))
    });
}
