//! Core data types shared across the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A candidate keyword: a run of lowercase words found between stopword or
/// punctuation boundaries.
///
/// `words` may end with an empty word when a lone punctuation token closed the
/// phrase (`"big -"` becomes `["big", ""]`). The empty word is part of the
/// phrase text, so `"big "` and `"big"` are distinct candidates, but it is not
/// a scoring word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidatePhrase {
    words: Vec<String>,
    text: String,
}

impl CandidatePhrase {
    /// Build a phrase from its words, joined by single spaces.
    pub fn new(words: Vec<String>) -> Self {
        let text = words.join(" ");
        Self { words, text }
    }

    /// All words in order, including a trailing empty word if present.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words that take part in scoring (non-empty words).
    pub fn scoring_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| !w.is_empty())
    }

    /// Number of scoring words; the degree contribution of each occurrence.
    pub fn degree(&self) -> usize {
        self.scoring_words().count()
    }

    /// The joined phrase text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Serialize for CandidatePhrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl fmt::Display for CandidatePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Degree, frequency and score of one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    /// Sum of phrase lengths over every occurrence
    pub degree: usize,
    /// Number of occurrences across all candidates
    pub frequency: usize,
    /// `degree / frequency`, rounded to two decimals
    pub score: f64,
}

/// Summed word statistics for one unique candidate phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub phrase: String,
    pub sum_degree: usize,
    pub sum_frequency: usize,
    pub score: f64,
}

/// Round `numerator / denominator` to two decimals, ties to even.
///
/// The ratio is rounded exactly in integer arithmetic, so `49 / 40 = 1.225`
/// goes to `1.22` and `43 / 40 = 1.075` to `1.08`. This can differ from
/// rounding the nearest `f64` of the ratio, whose binary value sits just off
/// the decimal half. `denominator` must be non-zero.
pub fn round_ratio(numerator: usize, denominator: usize) -> f64 {
    let scaled = numerator * 100;
    let (quotient, remainder) = (scaled / denominator, scaled % denominator);
    let twice = remainder * 2;
    let rounded = if twice > denominator || (twice == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_text_joins_words() {
        let phrase = CandidatePhrase::new(vec!["linear".into(), "constraints".into()]);
        assert_eq!(phrase.text(), "linear constraints");
        assert_eq!(phrase.degree(), 2);
        assert_eq!(phrase.to_string(), "linear constraints");
    }

    #[test]
    fn test_trailing_empty_word_is_not_scored() {
        let phrase = CandidatePhrase::new(vec!["big".into(), String::new()]);
        assert_eq!(phrase.text(), "big ");
        assert_eq!(phrase.words().len(), 2);
        assert_eq!(phrase.degree(), 1);
        assert_eq!(phrase.scoring_words().collect::<Vec<_>>(), vec!["big"]);
    }

    #[test]
    fn test_phrase_serializes_as_text() {
        let phrase = CandidatePhrase::new(vec!["natural".into(), "numbers".into()]);
        assert_eq!(serde_json::to_string(&phrase).unwrap(), "\"natural numbers\"");
    }

    #[test]
    fn test_round_ratio_ties_to_even() {
        assert_eq!(round_ratio(5, 8), 0.62);
        assert_eq!(round_ratio(3, 8), 0.38);
        assert_eq!(round_ratio(49, 40), 1.22);
        assert_eq!(round_ratio(43, 40), 1.08);
        assert_eq!(round_ratio(41, 40), 1.02);
    }

    #[test]
    fn test_round_ratio_off_the_half() {
        assert_eq!(round_ratio(5, 3), 1.67);
        assert_eq!(round_ratio(8, 3), 2.67);
        assert_eq!(round_ratio(2, 1), 2.0);
        assert_eq!(round_ratio(26, 3), 8.67);
    }

    #[test]
    fn test_keyword_score_serializes() {
        let score = KeywordScore {
            phrase: "big data".into(),
            sum_degree: 9,
            sum_frequency: 5,
            score: 3.67,
        };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["phrase"], "big data");
        assert_eq!(json["sum_degree"], 9);
    }
}
