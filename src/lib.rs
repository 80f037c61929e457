//! # rapid-rake
//!
//! Rapid Automatic Keyword Extraction (Rose, Engel, Cramer and Cowley, 2010).
//!
//! Text is split into candidate phrases at stopwords and at tokens ending in
//! punctuation. Each word is scored by `degree / frequency`, where degree sums
//! the lengths of the phrases the word occurs in, and each phrase is scored by
//! the sum of its word scores.
//!
//! ```
//! use rapid_rake::extract_keywords;
//!
//! let keywords = extract_keywords(
//!     "Compatibility of systems of linear constraints over the set of natural numbers.",
//!     "smart",
//! )
//! .unwrap();
//! assert_eq!(keywords[0].phrase, "linear constraints");
//! assert_eq!(keywords[0].score, 4.0);
//! ```
//!
//! Two stoplists are bundled: SMART (Salton 1971) and Fox (1989).

pub mod config;
pub mod error;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod rake;
pub mod scoring;
pub mod types;

pub use config::RakeConfig;
pub use error::{RakeError, Result};
pub use nlp::stopwords::{load, load_source, StopwordSet, StopwordSource};
pub use pipeline::artifacts::{CandidateSet, RakeResult};
pub use rake::Rake;
pub use types::{CandidatePhrase, KeywordScore, WordScore};

/// Ranked keywords for `text` using a bundled stoplist by name.
pub fn extract_keywords(text: &str, stopword_source: &str) -> Result<Vec<KeywordScore>> {
    Ok(Rake::from_source_name(stopword_source)?
        .run(text)?
        .keyword_scores)
}

/// [`extract_keywords`] with the SMART stoplist.
pub fn extract_keywords_default(text: &str) -> Result<Vec<KeywordScore>> {
    extract_keywords(text, StopwordSource::Smart.as_str())
}

/// Ranked keywords for many texts, processed in parallel.
pub fn extract_keywords_batch<S: AsRef<str> + Sync>(
    texts: &[S],
    stopword_source: &str,
) -> Result<Vec<Vec<KeywordScore>>> {
    Rake::from_source_name(stopword_source)?
        .run_batch(texts)
        .into_iter()
        .map(|r| r.map(|result| result.keyword_scores))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_default_is_smart() {
        let text = "Criteria of compatibility of a system of linear Diophantine equations.";
        assert_eq!(
            extract_keywords_default(text).unwrap(),
            extract_keywords(text, "smart").unwrap()
        );
    }

    #[test]
    fn test_extract_keywords_invalid_source() {
        assert!(matches!(
            extract_keywords("text", "bogus"),
            Err(RakeError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_extract_keywords_batch() {
        let out = extract_keywords_batch(&["the big data systems.", ""], "fox").unwrap();
        assert_eq!(out.len(), 2);
        // Fox lists "big".
        assert_eq!(out[0][0].phrase, "data systems");
        assert!(out[1].is_empty());
    }
}
