//! Stopword sets
//!
//! Bundles the SMART (Salton 1971) and Fox (1989) stoplists and resolves them
//! by name. Custom sets can be built from a word list or from the `stop-words`
//! crate's ISO lists.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

use crate::error::{RakeError, Result};

const SMART_STOPLIST: &str = include_str!("../../data/SmartStoplist.txt");
const FOX_STOPLIST: &str = include_str!("../../data/FoxStoplist.txt");

static SMART: Lazy<StopwordSet> = Lazy::new(|| StopwordSet::parse_bundled(SMART_STOPLIST));
static FOX: Lazy<StopwordSet> = Lazy::new(|| StopwordSet::parse_bundled(FOX_STOPLIST));

/// A bundled stoplist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordSource {
    /// SMART stoplist, 570 words
    #[default]
    Smart,
    /// Fox stoplist, 423 words
    Fox,
}

impl StopwordSource {
    /// Lowercase name, as accepted by [`load`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smart => "smart",
            Self::Fox => "fox",
        }
    }
}

impl fmt::Display for StopwordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopwordSource {
    type Err = RakeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "smart" => Ok(Self::Smart),
            "fox" => Ok(Self::Fox),
            _ => Err(RakeError::InvalidSource(value.to_string())),
        }
    }
}

/// An immutable set of lowercase stopwords.
///
/// Clones share storage, so handing a set to several pipelines is cheap.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: Arc<FxHashSet<String>>,
}

impl PartialEq for StopwordSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.words, &other.words) || self.words == other.words
    }
}

impl Eq for StopwordSet {}

impl StopwordSet {
    /// An empty set; every token becomes part of a candidate.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a custom list, lowercasing each word.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let words: FxHashSet<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self {
            words: Arc::new(words),
        }
    }

    /// Build a set from the `stop-words` ISO list for a language code.
    ///
    /// Accepts ISO 639-1 codes or English language names, case-insensitively.
    /// Anything else fails with [`RakeError::InvalidSource`].
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            _ => return Err(RakeError::InvalidSource(language.to_string())),
        };
        let words: Vec<String> = get(lang).iter().map(|s| s.to_string()).collect();
        Ok(Self::from_list(&words))
    }

    /// Return a new set with `extra` words added. The receiver is unchanged.
    pub fn extended<S: AsRef<str>>(&self, extra: &[S]) -> Self {
        if extra.is_empty() {
            return self.clone();
        }
        let mut words = (*self.words).clone();
        words.extend(extra.iter().map(|w| w.as_ref().to_lowercase()));
        Self {
            words: Arc::new(words),
        }
    }

    /// Exact membership test; callers pass lowercase words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether two sets share the same storage.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.words, &other.words)
    }

    fn parse_bundled(data: &str) -> Self {
        let words: FxHashSet<String> = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self {
            words: Arc::new(words),
        }
    }
}

/// Resolve a bundled stoplist by name.
///
/// Names are matched case-insensitively after trimming whitespace.
pub fn load(source: &str) -> Result<StopwordSet> {
    source.parse().map(load_source)
}

/// Resolve a bundled stoplist. Each list is parsed once per process.
pub fn load_source(source: StopwordSource) -> StopwordSet {
    match source {
        StopwordSource::Smart => SMART.clone(),
        StopwordSource::Fox => FOX.clone(),
    }
}
