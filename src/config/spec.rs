//! Extractor configuration.
//!
//! A [`RakeConfig`] selects the stoplist, the punctuation and delimiter
//! characters, and the runtime limits. Configs are checked by the
//! [`super::validation::ConfigValidator`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "stopwords": "smart",
//!   "extra_stopwords": ["et", "al"],
//!   "runtime": { "max_chars": 1000000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::{ConfigValidator, ValidationReport};
use crate::error::{RakeError, Result};
use crate::nlp::stopwords::{load_source, StopwordSet, StopwordSource};
use crate::nlp::tokenizer::DEFAULT_WORD_DELIMITERS;
use crate::phrase::candidates::{GeneratorConfig, DEFAULT_PUNCTUATION};

/// Current config version.
pub const CONFIG_VERSION: u32 = 1;

/// Default cap on input length, in characters.
pub const DEFAULT_MAX_CHARS: usize = 10_000_000;

/// Top-level extractor configuration (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RakeConfig {
    /// Config version (currently `1`).
    pub v: u32,

    /// Bundled stoplist.
    #[serde(default)]
    pub stopwords: StopwordSource,

    /// Words added on top of the bundled stoplist.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// Characters that close a phrase when they end a token.
    #[serde(default = "default_punctuation")]
    pub punctuation: String,

    /// Characters that separate tokens.
    #[serde(default = "default_word_delimiters")]
    pub word_delimiters: String,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeLimits,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeLimits {
    /// Maximum number of input characters before rejecting.
    #[serde(default = "default_max_chars")]
    pub max_chars: Option<usize>,

    /// Maximum number of tokens before rejecting.
    #[serde(default)]
    pub max_tokens: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_punctuation() -> String {
    DEFAULT_PUNCTUATION.to_string()
}

fn default_word_delimiters() -> String {
    DEFAULT_WORD_DELIMITERS.to_string()
}

fn default_max_chars() -> Option<usize> {
    Some(DEFAULT_MAX_CHARS)
}

impl Default for RuntimeLimits {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            max_tokens: None,
            unknown_fields: HashMap::new(),
        }
    }
}

impl Default for RakeConfig {
    fn default() -> Self {
        Self {
            v: CONFIG_VERSION,
            stopwords: StopwordSource::default(),
            extra_stopwords: Vec::new(),
            punctuation: default_punctuation(),
            word_delimiters: default_word_delimiters(),
            runtime: RuntimeLimits::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl RakeConfig {
    /// Default config using the given stoplist.
    pub fn with_source(source: StopwordSource) -> Self {
        Self {
            stopwords: source,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config.
    ///
    /// Fails with [`RakeError::InvalidConfig`] listing every error-severity
    /// diagnostic. Warnings do not fail parsing.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RakeConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Run the default validator.
    pub fn validate(&self) -> ValidationReport {
        ConfigValidator::with_defaults().validate(self)
    }

    /// Validate and convert errors into a [`RakeError`].
    pub fn check(&self) -> Result<()> {
        let report = self.validate();
        if report.has_errors() {
            return Err(RakeError::InvalidConfig(report.errors().cloned().collect()));
        }
        Ok(())
    }

    /// The bundled stoplist plus any extra words.
    pub fn stopword_set(&self) -> StopwordSet {
        load_source(self.stopwords).extended(&self.extra_stopwords)
    }

    /// Punctuation and delimiter settings for the candidate generator.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            punctuation: self.punctuation.clone(),
            word_delimiters: self.word_delimiters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let config: RakeConfig = serde_json::from_str(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(config.v, 1);
        assert_eq!(config.stopwords, StopwordSource::Smart);
        assert_eq!(config.punctuation, DEFAULT_PUNCTUATION);
        assert_eq!(config.word_delimiters, DEFAULT_WORD_DELIMITERS);
        assert_eq!(config.runtime.max_chars, Some(DEFAULT_MAX_CHARS));
        assert!(config.runtime.max_tokens.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "v": 1,
            "stopwords": "fox",
            "extra_stopwords": ["Et", "al"],
            "punctuation": ".,;",
            "word_delimiters": " \n",
            "runtime": { "max_chars": 5000, "max_tokens": 100 },
            "strict": true
        }"#;
        let config = RakeConfig::from_json(json).unwrap();
        assert_eq!(config.stopwords, StopwordSource::Fox);
        assert_eq!(config.runtime.max_chars, Some(5000));
        assert_eq!(config.runtime.max_tokens, Some(100));
        assert!(config.strict);

        let set = config.stopword_set();
        assert!(set.contains("et"));
        assert!(set.contains("numbers"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{
            "v": 1,
            "bogus_top_level": 42,
            "runtime": { "max_chars": 10, "bogus_limit": 1 }
        }"#;
        let config: RakeConfig = serde_json::from_str(json).unwrap();
        assert!(config.unknown_fields.contains_key("bogus_top_level"));
        assert!(config.runtime.unknown_fields.contains_key("bogus_limit"));
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = RakeConfig::from_json(r#"{ "v": 2 }"#).unwrap_err();
        assert!(matches!(err, RakeError::InvalidConfig(ref errors) if errors.len() == 1));

        let err = RakeConfig::from_json(r#"{ "v": 1, "stopwords": "bogus" }"#).unwrap_err();
        assert!(matches!(err, RakeError::Json(_)));
    }

    #[test]
    fn test_serde_roundtrip_names() {
        let config = RakeConfig::with_source(StopwordSource::Fox);
        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["stopwords"], "fox");
        assert_eq!(back["runtime"]["max_chars"], DEFAULT_MAX_CHARS);
    }
}
