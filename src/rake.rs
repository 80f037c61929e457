//! RAKE extractor
//!
//! [`Rake`] bundles a stoplist, a configured [`RakePipeline`] and the config
//! it was built from. It holds no per-run state, so one instance can serve
//! many texts, in parallel with [`Rake::run_batch`].

use rayon::prelude::*;

use crate::config::RakeConfig;
use crate::error::{RakeError, Result};
use crate::nlp::stopwords::{StopwordSet, StopwordSource};
use crate::pipeline::artifacts::RakeResult;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::{InputLimits, PipelineBuilder, RakePipeline};
use crate::pipeline::traits::DelimiterCandidateSelector;

/// Rapid Automatic Keyword Extraction over a fixed stoplist.
#[derive(Debug, Clone)]
pub struct Rake {
    config: RakeConfig,
    stopwords: StopwordSet,
    custom_stopwords: bool,
    pipeline: RakePipeline,
}

impl Default for Rake {
    fn default() -> Self {
        Self::new(StopwordSource::Smart)
    }
}

impl Rake {
    /// Create an extractor using a bundled stoplist and default settings.
    pub fn new(source: StopwordSource) -> Self {
        Self::build(RakeConfig::with_source(source))
    }

    /// Create an extractor from a stoplist name (`"smart"` or `"fox"`).
    pub fn from_source_name(source: &str) -> Result<Self> {
        Ok(Self::new(source.parse()?))
    }

    /// Create an extractor from a config, validating it first.
    pub fn with_config(config: RakeConfig) -> Result<Self> {
        config.check()?;
        #[cfg(feature = "tracing")]
        for warning in config.validate().warnings() {
            tracing::warn!(%warning, "config warning");
        }
        Ok(Self::build(config))
    }

    /// Replace the stoplist with a custom set.
    ///
    /// The config's `extra_stopwords` are cleared, since they were merged
    /// into the replaced set. Its `stopwords` field then no longer names the
    /// active stoplist; see [`Self::has_custom_stopwords`].
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self.config.extra_stopwords.clear();
        self.custom_stopwords = true;
        self
    }

    fn build(config: RakeConfig) -> Self {
        let pipeline = PipelineBuilder::new()
            .selector(DelimiterCandidateSelector::with_config(&config.generator_config()))
            .limits(InputLimits::from(&config.runtime))
            .build();
        Self {
            stopwords: config.stopword_set(),
            custom_stopwords: false,
            pipeline,
            config,
        }
    }

    /// Config the extractor was built from
    pub fn config(&self) -> &RakeConfig {
        &self.config
    }

    /// Stoplist applied on every run
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Whether [`Self::with_stopwords`] replaced the configured stoplist.
    pub fn has_custom_stopwords(&self) -> bool {
        self.custom_stopwords
    }

    /// Extract and rank keywords from `text`.
    pub fn run(&self, text: &str) -> Result<RakeResult> {
        self.run_observed(text, &mut NoopObserver)
    }

    /// Like [`Self::run`], reporting stage boundaries to `observer`.
    pub fn run_observed(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<RakeResult> {
        let result = self.pipeline.run(text, &self.stopwords, observer)?;
        log_result(&result);
        Ok(result)
    }

    /// Extract keywords from raw bytes, which must be UTF-8.
    pub fn run_bytes(&self, bytes: &[u8]) -> Result<RakeResult> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            RakeError::InvalidArgument(format!("input is not valid UTF-8: {e}"))
        })?;
        self.run(text)
    }

    /// Extract keywords from pre-tokenized input.
    pub fn run_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<RakeResult> {
        let result = self
            .pipeline
            .run_tokens(tokens, &self.stopwords, &mut NoopObserver)?;
        log_result(&result);
        Ok(result)
    }

    /// Process many texts in parallel. Results are in input order and each
    /// text succeeds or fails on its own.
    pub fn run_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Result<RakeResult>> {
        texts.par_iter().map(|t| self.run(t.as_ref())).collect()
    }
}

#[cfg(feature = "tracing")]
fn log_result(result: &RakeResult) {
    tracing::debug!(
        candidates = result.candidates.len(),
        words = result.word_scores.len(),
        keywords = result.keyword_scores.len(),
        "rake run complete"
    );
}

#[cfg(not(feature = "tracing"))]
fn log_result(_result: &RakeResult) {}
