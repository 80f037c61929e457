//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`Pipeline`] holds a statically composed set of stages. [`Pipeline::run`]
//! executes them in order, threading artifacts between stages and notifying a
//! [`PipelineObserver`] at each boundary. Input limits are checked before any
//! candidate is built, so a rejected input produces no partial result.

use super::artifacts::{CandidateSet, RakeResult};
use super::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_CANDIDATES, STAGE_PHRASE_SCORES,
    STAGE_PREPROCESS, STAGE_TOKENIZE, STAGE_WORD_SCORES,
};
use super::traits::{
    CandidateSelector, DegreeFrequencyScorer, DelimiterCandidateSelector, NoopPreprocessor,
    PhraseScorer, Preprocessor, SumPhraseScorer, WordScorer,
};
use crate::config::RuntimeLimits;
use crate::error::{RakeError, Result};
use crate::nlp::stopwords::StopwordSet;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("rake_stage", stage = $name).entered();
    };
}

/// Upper bounds on a single input. `None` disables a bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLimits {
    pub max_chars: Option<usize>,
    pub max_tokens: Option<usize>,
}

impl InputLimits {
    /// No bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    fn check_chars(&self, text: &str) -> Result<()> {
        if let Some(limit) = self.max_chars {
            // Byte length bounds char count from above; only count when needed.
            if text.len() > limit {
                let actual = text.chars().count();
                if actual > limit {
                    return Err(reject(limit, actual, "chars"));
                }
            }
        }
        Ok(())
    }

    fn check_tokens(&self, count: usize) -> Result<()> {
        match self.max_tokens {
            Some(limit) if count > limit => Err(reject(limit, count, "tokens")),
            _ => Ok(()),
        }
    }
}

impl From<&RuntimeLimits> for InputLimits {
    fn from(limits: &RuntimeLimits) -> Self {
        Self {
            max_chars: limits.max_chars,
            max_tokens: limits.max_tokens,
        }
    }
}

fn reject(limit: usize, actual: usize, unit: &'static str) -> RakeError {
    #[cfg(feature = "tracing")]
    tracing::warn!(limit, actual, unit, "input rejected by runtime limit");
    RakeError::InputTooLarge {
        limit,
        actual,
        unit,
    }
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Pre` | [`Preprocessor`] | [`NoopPreprocessor`] |
/// | `Sel` | [`CandidateSelector`] | [`DelimiterCandidateSelector`] |
/// | `WS`  | [`WordScorer`] | [`DegreeFrequencyScorer`] |
/// | `PS`  | [`PhraseScorer`] | [`SumPhraseScorer`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Pre, Sel, WS, PS> {
    pub preprocessor: Pre,
    pub selector: Sel,
    pub word_scorer: WS,
    pub phrase_scorer: PS,
    pub limits: InputLimits,
}

/// The standard RAKE pipeline.
pub type RakePipeline =
    Pipeline<NoopPreprocessor, DelimiterCandidateSelector, DegreeFrequencyScorer, SumPhraseScorer>;

impl RakePipeline {
    /// Default stages, default punctuation and delimiters, no limits.
    pub fn standard() -> Self {
        PipelineBuilder::new().build()
    }
}

impl<Pre, Sel, WS, PS> Pipeline<Pre, Sel, WS, PS>
where
    Pre: Preprocessor,
    Sel: CandidateSelector,
    WS: WordScorer,
    PS: PhraseScorer,
{
    /// Execute every stage on `text`.
    ///
    /// Stages run in order:
    /// 1. Preprocess
    /// 2. Tokenize (then check limits)
    /// 3. Select candidates
    /// 4. Score words
    /// 5. Score and rank phrases
    pub fn run(
        &self,
        text: &str,
        stopwords: &StopwordSet,
        observer: &mut impl PipelineObserver,
    ) -> Result<RakeResult> {
        self.limits.check_chars(text)?;

        // Stage 0: Preprocess
        trace_stage!(STAGE_PREPROCESS);
        observer.on_stage_start(STAGE_PREPROCESS);
        let clock = StageClock::start();
        let text = self.preprocessor.preprocess(text);
        observer.on_stage_end(STAGE_PREPROCESS, &StageReport::new(clock.elapsed()));
        self.limits.check_chars(&text)?;

        // Stage 1: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokens = self.selector.tokenize(&text);
        let report = StageReport::new(clock.elapsed()).with_items(tokens.len());
        observer.on_stage_end(STAGE_TOKENIZE, &report);

        self.run_stages(&tokens, stopwords, observer)
    }

    /// Execute the pipeline on pre-tokenized input, skipping preprocessing
    /// and tokenizing. Empty tokens are ignored.
    pub fn run_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        stopwords: &StopwordSet,
        observer: &mut impl PipelineObserver,
    ) -> Result<RakeResult> {
        self.run_stages(tokens, stopwords, observer)
    }

    fn run_stages<S: AsRef<str>>(
        &self,
        tokens: &[S],
        stopwords: &StopwordSet,
        observer: &mut impl PipelineObserver,
    ) -> Result<RakeResult> {
        self.limits.check_tokens(tokens.len())?;

        // Stage 2: Select candidates
        trace_stage!(STAGE_CANDIDATES);
        observer.on_stage_start(STAGE_CANDIDATES);
        let clock = StageClock::start();
        let candidates: CandidateSet = self.selector.select(tokens, stopwords);
        let report = StageReport::new(clock.elapsed()).with_items(candidates.len());
        observer.on_stage_end(STAGE_CANDIDATES, &report);
        observer.on_candidates(&candidates);

        // Stage 3: Score words
        trace_stage!(STAGE_WORD_SCORES);
        observer.on_stage_start(STAGE_WORD_SCORES);
        let clock = StageClock::start();
        let word_scores = self.word_scorer.score(&candidates);
        let report = StageReport::new(clock.elapsed()).with_items(word_scores.len());
        observer.on_stage_end(STAGE_WORD_SCORES, &report);
        observer.on_word_scores(&word_scores);

        // Stage 4: Score phrases
        trace_stage!(STAGE_PHRASE_SCORES);
        observer.on_stage_start(STAGE_PHRASE_SCORES);
        let clock = StageClock::start();
        let keyword_scores = self.phrase_scorer.score(&candidates, &word_scores);
        let report = StageReport::new(clock.elapsed()).with_items(keyword_scores.len());
        observer.on_stage_end(STAGE_PHRASE_SCORES, &report);
        observer.on_keyword_scores(&keyword_scores);

        Ok(RakeResult {
            word_scores: word_scores.sorted(),
            keyword_scores,
            candidates,
        })
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for a [`Pipeline`]. Starts from the standard RAKE stages.
///
/// ```
/// # use rapid_rake::pipeline::runner::{InputLimits, PipelineBuilder};
/// let pipeline = PipelineBuilder::new()
///     .limits(InputLimits { max_chars: Some(1_000), max_tokens: None })
///     .build();
/// ```
pub struct PipelineBuilder<
    Pre = NoopPreprocessor,
    Sel = DelimiterCandidateSelector,
    WS = DegreeFrequencyScorer,
    PS = SumPhraseScorer,
> {
    preprocessor: Pre,
    selector: Sel,
    word_scorer: WS,
    phrase_scorer: PS,
    limits: InputLimits,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        PipelineBuilder {
            preprocessor: NoopPreprocessor,
            selector: DelimiterCandidateSelector::default(),
            word_scorer: DegreeFrequencyScorer,
            phrase_scorer: SumPhraseScorer,
            limits: InputLimits::unbounded(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Pre, Sel, WS, PS> PipelineBuilder<Pre, Sel, WS, PS> {
    /// Override the preprocessor stage.
    pub fn preprocessor<P: Preprocessor>(self, p: P) -> PipelineBuilder<P, Sel, WS, PS> {
        PipelineBuilder {
            preprocessor: p,
            selector: self.selector,
            word_scorer: self.word_scorer,
            phrase_scorer: self.phrase_scorer,
            limits: self.limits,
        }
    }

    /// Override the candidate selector stage.
    pub fn selector<S: CandidateSelector>(self, s: S) -> PipelineBuilder<Pre, S, WS, PS> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            selector: s,
            word_scorer: self.word_scorer,
            phrase_scorer: self.phrase_scorer,
            limits: self.limits,
        }
    }

    /// Override the word scorer stage.
    pub fn word_scorer<W: WordScorer>(self, w: W) -> PipelineBuilder<Pre, Sel, W, PS> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            selector: self.selector,
            word_scorer: w,
            phrase_scorer: self.phrase_scorer,
            limits: self.limits,
        }
    }

    /// Override the phrase scorer stage.
    pub fn phrase_scorer<P: PhraseScorer>(self, p: P) -> PipelineBuilder<Pre, Sel, WS, P> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            selector: self.selector,
            word_scorer: self.word_scorer,
            phrase_scorer: p,
            limits: self.limits,
        }
    }

    pub fn limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Pipeline<Pre, Sel, WS, PS> {
        Pipeline {
            preprocessor: self.preprocessor,
            selector: self.selector,
            word_scorer: self.word_scorer,
            phrase_scorer: self.phrase_scorer,
            limits: self.limits,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::phrase::candidates::CandidateGenerator;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver};
    use crate::scoring::WordScoreTable;
    use crate::types::KeywordScore;

    fn stopwords() -> StopwordSet {
        StopwordSet::from_list(&["is"])
    }

    #[test]
    fn test_standard_pipeline_run() {
        let pipeline = RakePipeline::standard();
        let result = pipeline
            .run("big data. big data is big.", &stopwords(), &mut NoopObserver)
            .unwrap();

        assert_eq!(result.candidates.texts(), vec!["big data", "big data", "big"]);
        assert_eq!(result.keywords(), vec!["big data", "big"]);
        assert_eq!(result.word_scores[0].word, "data");
        assert_eq!(result.word_scores[1].word, "big");
    }

    #[test]
    fn test_pipeline_run_empty_input() {
        let pipeline = RakePipeline::standard();
        let result = pipeline.run("", &stopwords(), &mut NoopObserver).unwrap();
        assert!(result.candidates.is_empty());
        assert!(result.word_scores.is_empty());
        assert!(result.keyword_scores.is_empty());
    }

    #[test]
    fn test_pipeline_run_with_timing_observer() {
        let pipeline = RakePipeline::standard();
        let mut obs = StageTimingObserver::new();
        pipeline
            .run("big data. big data is big.", &stopwords(), &mut obs)
            .unwrap();

        let names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                STAGE_PREPROCESS,
                STAGE_TOKENIZE,
                STAGE_CANDIDATES,
                STAGE_WORD_SCORES,
                STAGE_PHRASE_SCORES,
            ]
        );
        assert_eq!(obs.report(STAGE_TOKENIZE).unwrap().items(), Some(6));
        assert_eq!(obs.report(STAGE_CANDIDATES).unwrap().items(), Some(3));
        assert_eq!(obs.report(STAGE_WORD_SCORES).unwrap().items(), Some(2));
        assert_eq!(obs.report(STAGE_PHRASE_SCORES).unwrap().items(), Some(2));
    }

    #[test]
    fn test_run_tokens_skips_text_stages() {
        let pipeline = RakePipeline::standard();
        let mut obs = StageTimingObserver::new();
        let result = pipeline
            .run_tokens(&["big", "data.", "is"], &stopwords(), &mut obs)
            .unwrap();
        assert_eq!(result.keywords(), vec!["big data"]);
        assert_eq!(obs.reports().len(), 3);
    }

    #[test]
    fn test_char_limit_rejects() {
        let pipeline = PipelineBuilder::new()
            .limits(InputLimits {
                max_chars: Some(5),
                max_tokens: None,
            })
            .build();
        let err = pipeline
            .run("big data.", &stopwords(), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(
            err,
            RakeError::InputTooLarge { limit: 5, actual: 9, unit: "chars" }
        ));
    }

    #[test]
    fn test_char_limit_counts_chars_not_bytes() {
        let pipeline = PipelineBuilder::new()
            .limits(InputLimits {
                max_chars: Some(4),
                max_tokens: None,
            })
            .build();
        // 4 chars, 12 bytes
        assert!(pipeline.run("データ。", &stopwords(), &mut NoopObserver).is_ok());
    }

    #[test]
    fn test_token_limit_rejects_before_candidates() {
        let pipeline = PipelineBuilder::new()
            .limits(InputLimits {
                max_chars: None,
                max_tokens: Some(2),
            })
            .build();
        let mut obs = StageTimingObserver::new();
        let err = pipeline
            .run("one two three.", &stopwords(), &mut obs)
            .unwrap_err();
        assert!(matches!(err, RakeError::InputTooLarge { unit: "tokens", .. }));
        assert!(obs.report(STAGE_CANDIDATES).is_none());
    }

    #[test]
    fn test_limits_from_runtime_config() {
        let runtime = RuntimeLimits {
            max_chars: Some(10),
            max_tokens: Some(3),
            ..RuntimeLimits::default()
        };
        let limits = InputLimits::from(&runtime);
        assert_eq!(limits.max_chars, Some(10));
        assert_eq!(limits.max_tokens, Some(3));
    }

    #[test]
    fn test_custom_preprocessor() {
        struct Dehyphenate;

        impl Preprocessor for Dehyphenate {
            fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
                Cow::Owned(text.replace('-', " "))
            }
        }

        let pipeline = PipelineBuilder::new().preprocessor(Dehyphenate).build();
        let result = pipeline
            .run("state-of-the-art methods.", &StopwordSet::from_list(&["of", "the"]), &mut NoopObserver)
            .unwrap();
        assert_eq!(result.keywords(), vec!["art methods", "state"]);
    }

    #[test]
    fn test_custom_selector_and_scorers() {
        struct Unit;

        impl WordScorer for Unit {
            fn score(&self, candidates: &CandidateSet) -> WordScoreTable {
                DegreeFrequencyScorer.score(candidates)
            }
        }

        struct Reverse;

        impl PhraseScorer for Reverse {
            fn score(&self, candidates: &CandidateSet, words: &WordScoreTable) -> Vec<KeywordScore> {
                let mut out = SumPhraseScorer.score(candidates, words);
                out.reverse();
                out
            }
        }

        let pipeline = PipelineBuilder::new()
            .selector(DelimiterCandidateSelector::new(
                CandidateGenerator::new().with_punctuation("!"),
            ))
            .word_scorer(Unit)
            .phrase_scorer(Reverse)
            .build();
        let result = pipeline
            .run("alpha beta! gamma delta! epsilon", &StopwordSet::empty(), &mut NoopObserver)
            .unwrap();
        assert_eq!(result.keywords(), vec!["gamma delta", "alpha beta"]);
    }
}
