//! Pipeline observer: hooks for logging, profiling and debugging.
//!
//! Observers are notified at stage boundaries without coupling to stage
//! logic. All hooks have empty default bodies.

use std::time::{Duration, Instant};

use super::artifacts::CandidateSet;
use crate::scoring::WordScoreTable;
use crate::types::KeywordScore;

pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_CANDIDATES: &str = "candidates";
pub const STAGE_WORD_SCORES: &str = "word_scores";
pub const STAGE_PHRASE_SCORES: &str = "phrase_scores";

/// Measures one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the number of items the stage produced.
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Tokens, candidates, words or keywords, depending on the stage.
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Hooks called by the pipeline at stage boundaries. Every method defaults to
/// a no-op.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_candidates(&mut self, _candidates: &CandidateSet) {}

    fn on_word_scores(&mut self, _word_scores: &WordScoreTable) {}

    fn on_keyword_scores(&mut self, _keyword_scores: &[KeywordScore]) {}
}

/// Ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records a [`StageReport`] per stage, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all recorded stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_items() {
        let report = StageReport::new(Duration::from_millis(2)).with_items(5);
        assert_eq!(report.items(), Some(5));
        assert_eq!(report.elapsed(), Duration::from_millis(2));
        assert!(StageReport::new(Duration::ZERO).items().is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_CANDIDATES, &StageReport::new(Duration::from_millis(2)).with_items(3));

        let names: Vec<_> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_TOKENIZE, STAGE_CANDIDATES]);
        assert_eq!(obs.report(STAGE_CANDIDATES).unwrap().items(), Some(3));
        assert!(obs.report(STAGE_PHRASE_SCORES).is_none());
        assert_eq!(obs.total(), Duration::from_millis(3));
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
