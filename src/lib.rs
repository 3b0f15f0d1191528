//! Workspace umbrella crate for fuzzmatch.
//!
//! This crate stitches together string preparation, two-pass fuzzy matching
//! and score statistics so callers can go from raw strings to a summary with
//! a single [`FuzzyMatcher`].
//!
//! ```
//! use fuzzmatch::FuzzyMatcher;
//!
//! let fm = FuzzyMatcher::default();
//! let target = "Hi first time in your how room miss muffet, are you new?";
//! let series = fm
//!     .run_batch(target, &["how", "firts", "giraffe"], true)
//!     .expect("non-empty target");
//! let report = fm.analyze(&series).expect("non-empty series");
//! assert_eq!(report.matched_scores.len(), 2);
//! ```

pub mod config;

pub use matcher::{
    BatchMatcher, FuzzyMatch, MatchConfig, MatchError, MatchMetrics, MatchOutcome, MatchSession,
    Tolerance, match_prepared, match_strict_only, match_with_typo, set_match_metrics,
};
pub use prepare::{
    BoundaryTable, CacheConfig, CacheError, CacheStats, CodeSequence, PreparedCache,
    PreparedQuery, PreparedTarget, beginnings, encode, next_beginning_table,
};
pub use stats::{Analyzer, ScoreSeries, StatsConfig, StatsError, StatsReport, ZScoreFormula};

pub use crate::config::{ConfigLoadError, FuzzConfig};

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by [`FuzzyMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzError {
    #[error("matching failed: {0}")]
    Match(#[from] MatchError),
    #[error("analysis failed: {0}")]
    Stats(#[from] StatsError),
    #[error("cache setup failed: {0}")]
    Cache(#[from] CacheError),
    #[error("target has {len} chars, limit is {max}")]
    TargetTooLong { len: usize, max: usize },
}

/// Cache-backed matcher plus statistics, configured once.
///
/// Holds its own [`PreparedCache`]; two matchers never share prepared
/// values unless built from the same cache with
/// [`from_parts`](Self::from_parts).
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    batch: BatchMatcher,
    stats_cfg: StatsConfig,
    max_target_len: Option<usize>,
}

impl FuzzyMatcher {
    pub fn new(cfg: &FuzzConfig) -> Result<Self, FuzzError> {
        let cache = PreparedCache::new(cfg.cache.clone())?;
        let mut matcher = Self::from_parts(Arc::new(cache), cfg.matcher.clone(), cfg.stats.clone())?;
        matcher.max_target_len = cfg.max_target_len;
        Ok(matcher)
    }

    pub fn from_parts(
        cache: Arc<PreparedCache>,
        match_cfg: MatchConfig,
        stats_cfg: StatsConfig,
    ) -> Result<Self, FuzzError> {
        Ok(Self {
            batch: BatchMatcher::new(cache, match_cfg)?,
            stats_cfg,
            max_target_len: None,
        })
    }

    /// Rejects targets with more than `max` chars.
    pub fn with_max_target_len(mut self, max: usize) -> Self {
        self.max_target_len = Some(max);
        self
    }

    pub fn max_target_len(&self) -> Option<usize> {
        self.max_target_len
    }

    pub fn match_pair(
        &self,
        query: &str,
        target: &str,
        allow_typo: bool,
    ) -> Result<MatchOutcome, FuzzError> {
        self.check_target(target)?;
        Ok(self.batch.match_pair(query, target, allow_typo)?)
    }

    /// One entry per query, in order; an empty query scores as no match.
    pub fn run_batch<S: AsRef<str>>(
        &self,
        target: &str,
        queries: &[S],
        allow_typo: bool,
    ) -> Result<ScoreSeries, FuzzError> {
        self.check_target(target)?;
        Ok(self.batch.run(target, queries, allow_typo)?)
    }

    #[cfg(feature = "parallel")]
    pub fn run_batch_par<S: AsRef<str> + Sync>(
        &self,
        target: &str,
        queries: &[S],
        allow_typo: bool,
    ) -> Result<ScoreSeries, FuzzError> {
        self.check_target(target)?;
        Ok(self.batch.run_par(target, queries, allow_typo)?)
    }

    /// Like [`run_batch`](Self::run_batch) but keeps positions and flags.
    pub fn outcomes<S: AsRef<str>>(
        &self,
        target: &str,
        queries: &[S],
        allow_typo: bool,
    ) -> Result<Vec<MatchOutcome>, FuzzError> {
        self.check_target(target)?;
        Ok(self.batch.outcomes(target, queries, allow_typo)?)
    }

    pub fn analyze(&self, series: &ScoreSeries) -> Result<StatsReport, FuzzError> {
        Ok(stats::analyze(series, &self.stats_cfg)?)
    }

    /// Drops every cached prepared string. Results are unaffected.
    pub fn clear_cache(&self) {
        self.batch.cache().clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.batch.cache().stats()
    }

    fn check_target(&self, target: &str) -> Result<(), FuzzError> {
        let Some(max) = self.max_target_len else {
            return Ok(());
        };
        let len = target.chars().count();
        if len > max {
            warn!(len, max, "target_too_long");
            return Err(FuzzError::TargetTooLong { len, max });
        }
        Ok(())
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(&FuzzConfig::default()).expect("default config is valid")
    }
}

/// One-shot match with default scoring and a throwaway cache.
pub fn single(query: &str, target: &str, allow_typo: bool) -> Result<MatchOutcome, FuzzError> {
    let cache = PreparedCache::new(CacheConfig::default().with_capacity(1))?;
    let matcher = FuzzyMatcher::from_parts(
        Arc::new(cache),
        MatchConfig::default(),
        StatsConfig::default(),
    )?;
    debug!(allow_typo, "single_match");
    matcher.match_pair(query, target, allow_typo)
}
