use std::sync::Arc;
use std::time::Instant;

use prepare::{PreparedCache, PreparedTarget};
use stats::ScoreSeries;
use tracing::{debug, info, warn};

use crate::engine::{evaluate, Tolerance};
use crate::metrics::metrics_recorder;
use crate::session::MatchSession;
use crate::types::{MatchConfig, MatchError, MatchOutcome};

/// Runs many queries against one target through a shared prepared-string
/// cache.
///
/// The target is prepared once per call and every query goes through the
/// cache, so repeated trigger words cost one lookup. Output always has one
/// entry per query, in input order.
#[derive(Debug, Clone)]
pub struct BatchMatcher {
    cache: Arc<PreparedCache>,
    cfg: MatchConfig,
}

impl BatchMatcher {
    pub fn new(cache: Arc<PreparedCache>, cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cache, cfg })
    }

    pub fn cache(&self) -> &Arc<PreparedCache> {
        &self.cache
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Matches a single pair. Unlike batch entries, an empty query is an error.
    pub fn match_pair(
        &self,
        query: &str,
        target: &str,
        allow_typo: bool,
    ) -> Result<MatchOutcome, MatchError> {
        let start = Instant::now();
        if query.is_empty() {
            warn!(allow_typo, "match_rejected_empty_query");
            return Err(MatchError::EmptyQuery);
        }
        let target = self.prepare_target(target)?;
        let query = self.cache.query(query);

        let mut session = MatchSession::with_capacity(query.len());
        let outcome = evaluate(
            query.codes(),
            &target,
            &mut session,
            Tolerance::from_allow_typo(allow_typo),
            &self.cfg,
        );

        debug!(
            query_len = query.len(),
            target_len = target.len(),
            allow_typo,
            score = ?outcome.score(),
            "match_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(allow_typo, start.elapsed(), outcome.is_match());
        }
        Ok(outcome)
    }

    /// Scores every query against `target`, in order.
    pub fn run<S: AsRef<str>>(
        &self,
        target: &str,
        queries: &[S],
        allow_typo: bool,
    ) -> Result<ScoreSeries, MatchError> {
        let outcomes = self.outcomes(target, queries, allow_typo)?;
        Ok(outcomes.iter().map(MatchOutcome::score).collect())
    }

    /// Like [`run`](Self::run) but keeps the full outcome of every query.
    pub fn outcomes<S: AsRef<str>>(
        &self,
        target: &str,
        queries: &[S],
        allow_typo: bool,
    ) -> Result<Vec<MatchOutcome>, MatchError> {
        let start = Instant::now();
        let target = self.prepare_target(target)?;
        let tolerance = Tolerance::from_allow_typo(allow_typo);

        let mut session = MatchSession::new();
        let outcomes: Vec<MatchOutcome> = queries
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                self.evaluate_entry(index, raw.as_ref(), &target, &mut session, tolerance)
            })
            .collect();

        self.finish_batch(&outcomes, allow_typo, start);
        Ok(outcomes)
    }

    /// Same contract as [`run`](Self::run), evaluated on the rayon pool with
    /// one [`MatchSession`] per worker.
    #[cfg(feature = "parallel")]
    pub fn run_par<S: AsRef<str> + Sync>(
        &self,
        target: &str,
        queries: &[S],
        allow_typo: bool,
    ) -> Result<ScoreSeries, MatchError> {
        use rayon::prelude::*;

        let start = Instant::now();
        let target = self.prepare_target(target)?;
        let tolerance = Tolerance::from_allow_typo(allow_typo);

        let outcomes: Vec<MatchOutcome> = queries
            .par_iter()
            .enumerate()
            .map_init(MatchSession::new, |session, (index, raw)| {
                self.evaluate_entry(index, raw.as_ref(), &target, session, tolerance)
            })
            .collect();

        self.finish_batch(&outcomes, allow_typo, start);
        Ok(outcomes.iter().map(MatchOutcome::score).collect())
    }

    fn prepare_target(&self, raw: &str) -> Result<Arc<PreparedTarget>, MatchError> {
        if raw.is_empty() {
            warn!("match_rejected_empty_target");
            return Err(MatchError::EmptyTarget);
        }
        Ok(self.cache.target(raw))
    }

    fn evaluate_entry(
        &self,
        index: usize,
        raw: &str,
        target: &PreparedTarget,
        session: &mut MatchSession,
        tolerance: Tolerance,
    ) -> MatchOutcome {
        if raw.is_empty() {
            warn!(index, "batch_empty_query");
            return MatchOutcome::NoMatch;
        }
        let query = self.cache.query(raw);
        evaluate(query.codes(), target, session, tolerance, &self.cfg)
    }

    fn finish_batch(&self, outcomes: &[MatchOutcome], allow_typo: bool, start: Instant) {
        let matched = outcomes.iter().filter(|o| o.is_match()).count();
        let latency = start.elapsed();
        info!(
            queries = outcomes.len(),
            matched,
            allow_typo,
            elapsed_us = latency.as_micros() as u64,
            "batch_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_batch(allow_typo, latency, outcomes.len(), matched);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prepare::CacheConfig;

    const TEST_MSG: &str =
        "Hi first time in your how room miss muffet, are you new? old are you?";
    const QUERIES: [&str; 5] = ["how", "firts", "muffet", "giraffe", "lights"];

    fn matcher() -> BatchMatcher {
        let cache = PreparedCache::new(CacheConfig::default()).expect("valid cache config");
        BatchMatcher::new(Arc::new(cache), MatchConfig::default()).expect("valid match config")
    }

    #[test]
    fn batch_keeps_input_order() {
        let series = matcher().run(TEST_MSG, &QUERIES, true).expect("batch");
        assert_eq!(
            series.entries(),
            &[Some(-88), Some(-87), Some(-99), None, None]
        );
    }

    #[test]
    fn empty_query_entry_is_no_match() {
        let series = matcher()
            .run(TEST_MSG, &["how", "", "muffet"], true)
            .expect("batch");
        assert_eq!(series.len(), 3);
        assert_eq!(series.entries()[1], None);
        assert!(series.entries()[2].is_some());
    }

    #[test]
    fn empty_target_is_rejected() {
        let err = matcher().run("", &QUERIES, true).unwrap_err();
        assert_eq!(err, MatchError::EmptyTarget);
    }

    #[test]
    fn empty_batch_yields_empty_series() {
        let queries: [&str; 0] = [];
        let series = matcher().run(TEST_MSG, &queries, false).expect("batch");
        assert!(series.is_empty());
    }

    #[test]
    fn outcomes_match_pairwise_calls() {
        let m = matcher();
        let outcomes = m.outcomes(TEST_MSG, &QUERIES, false).expect("batch");
        for (query, outcome) in QUERIES.iter().zip(&outcomes) {
            let single = m.match_pair(query, TEST_MSG, false).expect("pair");
            assert_eq!(&single, outcome);
        }
    }

    #[test]
    fn match_pair_rejects_empty_query() {
        assert_eq!(
            matcher().match_pair("", TEST_MSG, true),
            Err(MatchError::EmptyQuery)
        );
    }

    #[test]
    fn batch_populates_cache() {
        let m = matcher();
        m.run(TEST_MSG, &QUERIES, true).expect("batch");
        m.run(TEST_MSG, &QUERIES, true).expect("batch");
        let stats = m.cache().stats();
        assert_eq!(stats.targets, 1);
        assert_eq!(stats.queries, QUERIES.len());
        assert!(stats.hits >= 6);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_run_matches_sequential() {
        let m = matcher();
        let queries: Vec<String> = QUERIES
            .iter()
            .cycle()
            .take(64)
            .map(|q| q.to_string())
            .collect();
        let sequential = m.run(TEST_MSG, &queries, true).expect("batch");
        let parallel = m.run_par(TEST_MSG, &queries, true).expect("batch");
        assert_eq!(sequential, parallel);
    }

    #[derive(Default)]
    struct RecordingMetrics {
        pairs: std::sync::Mutex<Vec<(bool, bool)>>,
        batches: std::sync::Mutex<Vec<(usize, usize)>>,
    }

    impl crate::metrics::MatchMetrics for RecordingMetrics {
        fn record_match(&self, allow_typo: bool, _latency: std::time::Duration, matched: bool) {
            self.pairs.lock().unwrap().push((allow_typo, matched));
        }

        fn record_batch(
            &self,
            _allow_typo: bool,
            _latency: std::time::Duration,
            queries: usize,
            matched: usize,
        ) {
            self.batches.lock().unwrap().push((queries, matched));
        }
    }

    #[test]
    fn metrics_recorder_observes_matches() {
        let metrics = Arc::new(RecordingMetrics::default());
        crate::metrics::set_match_metrics(Some(metrics.clone()));

        let m = matcher();
        m.match_pair("how", TEST_MSG, true).expect("pair");
        m.run(TEST_MSG, &QUERIES, true).expect("batch");

        // Other tests may run concurrently and report to the same recorder.
        assert!(metrics.pairs.lock().unwrap().contains(&(true, true)));
        assert!(metrics.batches.lock().unwrap().contains(&(5, 3)));

        crate::metrics::set_match_metrics(None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = MatchConfig {
            version: 0,
            ..MatchConfig::default()
        };
        let result = BatchMatcher::new(Arc::new(PreparedCache::default()), cfg);
        assert!(matches!(result, Err(MatchError::InvalidConfig(_))));
    }
}
