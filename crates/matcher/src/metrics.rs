//! Observer hook for match timings.
//!
//! One recorder is shared by the whole process. [`BatchMatcher`](crate::BatchMatcher)
//! reports a single `match_pair` call through `record_match` and a whole
//! batch through `record_batch`; entries inside a batch are not reported
//! one by one. Without a recorder installed, reporting is a single
//! read-lock and an early return.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

type SharedRecorder = Arc<dyn MatchMetrics>;

static RECORDER: OnceCell<RwLock<Option<SharedRecorder>>> = OnceCell::new();

/// Receives timings and hit counts from the matcher.
///
/// A `BatchMatcher` shared across threads reports from each of them.
pub trait MatchMetrics: Send + Sync {
    /// One `match_pair` call. `latency` includes cache lookups.
    fn record_match(&self, allow_typo: bool, latency: Duration, matched: bool);

    /// A finished batch: `queries` entries, of which `matched` matched.
    fn record_batch(&self, allow_typo: bool, latency: Duration, queries: usize, matched: usize) {
        let _ = (allow_typo, latency, queries, matched);
    }
}

fn slot() -> &'static RwLock<Option<SharedRecorder>> {
    RECORDER.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<SharedRecorder> {
    slot()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replaces the process-wide recorder. `None` turns reporting off.
pub fn set_match_metrics(recorder: Option<SharedRecorder>) {
    *slot()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = recorder;
}
