//! # Fuzzy Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` scores how well a short query (a trigger word, a command name)
//! fits inside a longer target (a chat message, a file path). It sits on top
//! of `prepare`, which turns strings into lower-case codes and word-beginning
//! tables, and produces the [`ScoreSeries`](stats::ScoreSeries) values that
//! `stats` summarizes.
//!
//! Matching runs in two passes:
//! - a greedy pass that places each query char at the next equal char, and
//! - a strict pass that only ever jumps between word beginnings.
//!
//! A strict success scores by its gaps; a greedy-only success is multiplied by
//! [`MatchConfig::simple_penalty_factor`]. With typos allowed, either pass may
//! swap one adjacent pair of query chars ("firts" finds "first") at the cost
//! of [`MatchConfig::typo_penalty`].
//!
//! ## Core Types
//!
//! - [`MatchOutcome`]: `NoMatch` or a [`FuzzyMatch`] with score and positions.
//! - [`MatchSession`]: scratch buffers; reuse one per thread of work.
//! - [`BatchMatcher`]: cache-backed pair and batch evaluation.
//! - [`Tolerance`]: selects [`match_with_typo`] or [`match_strict_only`].
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use matcher::{BatchMatcher, MatchConfig};
//! use prepare::PreparedCache;
//!
//! let matcher = BatchMatcher::new(Arc::new(PreparedCache::default()), MatchConfig::default())
//!     .expect("valid config");
//!
//! let outcome = matcher
//!     .match_pair("firts", "Hi first time in your room", true)
//!     .expect("non-empty inputs");
//! let hit = outcome.as_match().expect("transposition is tolerated");
//! assert!(hit.typo_used);
//!
//! let series = matcher
//!     .run("Hi first time in your room", &["room", "giraffe"], true)
//!     .expect("non-empty target");
//! assert_eq!(series.matched_count(), 1);
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-pair and per-batch latency and match counts. `tracing` events
//! (`match_complete`, `batch_complete`, `batch_empty_query`) carry the same
//! data for log-based setups.

pub mod batch;
pub mod engine;
pub mod metrics;
pub mod session;
pub mod types;

pub use crate::batch::BatchMatcher;
pub use crate::engine::{match_prepared, match_strict_only, match_with_typo, Tolerance};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::session::MatchSession;
pub use crate::types::{FuzzyMatch, MatchConfig, MatchError, MatchOutcome};
