//! Summary statistics over fuzzy match scores.
//!
//! A [`ScoreSeries`] holds the scores of several queries run against one
//! target (see the `matcher` crate's batch runner). This crate only needs the
//! series: it knows nothing about how the scores were produced.
//!
//! - [`Analyzer`] exposes each statistic on its own, recomputed per call.
//! - [`analyze`] gathers all of them into a serializable [`StatsReport`].
//!
//! Statistics that the data does not define (anything over an empty series,
//! match-only aggregates with no matches, z-scores with zero deviation) are
//! reported as [`StatsError`] instead of `NaN` or infinities.

mod analyzer;
mod config;
mod error;
mod series;

pub use crate::analyzer::{analyze, Analyzer, StatsReport};
pub use crate::config::{StatsConfig, ZScoreFormula};
pub use crate::error::StatsError;
pub use crate::series::ScoreSeries;
