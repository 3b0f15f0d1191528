use thiserror::Error;

/// A statistic was requested over data that does not define it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("statistics undefined: the score series is empty")]
    EmptySeries,
    #[error("statistics undefined: the score series has no matched entries")]
    NoMatches,
    #[error("statistics undefined: standard deviation is zero")]
    ZeroDeviation,
}
