use thiserror::Error;

/// Errors raised while configuring the prepared-string cache.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("invalid cache configuration: {0}")]
    InvalidConfig(String),
}
