//! Configuration for [`PreparedCache`](crate::PreparedCache).
//!
//! ```rust
//! use prepare::CacheConfig;
//!
//! let cfg = CacheConfig::default();
//! assert_eq!(cfg.max_cached_len, 999);
//! assert!(cfg.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Sizing policy for the prepared-string cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Strings with more chars than this are prepared fresh on every call
    /// and never stored.
    #[serde(default = "CacheConfig::default_max_cached_len")]
    pub max_cached_len: usize,
    /// Maximum entries kept per map (targets and queries are counted
    /// separately). Least recently used entries are evicted first.
    #[serde(default = "CacheConfig::default_capacity")]
    pub capacity: usize,
}

impl CacheConfig {
    pub(crate) fn default_max_cached_len() -> usize {
        999
    }

    pub(crate) fn default_capacity() -> usize {
        4096
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_cached_len(mut self, max_cached_len: usize) -> Self {
        self.max_cached_len = max_cached_len;
        self
    }

    pub fn validate(&self) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_cached_len: Self::default_max_cached_len(),
            capacity: Self::default_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_rejected() {
        let cfg = CacheConfig::default().with_capacity(0);
        let err = cfg.validate().expect_err("capacity 0 must be rejected");
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: CacheConfig = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(cfg, CacheConfig::default());
    }
}
