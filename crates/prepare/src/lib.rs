//! Preparation layer for fuzzy matching.
//!
//! Everything the match engine compares is derived here from plain strings:
//!
//! - [`encode`] turns a string into lower-case char codes, one per `char`.
//! - [`beginnings`] and [`next_beginning_table`] find where words, numbers,
//!   punctuation runs and camelCase segments start in a target.
//! - [`PreparedTarget`] / [`PreparedQuery`] bundle those derived values.
//! - [`PreparedCache`] memoizes prepared values per distinct input string,
//!   bounded by a length cutoff and an LRU capacity.
//!
//! All derivations are pure: same string in, same codes and table out.
//!
//! ```rust
//! use prepare::{PreparedCache, CacheConfig};
//!
//! let cache = PreparedCache::new(CacheConfig::default()).expect("valid config");
//! let target = cache.target("Hello World");
//! assert_eq!(target.len(), 11);
//! assert_eq!(target.boundaries().next_after(0), 5);
//! ```

mod boundary;
mod cache;
mod codec;
mod config;
mod error;
mod prepared;

pub use crate::boundary::{beginnings, next_beginning_table, BoundaryTable};
pub use crate::cache::{CacheStats, PreparedCache};
pub use crate::codec::{encode, CodeSequence};
pub use crate::config::CacheConfig;
pub use crate::error::CacheError;
pub use crate::prepared::{PreparedQuery, PreparedTarget};
