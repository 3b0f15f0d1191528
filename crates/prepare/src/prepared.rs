use once_cell::sync::OnceCell;

use crate::boundary::{next_beginning_table, BoundaryTable};
use crate::codec::{encode, CodeSequence};

/// A target string with its derived match data.
///
/// The boundary table is only needed by the strict phase, so it is built on
/// first access and then kept for the lifetime of the value.
#[derive(Debug)]
pub struct PreparedTarget {
    raw: String,
    codes: CodeSequence,
    boundaries: OnceCell<BoundaryTable>,
}

impl PreparedTarget {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let codes = encode(&raw);
        Self {
            raw,
            codes,
            boundaries: OnceCell::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn codes(&self) -> &CodeSequence {
        &self.codes
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Next-beginning table, computed once on first use.
    pub fn boundaries(&self) -> &BoundaryTable {
        self.boundaries
            .get_or_init(|| next_beginning_table(&self.raw))
    }

    /// Whether [`boundaries`](Self::boundaries) has already been computed.
    pub fn has_boundaries(&self) -> bool {
        self.boundaries.get().is_some()
    }
}

/// A query string with its lower-case codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    raw: String,
    codes: CodeSequence,
}

impl PreparedQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let codes = encode(&raw);
        Self { raw, codes }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn codes(&self) -> &CodeSequence {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_lazy() {
        let target = PreparedTarget::new("Hello World");
        assert!(!target.has_boundaries());
        assert_eq!(target.boundaries().len(), target.len());
        assert!(target.has_boundaries());
    }

    #[test]
    fn query_codes_are_lowercase() {
        let query = PreparedQuery::new("ABC");
        assert_eq!(query.raw(), "ABC");
        assert_eq!(query.codes().as_slice(), encode("abc").as_slice());
    }
}
