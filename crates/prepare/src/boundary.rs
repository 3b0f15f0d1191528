//! Word-beginning detection for targets.
//!
//! A target is split into segments the way a quick-open picker sees
//! identifiers and prose: runs of letters or digits, each punctuation or
//! whitespace char on its own, and capitalized segments inside camelCase
//! words. The first index of every segment is a *beginning*.
//!
//! Classification is ASCII only. Every non-ASCII char counts as
//! non-alphanumeric, so it always starts (and ends) a segment.

use serde::{Deserialize, Serialize};

/// For every target index, the next beginning strictly after it.
///
/// Entries past the last beginning hold the target length. Because every
/// entry is greater than its own index, jumping through the table always
/// makes progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundaryTable(Vec<usize>);

impl BoundaryTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Next beginning after `index`, or the target length. Indices at or
    /// past the end also map to the target length.
    #[inline]
    pub fn next_after(&self, index: usize) -> usize {
        self.0.get(index).copied().unwrap_or(self.0.len())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Indices of every beginning in `raw`, in ascending order.
///
/// Index 0 is always a beginning for non-empty input.
pub fn beginnings(raw: &str) -> Vec<usize> {
    let mut out = Vec::new();
    let mut was_upper = false;
    let mut was_alnum = false;

    for (i, ch) in raw.chars().enumerate() {
        let is_upper = ch.is_ascii_uppercase();
        let is_alnum = ch.is_ascii_alphanumeric();
        if (is_upper && !was_upper) || !was_alnum || !is_alnum {
            out.push(i);
        }
        was_upper = is_upper;
        was_alnum = is_alnum;
    }

    out
}

/// Builds the [`BoundaryTable`] for `raw`.
pub fn next_beginning_table(raw: &str) -> BoundaryTable {
    let len = raw.chars().count();
    let starts = beginnings(raw);
    let mut table = Vec::with_capacity(len);
    let mut cursor = 0usize;

    for i in 0..len {
        while cursor < starts.len() && starts[cursor] <= i {
            cursor += 1;
        }
        table.push(starts.get(cursor).copied().unwrap_or(len));
    }

    BoundaryTable(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_and_separators() {
        assert_eq!(beginnings("how now"), vec![0, 3, 4]);
    }

    #[test]
    fn camel_case_and_digits() {
        // "getHTTP2Value": g, H (upper after lower), 2 is not a beginning
        // (alnum after alnum), V is one (upper after non-upper).
        assert_eq!(beginnings("getHTTP2Value"), vec![0, 3, 8]);
    }

    #[test]
    fn punctuation_marks_itself_and_the_next_char() {
        assert_eq!(beginnings("a,b"), vec![0, 1, 2]);
        assert_eq!(beginnings("..x"), vec![0, 1, 2]);
    }

    #[test]
    fn table_points_strictly_forward() {
        let raw = "Hi first";
        let table = next_beginning_table(raw);
        assert_eq!(table.as_slice(), &[2, 2, 3, 8, 8, 8, 8, 8]);
        for (i, next) in table.as_slice().iter().enumerate() {
            assert!(*next > i);
        }
    }

    #[test]
    fn lookups_past_the_end_return_length() {
        let table = next_beginning_table("Hi first");
        assert_eq!(table.next_after(3), 8);
        assert_eq!(table.next_after(8), 8);
        assert_eq!(table.next_after(usize::MAX), 8);
        assert_eq!(BoundaryTable::default().next_after(0), 0);
    }

    #[test]
    fn empty_target_has_empty_table() {
        assert!(next_beginning_table("").is_empty());
        assert!(beginnings("").is_empty());
    }

    #[test]
    fn non_ascii_is_a_separator() {
        // 'é' breaks the word, and 'x' after it starts a new one.
        assert_eq!(beginnings("caféx"), vec![0, 3, 4]);
    }
}
