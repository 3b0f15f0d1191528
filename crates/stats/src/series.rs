use serde::{Deserialize, Serialize};

/// Ordered scores of several queries against one target.
///
/// Each entry is `Some(score)` for a match and `None` for no match, so a
/// genuine score of `0` stays distinguishable from a failed match. The
/// older representation, where `0` meant "no match", is accepted by
/// [`from_sentinel`](Self::from_sentinel) and produced by
/// [`sentinel_values`](Self::sentinel_values).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ScoreSeries {
    entries: Vec<Option<i64>>,
}

impl ScoreSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Builds a series from sentinel-encoded scores, where `0` is no match.
    pub fn from_sentinel<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        values
            .into_iter()
            .map(|v| if v == 0 { None } else { Some(v) })
            .collect()
    }

    /// Renders the series with `0` standing in for no match.
    pub fn sentinel_values(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.unwrap_or(0)).collect()
    }

    pub fn push(&mut self, entry: Option<i64>) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Option<i64>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores of the matched entries, in order.
    pub fn matched(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().flatten().copied()
    }

    pub fn matched_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

impl FromIterator<Option<i64>> for ScoreSeries {
    fn from_iter<T: IntoIterator<Item = Option<i64>>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Option<i64>> for ScoreSeries {
    fn extend<T: IntoIterator<Item = Option<i64>>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl From<Vec<Option<i64>>> for ScoreSeries {
    fn from(entries: Vec<Option<i64>>) -> Self {
        Self { entries }
    }
}
