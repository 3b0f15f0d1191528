use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A successful match of one query against one target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Non-positive relevance score; closer to zero is better.
    pub score: i64,
    /// Target char index for every query char, strictly increasing.
    pub matched_positions: Vec<usize>,
    /// Whether the word-boundary pass produced the positions. When `false`
    /// the greedy pass did, and the score carries the simple-match penalty.
    pub used_strict_phase: bool,
    /// Whether the winning pass needed an adjacent transposition.
    pub typo_used: bool,
}

/// Result of matching one query against one target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchOutcome {
    NoMatch,
    Match(FuzzyMatch),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match(_))
    }

    pub fn score(&self) -> Option<i64> {
        self.as_match().map(|m| m.score)
    }

    pub fn as_match(&self) -> Option<&FuzzyMatch> {
        match self {
            MatchOutcome::Match(m) => Some(m),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn into_match(self) -> Option<FuzzyMatch> {
        match self {
            MatchOutcome::Match(m) => Some(m),
            MatchOutcome::NoMatch => None,
        }
    }
}

impl From<Option<FuzzyMatch>> for MatchOutcome {
    fn from(value: Option<FuzzyMatch>) -> Self {
        value.map_or(MatchOutcome::NoMatch, MatchOutcome::Match)
    }
}

/// Scoring knobs for the match engine.
///
/// The defaults reproduce the reference scores; changing them changes every
/// score, so bump `version` when persisting scores produced with other
/// values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Subtracted once when the winning pass used a transposition.
    #[serde(default = "MatchConfig::default_typo_penalty")]
    pub typo_penalty: i64,
    /// Multiplier applied to the gap cost of a match that only the greedy
    /// pass found.
    #[serde(default = "MatchConfig::default_simple_penalty_factor")]
    pub simple_penalty_factor: i64,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_typo_penalty() -> i64 {
        20
    }

    pub(crate) fn default_simple_penalty_factor() -> i64 {
        1000
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.typo_penalty < 0 {
            return Err(MatchError::InvalidConfig(
                "typo_penalty must be >= 0".into(),
            ));
        }
        if self.simple_penalty_factor < 1 {
            return Err(MatchError::InvalidConfig(
                "simple_penalty_factor must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            typo_penalty: Self::default_typo_penalty(),
            simple_penalty_factor: Self::default_simple_penalty_factor(),
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("query must not be empty")]
    EmptyQuery,
    #[error("target must not be empty")]
    EmptyTarget,
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.typo_penalty, 20);
        assert_eq!(cfg.simple_penalty_factor, 1000);
    }

    #[test]
    fn negative_typo_penalty_rejected() {
        let cfg = MatchConfig {
            typo_penalty: -1,
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("typo_penalty")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_penalty_factor_rejected() {
        let cfg = MatchConfig {
            simple_penalty_factor: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let outcome = MatchOutcome::Match(FuzzyMatch {
            score: -3,
            matched_positions: vec![0, 1],
            used_strict_phase: true,
            typo_used: false,
        });
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["type"], "match");
        assert_eq!(json["score"], -3);

        let none = serde_json::to_value(MatchOutcome::NoMatch).expect("serialize");
        assert_eq!(none["type"], "no_match");
    }

    #[test]
    fn outcome_accessors() {
        assert_eq!(MatchOutcome::NoMatch.score(), None);
        assert!(!MatchOutcome::from(None).is_match());
    }
}
