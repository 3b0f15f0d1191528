use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// How z-scores are computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZScoreFormula {
    /// `score - mean / std_dev`: one shared offset subtracted from every
    /// score. This is what earlier releases reported, kept so existing
    /// thresholds keep working.
    #[default]
    Legacy,
    /// `(score - mean) / std_dev`.
    Standard,
}

/// Configuration for [`analyze`](crate::analyze).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatsConfig {
    #[serde(default)]
    pub z_score: ZScoreFormula,
}

impl StatsConfig {
    pub fn standard() -> Self {
        Self {
            z_score: ZScoreFormula::Standard,
        }
    }

    /// Checks the section. Every formula variant is accepted, so this
    /// currently always succeeds.
    pub fn validate(&self) -> Result<(), StatsError> {
        match self.z_score {
            ZScoreFormula::Legacy | ZScoreFormula::Standard => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_formulas_validate() {
        assert!(StatsConfig::default().validate().is_ok());
        assert!(StatsConfig::standard().validate().is_ok());
    }

    #[test]
    fn formula_names_are_lowercase() {
        let cfg: StatsConfig = serde_json::from_str(r#"{"z_score":"standard"}"#).expect("parses");
        assert_eq!(cfg, StatsConfig::standard());
        let cfg: StatsConfig = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(cfg.z_score, ZScoreFormula::Legacy);
    }
}
