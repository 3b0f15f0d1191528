use serde::Serialize;
use tracing::debug;

use crate::config::{StatsConfig, ZScoreFormula};
use crate::error::StatsError;
use crate::series::ScoreSeries;

/// Read-only statistics over a [`ScoreSeries`].
///
/// Nothing is cached; every accessor recomputes from the series. Aggregates
/// over *all* entries count a no-match as `0`, aggregates prefixed with
/// `match_` only look at matched entries.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    series: &'a ScoreSeries,
    formula: ZScoreFormula,
}

impl<'a> Analyzer<'a> {
    pub fn new(series: &'a ScoreSeries) -> Self {
        Self::with_config(series, &StatsConfig::default())
    }

    pub fn with_config(series: &'a ScoreSeries, cfg: &StatsConfig) -> Self {
        Self {
            series,
            formula: cfg.z_score,
        }
    }

    pub fn matched_scores(&self) -> Vec<i64> {
        self.series.matched().collect()
    }

    pub fn match_ratio(&self) -> Result<f64, StatsError> {
        self.require_entries()?;
        Ok(self.series.matched_count() as f64 / self.series.len() as f64)
    }

    pub fn mean(&self) -> Result<f64, StatsError> {
        self.require_entries()?;
        Ok(average(self.all_values()))
    }

    pub fn match_mean(&self) -> Result<f64, StatsError> {
        self.require_matches()?;
        Ok(average(self.matched_values()))
    }

    /// Smallest and largest matched score.
    pub fn min_max(&self) -> Result<(i64, i64), StatsError> {
        self.require_matches()?;
        let mut matched = self.series.matched();
        let first = matched.next().ok_or(StatsError::NoMatches)?;
        Ok(matched.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
    }

    pub fn range(&self) -> Result<i64, StatsError> {
        let (min, max) = self.min_max()?;
        Ok(max.saturating_sub(min))
    }

    /// Population standard deviation over all entries.
    pub fn std_deviation(&self) -> Result<f64, StatsError> {
        let mean = self.mean()?;
        Ok(deviation(self.all_values(), mean))
    }

    pub fn match_std_deviation(&self) -> Result<f64, StatsError> {
        let mean = self.match_mean()?;
        Ok(deviation(self.matched_values(), mean))
    }

    /// One value per entry, relative to the mean and deviation of all
    /// entries.
    pub fn z_scores(&self) -> Result<Vec<f64>, StatsError> {
        let mean = self.mean()?;
        let std_dev = self.std_deviation()?;
        self.z_scores_against(mean, std_dev)
    }

    /// One value per entry (matched or not), relative to the mean and
    /// deviation of the matched entries only.
    pub fn match_z_scores(&self) -> Result<Vec<f64>, StatsError> {
        let mean = self.match_mean()?;
        let std_dev = self.match_std_deviation()?;
        self.z_scores_against(mean, std_dev)
    }

    fn z_scores_against(&self, mean: f64, std_dev: f64) -> Result<Vec<f64>, StatsError> {
        if std_dev == 0.0 {
            return Err(StatsError::ZeroDeviation);
        }
        let scores = self.all_values();
        Ok(match self.formula {
            ZScoreFormula::Legacy => {
                let offset = mean / std_dev;
                scores.map(|s| s - offset).collect()
            }
            ZScoreFormula::Standard => scores.map(|s| (s - mean) / std_dev).collect(),
        })
    }

    fn all_values(&self) -> impl Iterator<Item = f64> + 'a {
        let series: &'a ScoreSeries = self.series;
        series
            .entries()
            .iter()
            .map(|e| e.unwrap_or(0) as f64)
    }

    fn matched_values(&self) -> impl Iterator<Item = f64> + 'a {
        let series: &'a ScoreSeries = self.series;
        series.matched().map(|s| s as f64)
    }

    fn require_entries(&self) -> Result<(), StatsError> {
        if self.series.is_empty() {
            return Err(StatsError::EmptySeries);
        }
        Ok(())
    }

    fn require_matches(&self) -> Result<(), StatsError> {
        self.require_entries()?;
        if self.series.matched_count() == 0 {
            return Err(StatsError::NoMatches);
        }
        Ok(())
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    sum / count as f64
}

fn deviation(values: impl Iterator<Item = f64>, mean: f64) -> f64 {
    average(values.map(|v| (v - mean).powi(2))).sqrt()
}

/// Every statistic for one series, as a serializable table.
///
/// Fields that depend on matched entries, or on a non-zero deviation, are
/// `None` when the series does not define them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub scores: ScoreSeries,
    pub matched_scores: Vec<i64>,
    pub match_ratio: f64,
    pub mean: f64,
    pub std_deviation: f64,
    pub z_scores: Option<Vec<f64>>,
    pub match_mean: Option<f64>,
    pub min_max: Option<(i64, i64)>,
    pub range: Option<i64>,
    pub match_std_deviation: Option<f64>,
    pub match_z_scores: Option<Vec<f64>>,
}

/// Computes a [`StatsReport`] for `series`.
///
/// Fails only when the series is empty.
pub fn analyze(series: &ScoreSeries, cfg: &StatsConfig) -> Result<StatsReport, StatsError> {
    let analyzer = Analyzer::with_config(series, cfg);

    let report = StatsReport {
        scores: series.clone(),
        matched_scores: analyzer.matched_scores(),
        match_ratio: analyzer.match_ratio()?,
        mean: analyzer.mean()?,
        std_deviation: analyzer.std_deviation()?,
        z_scores: analyzer.z_scores().ok(),
        match_mean: analyzer.match_mean().ok(),
        min_max: analyzer.min_max().ok(),
        range: analyzer.range().ok(),
        match_std_deviation: analyzer.match_std_deviation().ok(),
        match_z_scores: analyzer.match_z_scores().ok(),
    };

    debug!(
        entries = series.len(),
        matched = report.matched_scores.len(),
        formula = ?cfg.z_score,
        "series_analyzed"
    );
    Ok(report)
}
