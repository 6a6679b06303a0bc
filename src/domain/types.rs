//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during layout
//! - exported to SVG alongside their raw fields
//! - reloaded later for comparisons

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default dataset endpoint (freeCodeCamp quarterly US GDP reference data).
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// A normalized quarterly GDP observation.
///
/// `raw_date` retains the original "YYYY-MM-DD" string so that tooltip and
/// report formatting never have to re-serialize a parsed date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    /// GDP in billions of dollars.
    pub value: f64,
    pub raw_date: String,
}

impl Observation {
    /// Fiscal-quarter label for this observation, e.g. "1950 Q3".
    pub fn quarter(&self) -> Option<String> {
        quarter_label(&self.raw_date)
    }
}

/// Logical chart canvas dimensions (pixels).
///
/// All scale/axis/bar geometry is computed in this coordinate space; render
/// backends (terminal cells, SVG) map it to their own units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            padding: 60.0,
        }
    }
}

impl ChartConfig {
    /// Plot-area width between the left and right padding.
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Pixel y of the x-axis baseline (bars grow upward from here).
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

/// Where the raw dataset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// GET a JSON document of shape `{ "data": [["YYYY-MM-DD", value], ...] }`.
    Remote { url: String },
    /// Read the same JSON shape from disk.
    File { path: PathBuf },
    /// Deterministic synthetic quarterly series (offline runs and tests).
    Sample { count: usize, seed: u64 },
}

impl DataSource {
    /// Human-readable label for terminal output.
    pub fn display_name(&self) -> String {
        match self {
            DataSource::Remote { url } => url.clone(),
            DataSource::File { path } => path.display().to_string(),
            DataSource::Sample { count, seed } => {
                format!("synthetic sample (n={count}, seed={seed})")
            }
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ChartRunConfig {
    pub source: DataSource,
    pub chart: ChartConfig,
}

/// Dataset summary statistics computed once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_points: usize,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    pub value_min: f64,
    pub value_max: f64,
}

/// Compute summary statistics over a normalized dataset.
///
/// Returns `None` for an empty dataset.
pub fn compute_stats(observations: &[Observation]) -> Option<DatasetStats> {
    let first = observations.first()?;
    let mut stats = DatasetStats {
        n_points: observations.len(),
        date_min: first.date,
        date_max: first.date,
        value_min: first.value,
        value_max: first.value,
    };
    for obs in observations {
        stats.date_min = stats.date_min.min(obs.date);
        stats.date_max = stats.date_max.max(obs.date);
        stats.value_min = stats.value_min.min(obs.value);
        stats.value_max = stats.value_max.max(obs.value);
    }
    Some(stats)
}

/// Convert a raw "YYYY-MM-DD" date string into a fiscal-quarter label.
///
/// The dataset encodes quarters as their starting month, so only months
/// 01/04/07/10 are recognized:
///
/// - "1950-01-01" -> "1950 Q1"
/// - "1950-07-01" -> "1950 Q3"
///
/// Any other month yields `None`. This mirrors the upstream dataset contract;
/// callers that feed user input through here must handle the `None` case.
pub fn quarter_label(raw_date: &str) -> Option<String> {
    let (year, rest) = raw_date.split_once('-')?;
    let (month, _day) = rest.split_once('-')?;
    let quarter = match month.trim_start_matches('0') {
        "1" => 1,
        "4" => 2,
        "7" => 3,
        "10" => 4,
        _ => return None,
    };
    Some(format!("{year} Q{quarter}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_label_maps_quarter_start_months() {
        assert_eq!(quarter_label("1950-01-01").as_deref(), Some("1950 Q1"));
        assert_eq!(quarter_label("1950-04-01").as_deref(), Some("1950 Q2"));
        assert_eq!(quarter_label("1950-07-01").as_deref(), Some("1950 Q3"));
        assert_eq!(quarter_label("1950-10-01").as_deref(), Some("1950 Q4"));
    }

    #[test]
    fn quarter_label_rejects_non_quarter_months() {
        // Known dataset gap: months outside {01,04,07,10} have no quarter label.
        assert_eq!(quarter_label("1950-11-01"), None);
        assert_eq!(quarter_label("1950-02-01"), None);
        assert_eq!(quarter_label("1950-00-01"), None);
    }

    #[test]
    fn quarter_label_rejects_malformed_input() {
        assert_eq!(quarter_label("1950"), None);
        assert_eq!(quarter_label("1950-01"), None);
        assert_eq!(quarter_label(""), None);
    }

    #[test]
    fn compute_stats_covers_min_max() {
        let obs = vec![
            Observation {
                date: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
                value: 100.0,
                raw_date: "1950-01-01".to_string(),
            },
            Observation {
                date: NaiveDate::from_ymd_opt(1950, 4, 1).unwrap(),
                value: 120.0,
                raw_date: "1950-04-01".to_string(),
            },
        ];
        let stats = compute_stats(&obs).unwrap();
        assert_eq!(stats.n_points, 2);
        assert_eq!(stats.date_min, obs[0].date);
        assert_eq!(stats.date_max, obs[1].date);
        assert_eq!(stats.value_min, 100.0);
        assert_eq!(stats.value_max, 120.0);
    }

    #[test]
    fn compute_stats_empty_is_none() {
        assert!(compute_stats(&[]).is_none());
    }
}
