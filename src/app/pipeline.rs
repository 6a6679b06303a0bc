//! Shared chart pipeline used by all front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load raw data -> normalize -> stats -> scales/axes/bars
//!
//! The TUI, the SVG export, and the stats report can then focus on
//! presentation (widgets vs documents vs printing).

use crate::chart::{self, ChartLayout};
use crate::data::{GdpClient, generate_sample, normalize, read_raw_file};
use crate::domain::{ChartRunConfig, DataSource, DatasetStats, Observation, compute_stats};
use crate::error::AppError;

/// All computed outputs of a single chart run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub observations: Vec<Observation>,
    pub stats: DatasetStats,
    pub layout: ChartLayout,
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_chart(config: &ChartRunConfig) -> Result<RunOutput, AppError> {
    let raw = load_raw(&config.source)?;
    let observations = normalize(&raw)?;
    let stats = compute_stats(&observations)
        .ok_or_else(|| AppError::new(4, "Dataset is empty after normalization."))?;
    let layout = chart::build_layout(&observations, &config.chart)?;

    Ok(RunOutput {
        observations,
        stats,
        layout,
    })
}

fn load_raw(source: &DataSource) -> Result<Vec<(String, f64)>, AppError> {
    match source {
        DataSource::Remote { url } => GdpClient::new()?.fetch(url),
        DataSource::File { path } => read_raw_file(path),
        DataSource::Sample { count, seed } => generate_sample(*count, *seed),
    }
}
