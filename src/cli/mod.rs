//! Command-line parsing for the GDP bar chart.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the geometry/rendering code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::DEFAULT_DATA_URL;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gdp", version, about = "Quarterly US GDP bar chart in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive chart.
    ///
    /// Hovering a bar with the mouse shows a tooltip with the fiscal quarter
    /// and GDP value; moving off the bar hides it.
    Tui(ChartArgs),
    /// Fetch the dataset and export the chart as an SVG file.
    Svg(SvgArgs),
    /// Print the dataset summary and recent quarters.
    Stats(StatsArgs),
}

/// Common dataset and canvas options.
#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// Dataset URL returning `{ "data": [["YYYY-MM-DD", value], ...] }`.
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    pub url: String,

    /// Read the dataset JSON from a local file instead of fetching.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Use a deterministic synthetic dataset (no network).
    #[arg(long)]
    pub offline: bool,

    /// Number of synthetic quarters generated with --offline.
    #[arg(short = 'n', long, default_value_t = 275)]
    pub sample_count: usize,

    /// Random seed for the synthetic series.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Logical canvas width (pixels).
    #[arg(long, default_value_t = 900.0)]
    pub width: f64,

    /// Logical canvas height (pixels).
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// Padding between the canvas edge and the plot area (pixels).
    #[arg(long, default_value_t = 60.0)]
    pub padding: f64,
}

/// Options for `gdp svg`.
#[derive(Debug, Parser, Clone)]
pub struct SvgArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Output path for the SVG document.
    #[arg(short = 'o', long, default_value = "gdp.svg")]
    pub output: PathBuf,
}

/// Options for `gdp stats`.
#[derive(Debug, Parser, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// How many trailing quarters to list.
    #[arg(long, default_value_t = 8)]
    pub last: usize,
}
