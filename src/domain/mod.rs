//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the normalized GDP observation (`Observation`)
//! - chart configuration (`ChartConfig`) and run configuration (`ChartRunConfig`)
//! - dataset summary statistics (`DatasetStats`)
//! - the fiscal-quarter label formatter (`quarter_label`)

pub mod types;

pub use types::*;
