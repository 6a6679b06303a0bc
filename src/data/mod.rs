//! Data acquisition and normalization.
//!
//! `gdp` handles the remote/file JSON dataset; `sample` generates a
//! deterministic synthetic series for offline runs.

pub mod gdp;
pub mod sample;

pub use gdp::{GdpClient, normalize, read_raw_file};
pub use sample::generate_sample;
