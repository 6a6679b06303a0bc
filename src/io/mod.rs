//! Input/output helpers.
//!
//! - SVG chart export (`svg`)

pub mod svg;

pub use svg::*;
