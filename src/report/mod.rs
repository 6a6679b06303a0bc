//! Reporting utilities: formatted terminal output for the dataset.
//!
//! We keep formatting code in one place so:
//! - the geometry code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;
