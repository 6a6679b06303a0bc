//! `gdp-bars` library crate.
//!
//! The binary (`gdp`) is a thin wrapper around this library so that:
//!
//! - core logic (scales, axes, bar geometry, tooltips) is testable without a
//!   live terminal or network
//! - modules are reusable (e.g., future GUI front-ends, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod tui;
