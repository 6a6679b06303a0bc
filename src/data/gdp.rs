//! Quarterly GDP dataset retrieval and normalization.
//!
//! The upstream document has the shape:
//!
//! ```json
//! { "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3], ...] }
//! ```
//!
//! Dates are quarter-start days ("YYYY-MM-DD", month in {01,04,07,10}) and
//! values are GDP in billions of dollars.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::Observation;
use crate::error::AppError;

/// Upper bound on a single dataset request. A hung fetch should fail visibly
/// rather than leave the chart unrendered indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct GdpResponse {
    data: Vec<(String, f64)>,
}

pub struct GdpClient {
    client: Client,
}

impl GdpClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch and parse the raw dataset from `url`.
    pub fn fetch(&self, url: &str) -> Result<Vec<(String, f64)>, AppError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::new(4, format!("GDP dataset request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                4,
                format!("GDP dataset request failed with status {}.", resp.status()),
            ));
        }

        let body: GdpResponse = resp
            .json()
            .map_err(|e| AppError::new(4, format!("Failed to parse GDP dataset: {e}")))?;

        if body.data.is_empty() {
            return Err(AppError::new(4, "GDP dataset contains no observations."));
        }

        Ok(body.data)
    }
}

/// Read the same JSON document shape from a local file.
pub fn read_raw_file(path: &Path) -> Result<Vec<(String, f64)>, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read {}: {e}", path.display())))?;
    let body: GdpResponse = serde_json::from_str(&text)
        .map_err(|e| AppError::new(2, format!("Failed to parse {}: {e}", path.display())))?;
    if body.data.is_empty() {
        return Err(AppError::new(2, format!("{} contains no observations.", path.display())));
    }
    Ok(body.data)
}

/// Convert raw `(date string, value)` pairs into normalized observations.
///
/// Input order and length are preserved. Invalid dates and non-finite values
/// are hard errors; the rest of the pipeline assumes a clean dataset.
pub fn normalize(raw: &[(String, f64)]) -> Result<Vec<Observation>, AppError> {
    let mut out = Vec::with_capacity(raw.len());
    for (raw_date, value) in raw {
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|e| AppError::new(4, format!("Invalid observation date '{raw_date}': {e}")))?;
        if !value.is_finite() {
            return Err(AppError::new(
                4,
                format!("Non-finite GDP value for {raw_date}."),
            ));
        }
        out.push(Observation {
            date,
            value: *value,
            raw_date: raw_date.clone(),
        });
    }
    Ok(out)
}
