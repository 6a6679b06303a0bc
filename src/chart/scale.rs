//! Pure data-space -> pixel-space scale transforms.
//!
//! Two independent scales exist per render pass:
//!
//! - `TimeScale`: observation date -> x pixel, domain [earliest, latest]
//! - `ValueScale`: GDP value -> y pixel, domain [0, max] with an inverted
//!   range (larger values map to smaller y, per top-down chart coordinates)
//!
//! Both are plain value types with no interior mutability; the same scale
//! applied to the same input always yields the same pixel.

use chrono::NaiveDate;

use crate::domain::{ChartConfig, Observation};
use crate::error::AppError;

/// Linear interpolation over a date domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    d0: NaiveDate,
    d1: NaiveDate,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    /// A zero-width domain (single observation) is widened to one day so the
    /// transform stays finite; the lone point then maps to the range start.
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if d1 <= d0 {
            d1 = d0.succ_opt().unwrap_or(d0);
        }
        Self {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    #[inline]
    pub fn apply(&self, date: NaiveDate) -> f64 {
        let span = (self.d1 - self.d0).num_days() as f64;
        let offset = (date - self.d0).num_days() as f64;
        self.r0 + offset / span * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.d0, self.d1)
    }
}

/// Linear interpolation over a value domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    v0: f64,
    v1: f64,
    r0: f64,
    r1: f64,
}

impl ValueScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (v0, mut v1) = domain;
        // Clamp degenerate domains rather than dividing by zero.
        if (v1 - v0).abs() < 1e-12 {
            v1 = v0 + 1.0;
        }
        Self {
            v0,
            v1,
            r0: range.0,
            r1: range.1,
        }
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.r0 + (value - self.v0) / (self.v1 - self.v0) * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.v0, self.v1)
    }
}

/// The x/y scale pair for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl Scales {
    /// Build both scales from the full dataset's min/max.
    ///
    /// The x domain is [earliest, latest] date; the y domain is anchored at
    /// zero, not at the minimum value, so bar heights are proportional to GDP.
    pub fn from_observations(
        observations: &[Observation],
        config: &ChartConfig,
    ) -> Result<Self, AppError> {
        let first = observations
            .first()
            .ok_or_else(|| AppError::new(4, "Cannot build scales from an empty dataset."))?;

        let mut date_min = first.date;
        let mut date_max = first.date;
        let mut value_max = first.value;
        for obs in observations {
            date_min = date_min.min(obs.date);
            date_max = date_max.max(obs.date);
            value_max = value_max.max(obs.value);
        }

        let x = TimeScale::new(
            (date_min, date_max),
            (config.padding, config.width - config.padding),
        );
        let y = ValueScale::new((0.0, value_max), (config.baseline(), config.padding));

        Ok(Self { x, y })
    }
}
