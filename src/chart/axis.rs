//! Axis tick generation.
//!
//! Ticks are computed once per render pass from the scale domains:
//!
//! - x ticks land on calendar-year boundaries at a "nice" year step and are
//!   labeled with the year only
//! - y ticks land on nice value steps starting from zero; each carries a
//!   horizontal gridline spanning the plot area, and the axis baseline is
//!   suppressed in favor of the gridlines

use chrono::{Datelike, NaiveDate};

use crate::chart::scale::{TimeScale, ValueScale};
use crate::domain::ChartConfig;

/// Target tick count per axis; the nice-step rounding keeps the actual count
/// at or below this.
const MAX_TICKS: usize = 10;

/// A labeled axis marker at a pixel position along its scale's range.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub px: f64,
    pub label: String,
}

/// Bottom time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct XAxis {
    pub ticks: Vec<Tick>,
}

/// Left value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxis {
    pub ticks: Vec<Tick>,
    /// Signed gridline length per tick: -(width - 2*padding), i.e. gridlines
    /// extend rightward across the whole plot area.
    pub grid_len: f64,
    /// Extra horizontal shift for tick label text, away from the axis.
    pub label_offset: f64,
}

/// Generate year ticks over the time scale's domain.
pub fn x_axis(scale: &TimeScale) -> XAxis {
    let (d0, d1) = scale.domain();
    let span_years = (d1.year() - d0.year()).max(1);
    let step = year_step(span_years);

    let mut ticks = Vec::new();
    let first = next_multiple(d0.year(), step);
    let mut year = first;
    while year <= d1.year() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
            if date >= d0 && date <= d1 {
                ticks.push(Tick {
                    px: scale.apply(date),
                    label: year.to_string(),
                });
            }
        }
        year += step;
    }

    // A domain that starts and ends mid-year can contain no January 1st at
    // all; an axis still needs at least one marker, so fall back to the
    // domain start labeled with its year.
    if ticks.is_empty() {
        ticks.push(Tick {
            px: scale.apply(d0),
            label: d0.year().to_string(),
        });
    }

    XAxis { ticks }
}

/// Generate value ticks from zero up to the value scale's maximum.
pub fn y_axis(scale: &ValueScale, config: &ChartConfig) -> YAxis {
    let (_, v_max) = scale.domain();
    let step = nice_step(v_max);

    let mut ticks = Vec::new();
    let mut index = 0usize;
    loop {
        let value = index as f64 * step;
        // Allow the top tick to land on the domain maximum despite float error.
        if value > v_max + step * 1e-9 {
            break;
        }
        ticks.push(Tick {
            px: scale.apply(value),
            label: format_value(value),
        });
        index += 1;
    }

    YAxis {
        ticks,
        grid_len: -(config.width - 2.0 * config.padding),
        label_offset: -5.0,
    }
}

/// Smallest step from {1, 2, 5} x 10^k giving at most `MAX_TICKS` ticks.
fn nice_step(span: f64) -> f64 {
    if !(span.is_finite() && span > 0.0) {
        return 1.0;
    }
    let raw = span / MAX_TICKS as f64;
    // powi keeps decade steps exact where powf drifts.
    let pow = 10f64.powi(raw.log10().floor() as i32);
    for mult in [1.0, 2.0, 5.0, 10.0] {
        let step = mult * pow;
        if step >= raw {
            return step;
        }
    }
    10.0 * pow
}

/// Integer year step from {1, 2, 5} x 10^k giving at most `MAX_TICKS` ticks.
fn year_step(span_years: i32) -> i32 {
    let step = nice_step(span_years as f64);
    (step.round() as i32).max(1)
}

/// First multiple of `step` at or after `year`.
fn next_multiple(year: i32, step: i32) -> i32 {
    let rem = year.rem_euclid(step);
    if rem == 0 { year } else { year + (step - rem) }
}

fn format_value(value: f64) -> String {
    if value == value.trunc() {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nice_step_rounds_up_to_1_2_5() {
        assert_eq!(nice_step(100.0), 10.0);
        assert_eq!(nice_step(130.0), 20.0);
        assert_eq!(nice_step(450.0), 50.0);
        assert_eq!(nice_step(18000.0), 2000.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn x_ticks_are_year_labeled_and_in_domain() {
        let scale = TimeScale::new((date(1947, 1, 1), date(2015, 7, 1)), (60.0, 840.0));
        let axis = x_axis(&scale);

        assert!(!axis.ticks.is_empty());
        assert!(axis.ticks.len() <= MAX_TICKS + 1);
        for tick in &axis.ticks {
            // Year-only labels, no month/day.
            assert!(tick.label.parse::<i32>().is_ok(), "label {}", tick.label);
            assert!(tick.px >= 60.0 - 1e-9 && tick.px <= 840.0 + 1e-9);
        }
        // 68-year span steps by decade.
        assert_eq!(axis.ticks[0].label, "1950");
        assert_eq!(axis.ticks[1].label, "1960");
    }

    #[test]
    fn x_ticks_mid_year_domain_falls_back_to_domain_start() {
        // No January 1st lies inside this domain; the axis must still carry
        // a year marker at the domain start.
        let scale = TimeScale::new((date(1950, 4, 1), date(1950, 10, 1)), (60.0, 840.0));
        let axis = x_axis(&scale);
        assert_eq!(axis.ticks.len(), 1);
        assert_eq!(axis.ticks[0].label, "1950");
        assert!((axis.ticks[0].px - 60.0).abs() < 1e-9);
    }

    #[test]
    fn x_ticks_short_domain_still_produces_a_year() {
        let scale = TimeScale::new((date(1950, 1, 1), date(1950, 4, 1)), (60.0, 840.0));
        let axis = x_axis(&scale);
        assert_eq!(axis.ticks.len(), 1);
        assert_eq!(axis.ticks[0].label, "1950");
        assert!((axis.ticks[0].px - 60.0).abs() < 1e-9);
    }

    #[test]
    fn y_ticks_start_at_baseline_zero() {
        let config = ChartConfig::default();
        let scale = ValueScale::new((0.0, 120.0), (540.0, 60.0));
        let axis = y_axis(&scale, &config);

        assert_eq!(axis.ticks[0].label, "0");
        assert!((axis.ticks[0].px - 540.0).abs() < 1e-9);
        // Ticks ascend in value, i.e. descend in pixel y.
        for pair in axis.ticks.windows(2) {
            assert!(pair[1].px < pair[0].px);
        }
        let top = axis.ticks.last().unwrap();
        assert!(top.px >= 60.0 - 1e-9);
    }

    #[test]
    fn y_gridline_spans_plot_area_for_any_config() {
        let config = ChartConfig::default();
        let scale = ValueScale::new((0.0, 100.0), (540.0, 60.0));
        assert_eq!(y_axis(&scale, &config).grid_len, -780.0);

        // The formula generalizes with the configuration, no magic constants.
        let wide = ChartConfig {
            width: 1200.0,
            height: 800.0,
            padding: 40.0,
        };
        let scale = ValueScale::new((0.0, 100.0), (760.0, 40.0));
        assert_eq!(y_axis(&scale, &wide).grid_len, -1120.0);
    }

    #[test]
    fn y_labels_shift_away_from_axis() {
        let config = ChartConfig::default();
        let scale = ValueScale::new((0.0, 100.0), (540.0, 60.0));
        assert_eq!(y_axis(&scale, &config).label_offset, -5.0);
    }
}
