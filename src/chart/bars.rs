//! Bar geometry.
//!
//! Each observation maps to one rectangle on the logical canvas. Bars carry
//! their source observation's raw date and value so hover lookups and export
//! attributes never need to reach back into the dataset.

use crate::chart::scale::Scales;
use crate::domain::{ChartConfig, Observation};

/// One rendered bar, in logical pixels.
///
/// `x`/`y` is the top-left corner; the bar extends down to the axis baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub raw_date: String,
    pub value: f64,
}

impl Bar {
    /// Rectangle hit test for pointer hover.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Map each observation to its bar.
///
/// Bar width is derived from the dataset length so bars tile the plot area for
/// any cardinality, rather than assuming a fixed number of quarters.
pub fn layout_bars(
    observations: &[Observation],
    scales: &Scales,
    config: &ChartConfig,
) -> Vec<Bar> {
    let width = bar_width(observations.len(), config);
    let baseline = config.baseline();

    observations
        .iter()
        .map(|obs| {
            let y = scales.y.apply(obs.value);
            Bar {
                x: scales.x.apply(obs.date),
                y,
                width,
                height: baseline - y,
                raw_date: obs.raw_date.clone(),
                value: obs.value,
            }
        })
        .collect()
}

fn bar_width(count: usize, config: &ChartConfig) -> f64 {
    config.inner_width() / count.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(y: i32, m: u32, value: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            value,
            raw_date: format!("{y}-{m:02}-01"),
        }
    }

    fn scales_for(observations: &[Observation], config: &ChartConfig) -> Scales {
        Scales::from_observations(observations, config).unwrap()
    }

    #[test]
    fn bars_grow_upward_from_the_baseline() {
        let config = ChartConfig::default();
        let data = vec![obs(1950, 1, 100.0), obs(1950, 4, 120.0)];
        let scales = scales_for(&data, &config);
        let bars = layout_bars(&data, &scales, &config);

        for bar in &bars {
            assert!(bar.height >= 0.0);
            assert!((bar.y + bar.height - config.baseline()).abs() < 1e-9);
        }
        // The max-value bar reaches the top padding edge.
        assert!((bars[1].y - config.padding).abs() < 1e-9);
        assert!((bars[1].height - 480.0).abs() < 1e-9);
    }

    #[test]
    fn bar_width_tracks_dataset_length() {
        let config = ChartConfig::default();
        let data = vec![obs(1950, 1, 100.0), obs(1950, 4, 120.0)];
        let scales = scales_for(&data, &config);
        let bars = layout_bars(&data, &scales, &config);
        assert!((bars[0].width - 390.0).abs() < 1e-9);

        let mut many = Vec::new();
        for i in 0..10 {
            many.push(obs(1950 + i, 1, 100.0 + i as f64));
        }
        let scales = scales_for(&many, &config);
        let bars = layout_bars(&many, &scales, &config);
        assert!((bars[0].width - 78.0).abs() < 1e-9);
    }

    #[test]
    fn zero_value_bar_has_zero_height() {
        let config = ChartConfig::default();
        let data = vec![obs(1950, 1, 0.0), obs(1950, 4, 120.0)];
        let scales = scales_for(&data, &config);
        let bars = layout_bars(&data, &scales, &config);
        assert!((bars[0].height - 0.0).abs() < 1e-9);
        assert!((bars[0].y - config.baseline()).abs() < 1e-9);
    }

    #[test]
    fn bars_carry_source_metadata() {
        let config = ChartConfig::default();
        let data = vec![obs(1950, 7, 150.0), obs(1950, 10, 160.0)];
        let scales = scales_for(&data, &config);
        let bars = layout_bars(&data, &scales, &config);
        assert_eq!(bars[0].raw_date, "1950-07-01");
        assert_eq!(bars[0].value, 150.0);
    }
}
