//! Chart geometry: scales, axis ticks, bar layout, and tooltip state.
//!
//! Everything in this module is pure data-space -> pixel-space computation on
//! the logical canvas defined by `ChartConfig`. Render backends (the ratatui
//! TUI, the SVG writer) consume a finished `ChartLayout` and never recompute
//! geometry themselves.

pub mod axis;
pub mod bars;
pub mod scale;
pub mod tooltip;

use crate::domain::{ChartConfig, Observation};
use crate::error::AppError;

pub use axis::{Tick, XAxis, YAxis};
pub use bars::Bar;
pub use scale::{Scales, TimeScale, ValueScale};
pub use tooltip::{Pointer, Tooltip, TooltipState};

/// A single render pass: scales, axes, and bar geometry for one dataset.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub config: ChartConfig,
    pub scales: Scales,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub bars: Vec<Bar>,
}

/// Build the full layout for a normalized dataset.
pub fn build_layout(
    observations: &[Observation],
    config: &ChartConfig,
) -> Result<ChartLayout, AppError> {
    let scales = Scales::from_observations(observations, config)?;
    let x_axis = axis::x_axis(&scales.x);
    let y_axis = axis::y_axis(&scales.y, config);
    let bars = bars::layout_bars(observations, &scales, config);

    Ok(ChartLayout {
        config: *config,
        scales,
        x_axis,
        y_axis,
        bars,
    })
}

impl ChartLayout {
    /// Find the bar under a pointer position (logical pixels), if any.
    pub fn bar_at(&self, px: f64, py: f64) -> Option<&Bar> {
        self.bars.iter().find(|bar| bar.contains(px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::gdp::normalize;

    fn two_point_dataset() -> Vec<Observation> {
        let raw = vec![
            ("1950-01-01".to_string(), 100.0),
            ("1950-04-01".to_string(), 120.0),
        ];
        normalize(&raw).unwrap()
    }

    #[test]
    fn layout_end_to_end_two_points() {
        let config = ChartConfig::default();
        let layout = build_layout(&two_point_dataset(), &config).unwrap();

        assert_eq!(layout.bars.len(), 2);
        // Earlier date at the left padding edge, later at the right.
        assert!((layout.bars[0].x - 60.0).abs() < 1e-9);
        assert!((layout.bars[1].x - 840.0).abs() < 1e-9);
        // y grows downward, so the larger value sits higher on the canvas...
        assert!(layout.bars[1].y < layout.bars[0].y);
        // ...and its bar is taller.
        assert!(layout.bars[1].height > layout.bars[0].height);
    }

    #[test]
    fn bar_at_hits_and_misses() {
        let config = ChartConfig::default();
        let layout = build_layout(&two_point_dataset(), &config).unwrap();

        let bar = &layout.bars[0];
        let hit = layout
            .bar_at(bar.x + bar.width / 2.0, bar.y + bar.height / 2.0)
            .unwrap();
        assert_eq!(hit.raw_date, "1950-01-01");

        // Above the bar top is empty canvas.
        assert!(layout.bar_at(bar.x + bar.width / 2.0, bar.y - 1.0).is_none());
    }

    #[test]
    fn layout_rejects_empty_dataset() {
        let config = ChartConfig::default();
        assert!(build_layout(&[], &config).is_err());
    }
}
