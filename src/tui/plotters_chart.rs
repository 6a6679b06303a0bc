//! Plotters-powered GDP bar chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `BarChart` widget?
//! - bars keep their computed pixel geometry instead of being re-bucketed
//!   into terminal columns
//! - gridlines and the axis baseline come from the same layout the SVG
//!   export uses
//! - easy to extend later (annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
// The ratatui `Color` enum below shadows the prelude's `Color` trait; keep
// the trait in scope anonymously so `.filled()` still resolves.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::chart::ChartLayout;

/// A render-only view of one chart layout.
///
/// The widget is intentionally data-driven: all geometry is computed outside
/// the render call, in the same logical pixel space the SVG export uses. This
/// keeps `render()` focused on drawing and makes the geometry testable
/// without a terminal.
pub struct GdpBarsChart<'a> {
    pub layout: &'a ChartLayout,
    /// Index of the bar under the pointer, drawn highlighted.
    pub hovered: Option<usize>,
}

impl<'a> Widget for GdpBarsChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let config = self.layout.config;
        let (w, h) = (config.width, config.height);
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return;
        }

        let layout = self.layout;
        let hovered = self.hovered;

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // The cartesian plane covers the whole logical canvas; Plotters' y
        // axis grows upward, so logical pixel y values are flipped with
        // `h - py`.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(0)
                .build_cartesian_2d(0.0..w, 0.0..h)?;

            // Series styling: keep the palette high-contrast for terminal readability.
            let grid_color = RGBColor(90, 90, 90);
            let axis_color = WHITE;
            let bar_color = RGBColor(0, 200, 255); // cyan
            let hover_color = RGBColor(255, 215, 0); // gold

            // 1) Value gridlines, spanning the plot area per tick.
            for tick in &layout.y_axis.ticks {
                let py = h - tick.px;
                let x1 = config.padding - layout.y_axis.grid_len;
                chart.draw_series(LineSeries::new(
                    [(config.padding, py), (x1, py)],
                    &grid_color,
                ))?;
            }

            // 2) Time axis baseline. The value axis draws no domain line;
            //    the gridlines carry that information.
            let baseline = h - config.baseline();
            chart.draw_series(LineSeries::new(
                [(config.padding, baseline), (w - config.padding, baseline)],
                &axis_color,
            ))?;

            // 3) Bars, hovered one highlighted.
            chart.draw_series(layout.bars.iter().enumerate().map(|(i, bar)| {
                let color = if hovered == Some(i) {
                    hover_color
                } else {
                    bar_color
                };
                Rectangle::new(
                    [
                        (bar.x, h - (bar.y + bar.height)),
                        (bar.x + bar.width, h - bar.y),
                    ],
                    color.filled(),
                )
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
