//! Export a chart layout as a standalone SVG document.
//!
//! The export is meant to be opened directly in a browser. Bars carry
//! `data-date` / `data-gdp` attributes so the geometry can be inspected or
//! verified by external tooling, and each bar gets a native `<title>` hover
//! label.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::chart::ChartLayout;
use crate::domain::quarter_label;
use crate::error::AppError;

const BAR_FILL: &str = "#2a6fdb";
const GRID_STROKE: &str = "#d0d0d0";
const AXIS_STROKE: &str = "#333333";

/// Write the chart to `path` as SVG.
pub fn write_svg(path: &Path, layout: &ChartLayout) -> Result<(), AppError> {
    let doc = render_svg(layout);
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create SVG '{}': {e}", path.display())))?;
    file.write_all(doc.as_bytes())
        .map_err(|e| AppError::new(2, format!("Failed to write SVG '{}': {e}", path.display())))
}

/// Serialize the layout to an SVG document string.
pub fn render_svg(layout: &ChartLayout) -> String {
    let config = &layout.config;
    let (w, h, padding) = (config.width, config.height, config.padding);
    let baseline = config.baseline();

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         font-family=\"sans-serif\" font-size=\"12\">\n"
    ));

    // Chart chrome: title, rotated y-axis label, data-source caption.
    out.push_str(&format!(
        "  <text id=\"title\" x=\"{}\" y=\"30\" font-size=\"20\">GDP in United States</text>\n",
        w / 2.0 - 110.0
    ));
    out.push_str(&format!(
        "  <text id=\"yAxisLabel\" transform=\"rotate(-90)\" x=\"{}\" y=\"15\">\
         Gross Domestic Product in Billions</text>\n",
        -h / 2.0 - 60.0
    ));
    out.push_str(&format!(
        "  <text id=\"xAxisLabel\" x=\"{}\" y=\"{}\">\
         More Information: http://www.bea.gov/national/pdf/nipaguid.pdf</text>\n",
        padding * 6.7,
        h - 10.0
    ));

    // y axis: gridlines instead of a baseline ("domain" line suppressed).
    out.push_str("  <g id=\"y-axis\">\n");
    for tick in &layout.y_axis.ticks {
        let x2 = padding - layout.y_axis.grid_len;
        out.push_str(&format!(
            "    <line x1=\"{padding}\" y1=\"{py}\" x2=\"{x2}\" y2=\"{py}\" stroke=\"{GRID_STROKE}\"/>\n",
            py = tick.px,
        ));
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            padding + layout.y_axis.label_offset,
            tick.px,
            tick.label,
        ));
    }
    out.push_str("  </g>\n");

    // x axis: baseline plus year ticks.
    out.push_str("  <g id=\"x-axis\">\n");
    out.push_str(&format!(
        "    <line x1=\"{padding}\" y1=\"{baseline}\" x2=\"{}\" y2=\"{baseline}\" stroke=\"{AXIS_STROKE}\"/>\n",
        w - padding,
    ));
    for tick in &layout.x_axis.ticks {
        out.push_str(&format!(
            "    <line x1=\"{px}\" y1=\"{baseline}\" x2=\"{px}\" y2=\"{}\" stroke=\"{AXIS_STROKE}\"/>\n",
            baseline + 6.0,
            px = tick.px,
        ));
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
            tick.px,
            baseline + 20.0,
            tick.label,
        ));
    }
    out.push_str("  </g>\n");

    // Bars, each carrying its source metadata as queryable attributes.
    for bar in &layout.bars {
        let label = quarter_label(&bar.raw_date).unwrap_or_else(|| bar.raw_date.clone());
        out.push_str(&format!(
            "  <rect class=\"bar\" data-date=\"{date}\" data-gdp=\"{gdp}\" \
             x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{BAR_FILL}\">\
             <title>{label}  ${gdp} Billions</title></rect>\n",
            date = bar.raw_date,
            gdp = bar.value,
            x = bar.x,
            y = bar.y,
            width = bar.width,
            height = bar.height,
        ));
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_layout;
    use crate::data::gdp::normalize;
    use crate::domain::ChartConfig;

    fn layout() -> ChartLayout {
        let raw = vec![
            ("1950-01-01".to_string(), 100.0),
            ("1950-04-01".to_string(), 120.0),
            ("1950-07-01".to_string(), 150.0),
        ];
        let obs = normalize(&raw).unwrap();
        build_layout(&obs, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn svg_has_one_bar_per_observation_with_metadata() {
        let doc = render_svg(&layout());
        assert_eq!(doc.matches("class=\"bar\"").count(), 3);
        assert!(doc.contains("data-date=\"1950-07-01\""));
        assert!(doc.contains("data-gdp=\"150\""));
        assert!(doc.contains("<title>1950 Q3  $150 Billions</title>"));
    }

    #[test]
    fn svg_carries_dimensions_and_chrome() {
        let doc = render_svg(&layout());
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains("width=\"900\" height=\"600\""));
        assert!(doc.contains("GDP in United States"));
        assert!(doc.contains("id=\"x-axis\""));
        assert!(doc.contains("id=\"y-axis\""));
    }

    #[test]
    fn svg_y_axis_has_gridlines_but_no_vertical_baseline() {
        let doc = render_svg(&layout());
        // Gridlines span padding -> width - padding.
        assert!(doc.contains("x2=\"840\""));
        // The y-axis group draws no vertical domain line at x=60.
        let y_axis = doc
            .split("id=\"y-axis\"")
            .nth(1)
            .unwrap()
            .split("</g>")
            .next()
            .unwrap();
        assert!(!y_axis.contains("x1=\"60\" y1=\"60\" x2=\"60\""));
    }
}
