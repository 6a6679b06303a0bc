//! Terminal report formatting.

use crate::domain::{ChartRunConfig, DatasetStats, Observation};

/// Format the run summary (source + dataset stats + latest quarter).
pub fn format_summary(
    observations: &[Observation],
    stats: &DatasetStats,
    config: &ChartRunConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== gdp - US Quarterly GDP ===\n");
    out.push_str(&format!("Source: {}\n", config.source.display_name()));
    out.push_str(&format!(
        "Canvas: {}x{} (padding {})\n",
        config.chart.width, config.chart.height, config.chart.padding
    ));
    out.push_str(&format!(
        "Points: n={} | dates=[{}, {}] | gdp=[${:.1}, ${:.1}] Billions\n",
        stats.n_points, stats.date_min, stats.date_max, stats.value_min, stats.value_max
    ));

    if let Some(latest) = observations.last() {
        let quarter = latest
            .quarter()
            .unwrap_or_else(|| latest.raw_date.clone());
        out.push_str(&format!(
            "Latest: {quarter}  ${:.1} Billions\n",
            latest.value
        ));
    }

    out
}

/// Format the trailing `last_n` quarters as a two-column table.
pub fn format_table(observations: &[Observation], last_n: usize) -> String {
    let mut out = String::new();
    out.push_str("Quarter      GDP ($B)\n");

    let start = observations.len().saturating_sub(last_n);
    for obs in &observations[start..] {
        let quarter = obs.quarter().unwrap_or_else(|| obs.raw_date.clone());
        out.push_str(&format!("{quarter:<10} {:>10.1}\n", obs.value));
    }

    out
}
