//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the data source (remote, file, or synthetic)
//! - runs the chart pipeline
//! - dispatches to the TUI, the SVG export, or the stats report

use clap::Parser;

use crate::cli::{ChartArgs, Command, StatsArgs, SvgArgs};
use crate::domain::{ChartConfig, ChartRunConfig, DataSource};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `gdp` binary.
pub fn run() -> Result<(), AppError> {
    // We want `gdp` and `gdp --offline` to behave like `gdp tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Svg(args) => handle_svg(args),
        Command::Stats(args) => handle_stats(args),
    }
}

fn handle_tui(args: ChartArgs) -> Result<(), AppError> {
    let config = config_from_args(&args)?;
    crate::tui::run(config)
}

fn handle_svg(args: SvgArgs) -> Result<(), AppError> {
    let config = config_from_args(&args.chart)?;
    let run = pipeline::run_chart(&config)?;

    crate::io::svg::write_svg(&args.output, &run.layout)?;
    println!(
        "Wrote {} ({} bars, {}x{}).",
        args.output.display(),
        run.layout.bars.len(),
        config.chart.width,
        config.chart.height,
    );
    Ok(())
}

fn handle_stats(args: StatsArgs) -> Result<(), AppError> {
    let config = config_from_args(&args.chart)?;
    let run = pipeline::run_chart(&config)?;

    println!(
        "{}",
        crate::report::format_summary(&run.observations, &run.stats, &config)
    );
    println!("{}", crate::report::format_table(&run.observations, args.last));
    Ok(())
}

/// Fold CLI flags into the pipeline's run configuration.
pub fn config_from_args(args: &ChartArgs) -> Result<ChartRunConfig, AppError> {
    let chart = ChartConfig {
        width: args.width,
        height: args.height,
        padding: args.padding,
    };

    if !(chart.width.is_finite() && chart.height.is_finite() && chart.padding.is_finite()) {
        return Err(AppError::new(2, "Canvas dimensions must be finite."));
    }
    if chart.padding < 0.0
        || chart.width <= 2.0 * chart.padding
        || chart.height <= 2.0 * chart.padding
    {
        return Err(AppError::new(
            2,
            "Canvas too small: width and height must each exceed twice the padding.",
        ));
    }

    let source = if let Some(path) = &args.input {
        DataSource::File { path: path.clone() }
    } else if args.offline {
        DataSource::Sample {
            count: args.sample_count,
            seed: args.seed,
        }
    } else {
        DataSource::Remote {
            url: args.url.clone(),
        }
    };

    Ok(ChartRunConfig { source, chart })
}

/// Rewrite argv so `gdp` defaults to `gdp tui`.
///
/// Rules:
/// - `gdp`                      -> `gdp tui`
/// - `gdp --offline ...`        -> `gdp tui --offline ...`
/// - `gdp --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "svg" | "stats");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["gdp"])), argv(&["gdp", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["gdp", "--offline"])),
            argv(&["gdp", "tui", "--offline"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["gdp", "svg", "-o", "out.svg"])),
            argv(&["gdp", "svg", "-o", "out.svg"])
        );
        assert_eq!(rewrite_args(argv(&["gdp", "--help"])), argv(&["gdp", "--help"]));
    }

    #[test]
    fn config_resolves_source_precedence() {
        let mut args = ChartArgs {
            url: "http://example.test/gdp.json".to_string(),
            input: None,
            offline: false,
            sample_count: 10,
            seed: 1,
            width: 900.0,
            height: 600.0,
            padding: 60.0,
        };

        let config = config_from_args(&args).unwrap();
        assert!(matches!(config.source, DataSource::Remote { .. }));

        args.offline = true;
        let config = config_from_args(&args).unwrap();
        assert!(matches!(config.source, DataSource::Sample { count: 10, seed: 1 }));

        args.input = Some("data.json".into());
        let config = config_from_args(&args).unwrap();
        assert!(matches!(config.source, DataSource::File { .. }));
    }

    #[test]
    fn config_rejects_impossible_canvas() {
        let args = ChartArgs {
            url: String::new(),
            input: None,
            offline: true,
            sample_count: 10,
            seed: 1,
            width: 100.0,
            height: 600.0,
            padding: 60.0,
        };
        assert!(config_from_args(&args).is_err());
    }
}
