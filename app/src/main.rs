// In app/src/main.rs

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use core_types::{AssetKind, CrossoverParams, DateRange, PriceSeries, Symbol};
use series_source::{JsonFileSource, SeriesSource};
use strategies::MACrossover;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::prelude::*;

mod report;
mod sweep;

use crate::report::{SignalReport, SmaReport, SummaryReport, SweepReport};

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Price history dashboards with a moving-average crossover overlay.")]
struct Cli {
    /// Directory holding `base.toml` and the per-environment overrides.
    #[arg(long, global = true, default_value = "config")]
    config_dir: PathBuf,

    /// Directory of `<SYMBOL>.json` price files. Overrides `data.dir`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Overrides `app.log_level` (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which ticker and period to load. Anything left out comes from the config.
#[derive(Args, Debug, Clone, Default)]
struct SeriesArgs {
    /// The ticker to analyse (e.g., "AAPL", "BTC-USD").
    #[arg(short, long)]
    symbol: Option<String>,

    /// First day to include, in YYYY-MM-DD format.
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Day after the last one to include, in YYYY-MM-DD format.
    #[arg(long)]
    end_date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the moving-average crossover and prints regimes, transitions and the latest call.
    Signal {
        #[command(flatten)]
        series: SeriesArgs,

        /// Short moving-average window.
        #[arg(long)]
        short: Option<usize>,

        /// Long moving-average window.
        #[arg(long)]
        long: Option<usize>,
    },

    /// Prints the closes next to a single simple moving average.
    Sma {
        #[command(flatten)]
        series: SeriesArgs,

        /// Moving-average window.
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Prints mean/min/max closes and annualised return statistics.
    Summary {
        #[command(flatten)]
        series: SeriesArgs,
    },

    /// Runs the crossover for every configured pair of windows in parallel.
    Sweep {
        #[command(flatten)]
        series: SeriesArgs,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings_from(&cli.config_dir)
        .with_context(|| format!("Failed to load settings from {}", cli.config_dir.display()))?;

    init_tracing(
        cli.log_level.as_deref().unwrap_or(&settings.app.log_level),
        &settings.app.environment,
    )?;
    tracing::info!(environment = %settings.app.environment, "Starting dashboard");

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.data.dir));
    let source = JsonFileSource::new(data_dir);

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Signal { series, short, long } => {
            let params = resolve_params(&settings, &series, short, long)?;
            handle_signal(&source, &params, cli.json)?;
        }
        Commands::Sma { series, window } => {
            let params = resolve_params(&settings, &series, None, None)?;
            let window = window.unwrap_or(settings.strategies.sma.window);
            handle_sma(&source, &params, window, cli.json)?;
        }
        Commands::Summary { series } => {
            let params = resolve_params(&settings, &series, None, None)?;
            handle_summary(&source, &params, cli.json)?;
        }
        Commands::Sweep { series } => {
            let params = resolve_params(&settings, &series, None, None)?;
            handle_sweep(&source, &params, &settings, cli.json)?;
        }
    }

    tracing::info!("Dashboard has finished successfully.");

    Ok(())
}

fn parse_level(level: &str) -> Result<tracing::Level> {
    tracing::Level::from_str(level)
        .with_context(|| format!("Invalid log level `{level}` (expected trace, debug, info, warn or error)"))
}

fn init_tracing(level: &str, environment: &str) -> Result<()> {
    let level = parse_level(level)?;
    let filter = tracing_subscriber::filter::Targets::new().with_default(level);
    // Logs go to stderr so that tables and JSON on stdout stay clean.
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if matches!(environment, "production" | "prod") {
        tracing_subscriber::registry()
            .with(fmt_layer.json().with_filter(filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(filter))
            .init();
    }
    Ok(())
}

/// Merges command-line overrides into the configured parameters.
fn resolve_params(
    settings: &app_config::Settings,
    series: &SeriesArgs,
    short: Option<usize>,
    long: Option<usize>,
) -> Result<CrossoverParams> {
    let mut params = settings.crossover_params()?;

    if let Some(symbol) = &series.symbol {
        params.symbol = Symbol::new(symbol.clone());
        params.asset_kind = AssetKind::infer(&params.symbol);
    }
    if series.start_date.is_some() || series.end_date.is_some() {
        params.date_range = DateRange::new(
            series.start_date.unwrap_or(params.date_range.start),
            series.end_date.unwrap_or(params.date_range.end),
        )?;
    }
    if let Some(short) = short {
        params.short_window = short;
    }
    if let Some(long) = long {
        params.long_window = long;
    }

    Ok(params)
}

fn load_series(source: &dyn SeriesSource, params: &CrossoverParams) -> Result<PriceSeries> {
    tracing::info!(
        symbol = %params.symbol,
        source = source.name(),
        start = %params.date_range.start,
        end = %params.date_range.end,
        "Fetching price history..."
    );
    let series = source
        .fetch(&params.symbol, &params.date_range)
        .with_context(|| format!("Failed to fetch price history for {}", params.symbol))?;
    if series.is_empty() {
        tracing::warn!(symbol = %params.symbol, "No price data in the selected period.");
    }
    Ok(series)
}

/// Handles the logic for the `signal` subcommand.
fn handle_signal(source: &dyn SeriesSource, params: &CrossoverParams, json: bool) -> Result<()> {
    let series = load_series(source, params)?;
    let strategy = MACrossover::from_params(params)?;
    tracing::info!(strategy = strategy.name(), bars = series.len(), "Evaluating strategy...");
    let output = strategy.evaluate(&series)?;

    let report = SignalReport {
        params,
        bars: series.len(),
        inverted: strategy.settings().is_inverted(),
        recommendation: output.latest_recommendation(),
        output: &output,
    };
    if json {
        report::print_json(&report)?;
    } else {
        report::print_signal(&series, &report);
    }
    Ok(())
}

/// Handles the logic for the `sma` subcommand.
fn handle_sma(source: &dyn SeriesSource, params: &CrossoverParams, window: usize, json: bool) -> Result<()> {
    let series = load_series(source, params)?;
    let sma = strategies::compute_moving_average(&series, window)?;

    let report = SmaReport {
        symbol: &params.symbol,
        closes: &series,
        sma: &sma,
    };
    if json {
        report::print_json(&report)?;
    } else {
        report::print_sma(&report);
    }
    Ok(())
}

/// Handles the logic for the `summary` subcommand.
fn handle_summary(source: &dyn SeriesSource, params: &CrossoverParams, json: bool) -> Result<()> {
    let series = load_series(source, params)?;
    let summary = analytics::compute_summary(&series)
        .with_context(|| format!("Cannot summarise {}", params.symbol))?;
    let returns = match analytics::compute_return_statistics(&series) {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping return statistics.");
            None
        }
    };

    let report = SummaryReport {
        symbol: &params.symbol,
        summary,
        returns,
    };
    if json {
        report::print_json(&report)?;
    } else {
        report::print_summary(&report);
    }
    Ok(())
}

/// Handles the logic for the `sweep` subcommand.
fn handle_sweep(
    source: &dyn SeriesSource,
    params: &CrossoverParams,
    settings: &app_config::Settings,
    json: bool,
) -> Result<()> {
    let series = load_series(source, params)?;
    let rows = sweep::run_sweep(&series, &settings.sweep, settings.app.sweep_threads)?;

    let report = SweepReport {
        symbol: &params.symbol,
        bars: series.len(),
        rows: &rows,
    };
    if json {
        report::print_json(&report)?;
    } else {
        report::print_sweep(&report);
    }
    Ok(())
}
