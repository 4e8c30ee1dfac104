// In app/src/sweep.rs

use anyhow::{Context, Result};
use core_types::{PriceSeries, Regime};
use itertools::iproduct;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use strategies::types::MACrossoverSettings;
use strategies::{MACrossover, Recommendation};

use app_config::SweepSettings;

/// The outcome of one window pair over the shared series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub short_window: usize,
    pub long_window: usize,
    pub inverted: bool,
    pub transitions: usize,
    pub long_bars: usize,
    pub final_regime: Option<Regime>,
    pub recommendation: Option<Recommendation>,
}

/// Every (short, long) combination of the configured windows, in order.
pub fn generate_window_pairs(settings: &SweepSettings) -> Vec<MACrossoverSettings> {
    iproduct!(settings.short_windows.iter(), settings.long_windows.iter())
        .map(|(&short_window, &long_window)| MACrossoverSettings {
            short_window,
            long_window,
        })
        .collect()
}

/// Evaluates every window pair against `series` in parallel.
///
/// The series is only ever borrowed, so all workers read the same data. Rows
/// come back in the order of [`generate_window_pairs`].
pub fn run_sweep(series: &PriceSeries, settings: &SweepSettings, threads: usize) -> Result<Vec<SweepRow>> {
    let pairs = generate_window_pairs(settings);
    if pairs.is_empty() {
        anyhow::bail!("The sweep grid is empty: configure sweep.short_windows and sweep.long_windows.");
    }

    tracing::info!(pairs = pairs.len(), threads, "Configuring Rayon thread pool.");
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build Rayon thread pool")?;

    pool.install(|| {
        pairs
            .par_iter()
            .map(|pair| evaluate_pair(series, *pair))
            .collect::<Result<Vec<_>>>()
    })
}

fn evaluate_pair(series: &PriceSeries, pair: MACrossoverSettings) -> Result<SweepRow> {
    let strategy = MACrossover::new(pair)?;
    let output = strategy.evaluate(series)?;
    Ok(SweepRow {
        short_window: pair.short_window,
        long_window: pair.long_window,
        inverted: pair.is_inverted(),
        transitions: output.transitions.len(),
        long_bars: output.signal.long_count(),
        final_regime: output.signal.last_regime(),
        recommendation: output.latest_recommendation(),
    })
}
