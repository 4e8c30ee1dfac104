// In crates/analytics/src/returns.rs

use crate::types::{DailyChange, ReturnStatistics};
use core_types::{Error, PriceSeries, Result};

/// Used to annualise daily figures.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Relative change of each close against the previous bar.
pub fn compute_daily_changes(series: &PriceSeries) -> Vec<DailyChange> {
    let points = series.points();
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let change = i
                .checked_sub(1)
                .map(|prev| points[prev].close)
                // A zero or missing previous close has no meaningful ratio.
                .filter(|prev| *prev > 0.0)
                .map(|prev| point.close / prev - 1.0)
                .filter(|change| !change.is_nan());
            DailyChange {
                timestamp: point.timestamp,
                change,
            }
        })
        .collect()
}

/// Annualised mean daily change and volatility (population standard
/// deviation), both in percent.
pub fn compute_return_statistics(series: &PriceSeries) -> Result<ReturnStatistics> {
    let changes: Vec<f64> = compute_daily_changes(series)
        .into_iter()
        .filter_map(|c| c.change)
        .collect();

    if changes.is_empty() {
        return Err(Error::EmptySeries(
            "return statistics need at least two consecutive observed closes".into(),
        ));
    }

    let n = changes.len() as f64;
    let mean = changes.iter().sum::<f64>() / n;
    let variance = changes.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;

    let stats = ReturnStatistics {
        annual_return_pct: mean * TRADING_DAYS_PER_YEAR * 100.0,
        annual_volatility_pct: variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt() * 100.0,
        observations: changes.len(),
    };
    tracing::debug!(
        observations = stats.observations,
        annual_return_pct = stats.annual_return_pct,
        annual_volatility_pct = stats.annual_volatility_pct,
        "Computed return statistics."
    );
    Ok(stats)
}
