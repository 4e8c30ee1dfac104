// In crates/analytics/src/summary.rs

use crate::types::SummaryStatistics;
use core_types::{Error, PriceSeries, Result};

/// Mean, min and max of the closes in `series`.
///
/// Missing closes are skipped. A series with no observed close at all fails
/// with [`Error::EmptySeries`] rather than reporting `NaN`.
pub fn compute_summary(series: &PriceSeries) -> Result<SummaryStatistics> {
    let observed: Vec<f64> = series
        .points()
        .iter()
        .filter(|p| !p.is_missing())
        .map(|p| p.close)
        .collect();

    if observed.is_empty() {
        return Err(Error::EmptySeries(
            "summary statistics need at least one observed close".into(),
        ));
    }

    let sum: f64 = observed.iter().sum();
    let min = observed.iter().copied().fold(f64::INFINITY, f64::min);
    let max = observed.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(SummaryStatistics {
        mean: sum / observed.len() as f64,
        min,
        max,
        observations: observed.len(),
    })
}
