// In crates/analytics/src/types.rs

use chrono::NaiveDate;
use serde::Serialize;

/// Descriptive statistics of the close column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Number of observed (non-missing) closes the figures were computed from.
    pub observations: usize,
}

/// Day-over-day relative change, aligned with the price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyChange {
    #[serde(rename = "date")]
    pub timestamp: NaiveDate,
    /// `close[i] / close[i-1] - 1`; `None` on the first bar or next to a missing close.
    pub change: Option<f64>,
}

/// Annualised mean and volatility of daily changes, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnStatistics {
    pub annual_return_pct: f64,
    pub annual_volatility_pct: f64,
    pub observations: usize,
}
