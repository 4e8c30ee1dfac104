// In crates/analytics/src/lib.rs

pub mod returns;
pub mod summary;
pub mod types;

pub use returns::{compute_daily_changes, compute_return_statistics, TRADING_DAYS_PER_YEAR};
pub use summary::compute_summary;
pub use types::{DailyChange, ReturnStatistics, SummaryStatistics};
