// In crates/series-source/src/lib.rs

use core_types::{DateRange, PriceSeries, Symbol};

pub mod error;
pub mod json_file;
pub mod memory;

// Re-export public types
pub use error::{Error, Result};
pub use json_file::JsonFileSource;
pub use memory::InMemorySource;

/// Anything that can hand over the daily closes of a ticker.
///
/// Implementations must return a series restricted to `range` (start
/// inclusive, end exclusive), ascending by date with no duplicate dates.
/// Building the result through `PriceSeries` enforces the latter.
pub trait SeriesSource {
    /// A short label for logs.
    fn name(&self) -> &'static str;

    fn fetch(&self, symbol: &Symbol, range: &DateRange) -> Result<PriceSeries>;
}
