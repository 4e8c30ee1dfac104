// In crates/series-source/src/memory.rs

use std::collections::HashMap;

use crate::{Error, Result, SeriesSource};
use core_types::{DateRange, PriceSeries, Symbol};

/// Serves series that are already in memory. Handy for tests and for callers
/// that fetched the data some other way.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    series: HashMap<Symbol, PriceSeries>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: Symbol, series: PriceSeries) -> Self {
        self.insert(symbol, series);
        self
    }

    pub fn insert(&mut self, symbol: Symbol, series: PriceSeries) {
        self.series.insert(symbol, series);
    }
}

impl SeriesSource for InMemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, symbol: &Symbol, range: &DateRange) -> Result<PriceSeries> {
        self.series
            .get(symbol)
            .map(|series| series.within(range))
            .ok_or_else(|| Error::NotFound(symbol.to_string()))
    }
}
