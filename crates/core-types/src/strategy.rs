use serde::{Deserialize, Serialize};

use crate::types::{DateRange, Symbol};

/// Whether a ticker is an equity or a cryptocurrency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Stock,
    Crypto,
}

impl AssetKind {
    /// Guesses the asset kind from the ticker: quote-suffixed pairs such as
    /// "BTC-USD" are crypto, everything else is treated as a stock.
    pub fn infer(symbol: &Symbol) -> Self {
        const QUOTES: [&str; 4] = ["USD", "USDT", "EUR", "BTC"];
        match symbol.as_str().rsplit_once('-') {
            Some((base, quote)) if !base.is_empty() && QUOTES.contains(&quote) => AssetKind::Crypto,
            _ => AssetKind::Stock,
        }
    }
}

/// Everything a single crossover run needs, passed by value into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverParams {
    pub symbol: Symbol,
    pub asset_kind: AssetKind,
    pub short_window: usize,
    pub long_window: usize,
    pub date_range: DateRange,
}

impl CrossoverParams {
    pub fn new(symbol: Symbol, short_window: usize, long_window: usize, date_range: DateRange) -> Self {
        Self {
            asset_kind: AssetKind::infer(&symbol),
            symbol,
            short_window,
            long_window,
            date_range,
        }
    }
}
