// In crates/series-source/src/json_file.rs

use std::fs;
use std::path::PathBuf;

use crate::{Error, Result, SeriesSource};
use core_types::{DateRange, PricePoint, PriceSeries, Symbol};

/// Reads daily closes from `<dir>/<SYMBOL>.json`.
///
/// Each file holds an array of `{ "date": "YYYY-MM-DD", "close": 123.4 }`
/// objects; a `null` close marks a missing observation.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, symbol: &Symbol) -> Result<PathBuf> {
        let name = symbol.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(core_types::Error::invalid_parameter(
                "symbol",
                format!("`{name}` is not a valid ticker"),
            )
            .into());
        }
        Ok(self.dir.join(format!("{name}.json")))
    }
}

impl SeriesSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json-file"
    }

    fn fetch(&self, symbol: &Symbol, range: &DateRange) -> Result<PriceSeries> {
        let path = self.path_for(symbol)?;
        if !path.is_file() {
            return Err(Error::NotFound(symbol.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let points: Vec<PricePoint> = serde_json::from_str(&content)?;
        // Validate the whole file, not just the requested slice: a broken file
        // should fail the same way whatever range is asked for.
        let full = PriceSeries::try_from_points(points)?;
        let series = full.within(range);

        tracing::info!(
            symbol = %symbol,
            path = %path.display(),
            total = full.len(),
            selected = series.len(),
            "Loaded price history."
        );
        Ok(series)
    }
}
