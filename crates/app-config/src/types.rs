// In crates/app-config/src/types.rs

use chrono::NaiveDate;
use serde::Deserialize;

use core_types::{AssetKind, CrossoverParams, DateRange, Symbol};
use strategies::types::{MACrossoverSettings, SmaSettings};

// Define the container for all strategy settings
#[derive(Deserialize, Debug, Default, Clone)]
pub struct StrategySettings {
    #[serde(default)]
    pub ma_crossover: MACrossoverSettings,
    #[serde(default)]
    pub sma: SmaSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Where price histories are read from.
    pub data: DataSettings,
    /// The ticker and period to analyse.
    pub signal: SignalSettings,
    #[serde(default)]
    pub strategies: StrategySettings,
    #[serde(default)]
    pub sweep: SweepSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
    /// Worker threads for the parameter sweep. 0 lets rayon decide.
    #[serde(default)]
    pub sweep_threads: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DataSettings {
    /// Directory holding one `<SYMBOL>.json` file per ticker.
    pub dir: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SignalSettings {
    pub symbol: String,
    /// Overrides the kind inferred from the ticker.
    pub asset_kind: Option<AssetKind>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The grid of window pairs evaluated by the sweep.
#[derive(Deserialize, Debug, Clone)]
pub struct SweepSettings {
    #[serde(default = "default_sweep_short")]
    pub short_windows: Vec<usize>,
    #[serde(default = "default_sweep_long")]
    pub long_windows: Vec<usize>,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            short_windows: default_sweep_short(),
            long_windows: default_sweep_long(),
        }
    }
}

impl Settings {
    /// Turns the configured ticker, period and crossover windows into the
    /// explicit parameter set the engine runs with.
    pub fn crossover_params(&self) -> crate::Result<CrossoverParams> {
        let range = DateRange::new(self.signal.start_date, self.signal.end_date)?;
        let crossover = &self.strategies.ma_crossover;
        let mut params = CrossoverParams::new(
            Symbol::new(self.signal.symbol.clone()),
            crossover.short_window,
            crossover.long_window,
            range,
        );
        if let Some(kind) = self.signal.asset_kind {
            params.asset_kind = kind;
        }
        Ok(params)
    }
}

/// Helper functions for serde defaults
fn default_sweep_short() -> Vec<usize> { vec![5, 10, 20] }
fn default_sweep_long() -> Vec<usize> { vec![50, 100, 200] }
