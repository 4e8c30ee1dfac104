// In crates/strategies/src/ma_crossover.rs

use crate::rolling::rolling_mean;
use crate::types::MACrossoverSettings;
use core_types::{
    CrossoverParams, Error, MaPoint, MovingAverageSeries, PriceSeries, Regime, RegimePoint, Result,
    SignalSeries, TransitionDirection, TransitionEvent,
};
use serde::Serialize;

/// What the crossover says to do at the last available bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Buy,
    Sell,
}

/// Everything derived from one price series and one pair of windows.
///
/// All four series have the length of the input series. `transitions` is
/// ordered by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossoverOutput {
    pub short_ma: MovingAverageSeries,
    pub long_ma: MovingAverageSeries,
    pub signal: SignalSeries,
    pub transitions: Vec<TransitionEvent>,
}

impl CrossoverOutput {
    /// `Buy` only when the final bar is itself an entry; any other final bar reads
    /// as `Sell`. `None` for an empty series.
    pub fn latest_recommendation(&self) -> Option<Recommendation> {
        let last_index = self.signal.len().checked_sub(1)?;
        let entered_on_last = self.transitions.last().is_some_and(|t| {
            t.index == last_index && t.direction == TransitionDirection::EnterLong
        });
        Some(if entered_on_last {
            Recommendation::Buy
        } else {
            Recommendation::Sell
        })
    }
}

/// Computes a simple moving average of the closes in `series`.
pub fn compute_moving_average(series: &PriceSeries, window: usize) -> Result<MovingAverageSeries> {
    let values = rolling_mean(&series.closes(), window)?;
    let points = series
        .timestamps()
        .zip(values)
        .map(|(timestamp, value)| MaPoint { timestamp, value })
        .collect();
    Ok(MovingAverageSeries { window, points })
}

/// Runs the crossover: two moving averages, the regime at every bar, and the
/// bars where the regime flips.
///
/// A `short_window` that is not shorter than `long_window` is accepted; the
/// result is well defined, just not a conventional crossover.
pub fn compute_signal(
    series: &PriceSeries,
    short_window: usize,
    long_window: usize,
) -> Result<CrossoverOutput> {
    validate_window("short_window", short_window)?;
    validate_window("long_window", long_window)?;
    if (MACrossoverSettings { short_window, long_window }).is_inverted() {
        tracing::warn!(
            short_window,
            long_window,
            "Short window is not shorter than long window; the crossover signal is inverted."
        );
    }

    let short_ma = compute_moving_average(series, short_window)?;
    let long_ma = compute_moving_average(series, long_window)?;

    let points: Vec<RegimePoint> = short_ma
        .points
        .iter()
        .zip(&long_ma.points)
        .map(|(short, long)| RegimePoint {
            timestamp: short.timestamp,
            regime: regime_of(short.value, long.value),
        })
        .collect();

    let transitions: Vec<TransitionEvent> = points
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            TransitionDirection::between(pair[0].regime, pair[1].regime).map(|direction| {
                TransitionEvent {
                    index: i + 1,
                    timestamp: pair[1].timestamp,
                    direction,
                }
            })
        })
        .collect();

    tracing::debug!(
        bars = series.len(),
        short_window,
        long_window,
        transitions = transitions.len(),
        "Computed crossover signal."
    );

    Ok(CrossoverOutput {
        short_ma,
        long_ma,
        signal: SignalSeries { points },
        transitions,
    })
}

/// `Long` only when both averages exist and the short one is strictly above.
fn regime_of(short: Option<f64>, long: Option<f64>) -> Regime {
    match (short, long) {
        (Some(s), Some(l)) if s > l => Regime::Long,
        _ => Regime::Flat,
    }
}

fn validate_window(name: &str, window: usize) -> Result<()> {
    if window == 0 {
        return Err(Error::invalid_parameter(name, "must be greater than 0"));
    }
    Ok(())
}

/// A configured crossover, reusable across any number of series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MACrossover {
    settings: MACrossoverSettings,
}

impl MACrossover {
    /// Creates a new `MACrossover` from its settings, rejecting zero windows up front.
    pub fn new(settings: MACrossoverSettings) -> Result<Self> {
        validate_window("short_window", settings.short_window)?;
        validate_window("long_window", settings.long_window)?;
        Ok(Self { settings })
    }

    pub fn from_params(params: &CrossoverParams) -> Result<Self> {
        Self::new(MACrossoverSettings {
            short_window: params.short_window,
            long_window: params.long_window,
        })
    }

    pub fn settings(&self) -> &MACrossoverSettings {
        &self.settings
    }

    pub fn name(&self) -> &'static str {
        "SmaCrossover"
    }

    pub fn evaluate(&self, series: &PriceSeries) -> Result<CrossoverOutput> {
        compute_signal(series, self.settings.short_window, self.settings.long_window)
    }
}
