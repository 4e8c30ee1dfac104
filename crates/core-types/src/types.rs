// In crates/core-types/src/types.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A ticker symbol, e.g. "AAPL" or "BTC-USD".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A half-open calendar range: `start` is included, `end` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_parameter(
                "date_range",
                format!("start date {start} is after end date {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// A single daily observation. A `NaN` close marks a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "date")]
    pub timestamp: NaiveDate,
    #[serde(with = "missing_as_null")]
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: NaiveDate, close: f64) -> Self {
        Self { timestamp, close }
    }

    pub fn is_missing(&self) -> bool {
        self.close.is_nan()
    }
}

/// An immutable price history, strictly ascending by date.
///
/// The only way to build one is through [`PriceSeries::try_from_points`], so every
/// `PriceSeries` in the program already satisfies the ordering and uniqueness
/// preconditions the engine relies on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates and wraps a list of observations.
    ///
    /// Fails with [`Error::MalformedInput`] if dates are not strictly ascending
    /// (which also rules out duplicates) or if a close is negative or infinite.
    pub fn try_from_points(points: Vec<PricePoint>) -> Result<Self> {
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(Error::MalformedInput(format!(
                    "timestamps must be strictly ascending, but {} at index {} follows {}",
                    pair[1].timestamp,
                    i + 1,
                    pair[0].timestamp
                )));
            }
        }
        if let Some((i, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.close < 0.0 || p.close.is_infinite())
        {
            return Err(Error::MalformedInput(format!(
                "close at index {} ({}) must be a finite non-negative number, got {}",
                i, p.timestamp, p.close
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.timestamp)
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Returns the sub-series falling inside `range`.
    pub fn within(&self, range: &DateRange) -> PriceSeries {
        // Any subsequence of an ascending series is still ascending.
        PriceSeries {
            points: self
                .points
                .iter()
                .filter(|p| range.contains(p.timestamp))
                .copied()
                .collect(),
        }
    }
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = Error;

    fn try_from(points: Vec<PricePoint>) -> Result<Self> {
        Self::try_from_points(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

/// One entry of a moving-average series. `value` is `None` until enough
/// observations are available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaPoint {
    #[serde(rename = "date")]
    pub timestamp: NaiveDate,
    pub value: Option<f64>,
}

/// A moving average aligned index-for-index with the series it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAverageSeries {
    pub window: usize,
    pub points: Vec<MaPoint>,
}

impl MovingAverageSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.value)
    }
}

/// The discrete position derived from comparing two moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    #[default]
    Flat,
    Long,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Flat => f.pad("FLAT"),
            Regime::Long => f.pad("LONG"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimePoint {
    #[serde(rename = "date")]
    pub timestamp: NaiveDate,
    pub regime: Regime,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SignalSeries {
    pub points: Vec<RegimePoint>,
}

impl SignalSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn regimes(&self) -> Vec<Regime> {
        self.points.iter().map(|p| p.regime).collect()
    }

    /// Number of bars spent in the `Long` regime.
    pub fn long_count(&self) -> usize {
        self.points.iter().filter(|p| p.regime == Regime::Long).count()
    }

    pub fn last_regime(&self) -> Option<Regime> {
        self.points.last().map(|p| p.regime)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionDirection {
    EnterLong,
    ExitLong,
}

impl TransitionDirection {
    /// The direction of a move from `previous` to `current`, if the regime changed.
    pub fn between(previous: Regime, current: Regime) -> Option<Self> {
        match (previous, current) {
            (Regime::Flat, Regime::Long) => Some(TransitionDirection::EnterLong),
            (Regime::Long, Regime::Flat) => Some(TransitionDirection::ExitLong),
            _ => None,
        }
    }
}

impl fmt::Display for TransitionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionDirection::EnterLong => f.pad("ENTER_LONG"),
            TransitionDirection::ExitLong => f.pad("EXIT_LONG"),
        }
    }
}

/// A regime change at `index` (never 0) relative to the bar before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionEvent {
    pub index: usize,
    #[serde(rename = "date")]
    pub timestamp: NaiveDate,
    pub direction: TransitionDirection,
}

/// Serializes a missing (`NaN`) close as JSON `null` and back.
mod missing_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
