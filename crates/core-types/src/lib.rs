// In crates/core-types/src/lib.rs

pub mod error;
pub mod strategy;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use error::{Error, Result};
pub use strategy::{AssetKind, CrossoverParams};
pub use types::{
    DateRange, MaPoint, MovingAverageSeries, PricePoint, PriceSeries, Regime, RegimePoint,
    SignalSeries, Symbol, TransitionDirection, TransitionEvent,
};
