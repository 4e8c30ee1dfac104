// In crates/strategies/src/lib.rs

pub mod ma_crossover;
pub mod rolling;
pub mod types;

pub use ma_crossover::{
    compute_moving_average, compute_signal, CrossoverOutput, MACrossover, Recommendation,
};
pub use rolling::rolling_mean;
