// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MACrossoverSettings {
    /// Window of the fast average. Expected, but not required, to be shorter
    /// than `long_window`.
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    #[serde(default = "default_long_window")]
    pub long_window: usize,
}

impl MACrossoverSettings {
    /// True when the "short" window is not actually shorter than the "long" one.
    pub fn is_inverted(&self) -> bool {
        self.short_window >= self.long_window
    }
}

impl Default for MACrossoverSettings {
    fn default() -> Self {
        Self {
            short_window: default_short_window(),
            long_window: default_long_window(),
        }
    }
}

/// Settings for the single-window overlay chart.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SmaSettings {
    #[serde(default = "default_sma_window")]
    pub window: usize,
}

impl Default for SmaSettings {
    fn default() -> Self {
        Self { window: default_sma_window() }
    }
}

fn default_short_window() -> usize { 10 }
fn default_long_window() -> usize { 50 }
fn default_sma_window() -> usize { 20 }
