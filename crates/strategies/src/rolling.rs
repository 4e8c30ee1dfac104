// In crates/strategies/src/rolling.rs

use core_types::{Error, Result};

/// Simple moving average over `values` with a fixed `window`.
///
/// The output has the same length as the input. Position `i` holds the mean of
/// `values[i + 1 - window ..= i]`, or `None` while fewer than `window` values
/// have been seen. A window that contains a `NaN` is `None` as well: an
/// incomplete window gives an incomplete average.
///
/// A window longer than the input is allowed and yields only `None`s.
pub fn rolling_mean(values: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(Error::invalid_parameter("window", "must be greater than 0"));
    }

    let mut averages = vec![None; values.len()];
    // Each mean is summed from exactly `window` terms; no running sum, so
    // there is no drift across long series.
    for (start, slice) in values.windows(window).enumerate() {
        let sum: f64 = slice.iter().sum();
        if !sum.is_nan() {
            averages[start + window - 1] = Some(sum / window as f64);
        }
    }
    Ok(averages)
}
