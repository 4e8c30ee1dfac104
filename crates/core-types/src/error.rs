// In crates/core-types/src/error.rs

use thiserror::Error;

/// Failures shared by every crate that computes over a `PriceSeries`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A window size or range bound the computation cannot work with.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A statistic that needs at least one observed close got none.
    #[error("Empty series: {0}")]
    EmptySeries(String),

    /// The input breaks the ordering, uniqueness or value preconditions.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl Error {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
