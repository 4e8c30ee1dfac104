// In crates/series-source/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No price history found for symbol {0}")]
    NotFound(String),
    #[error("Failed to read price file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] core_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
