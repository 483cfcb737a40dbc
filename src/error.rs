//! Error types for ratesync

use thiserror::Error;

/// Main error type for ratesync
///
/// Errors only arise while building a [`crate::rates::RateTable`]; the event
/// path never fails. Malformed amounts degrade to `0.0` and missing rates
/// fall back to `1.0` instead of erroring.
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Rate must be positive, got: {0}")]
    InvalidRate(f64),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Result type alias for ratesync operations
pub type Result<T> = std::result::Result<T, ConverterError>;
