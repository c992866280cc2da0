//! Error types for shipping configuration.

use thiserror::Error;

/// Errors raised while building or loading a shipping configuration.
///
/// Cost calculation itself never fails.
#[derive(Debug, Error)]
pub enum ShippingError {
    /// Configuration file could not be read.
    #[error("failed to read shipping config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration was not valid JSON or had the wrong shape.
    #[error("failed to parse shipping config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rate was negative, NaN or infinite.
    #[error("invalid {name} rate: {value}")]
    InvalidRate {
        /// Which rate was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Rates must grow with distance.
    #[error(
        "rates must satisfy same city < same country < international, got {same_city} / {same_country} / {international}"
    )]
    RateOrdering {
        same_city: f64,
        same_country: f64,
        international: f64,
    },
}

/// Result alias for shipping configuration operations.
pub type Result<T> = std::result::Result<T, ShippingError>;
