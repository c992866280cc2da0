//! Shipping Module
//!
//! This module contains the shipping cost logic, including:
//! - The calculator (locality tiers, method multipliers, customer override)
//! - Rate and office configuration
//! - Configuration errors

pub mod calculator;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use calculator::{method_multiplier, LocalityTier, ShippingCalculator};
pub use config::{ShippingConfig, ShippingRates};
pub use error::{Result, ShippingError};
