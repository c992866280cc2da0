//! Shipping Calculator Library
//!
//! This library computes the shipping cost of a shopping cart from its
//! destination, shipping method, customer tier and line items.

// Domain modules
pub mod cart;
pub mod shipping;

pub use shipping::{
    LocalityTier, ShippingCalculator, ShippingConfig, ShippingError, ShippingRates,
};
