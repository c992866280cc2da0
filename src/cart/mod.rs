//! Shopping Cart Domain Module
//!
//! This module contains the cart data the shipping calculator reads:
//! - Domain models (Address, Item, Cart, customer and shipping enums)
//! - Helpers (item counting, summaries, cart ids)
//! - Fluent builders for assembling carts

pub mod builders;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use builders::{AddressBuilder, CartBuilder, ItemBuilder};
pub use models::{Address, Cart, CustomerType, Item, ShippingMethod};
