//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// A postal address. Only `country` and `city` matter for shipping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Address {
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub street: String,
}

impl Address {
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            street: street.into(),
        }
    }
}

/// Represents a line item in the shopping cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Catalog identifier of the product
    pub product_id: String,

    /// Display name of the product
    pub product_name: String,

    /// Unit price. Not used by shipping.
    #[serde(default)]
    pub price: f64,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Customer tier. Premium customers skip the Expedited and Priority surcharge.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CustomerType {
    #[default]
    Standard,
    Premium,
}

/// Shipping speed chosen for the cart, slowest first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    #[default]
    Standard,
    Expedited,
    Priority,
    Express,
}

impl ShippingMethod {
    /// All methods in ascending cost order.
    pub const ALL: [ShippingMethod; 4] = [
        ShippingMethod::Standard,
        ShippingMethod::Expedited,
        ShippingMethod::Priority,
        ShippingMethod::Express,
    ];

    /// Surcharge factor applied to the base cost for this method.
    pub const fn multiplier(self) -> f64 {
        match self {
            ShippingMethod::Standard => 1.0,
            ShippingMethod::Expedited => 1.2,
            ShippingMethod::Priority => 2.0,
            ShippingMethod::Express => 2.5,
        }
    }
}

/// A shopping cart as handed to the calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart identifier
    pub id: String,

    /// Owning customer
    pub customer_id: String,

    #[serde(default)]
    pub customer_type: CustomerType,

    #[serde(default)]
    pub shipping_method: ShippingMethod,

    /// Destination of the shipment
    pub shipping_address: Address,

    /// Line items, in the order they were added
    #[serde(default)]
    pub items: Vec<Item>,
}
