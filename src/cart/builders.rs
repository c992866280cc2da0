//! Fluent builders for cart data
//!
//! Every field starts from a usable default so callers only spell out what
//! matters to them.

use super::helpers::get_or_create_cart_id;
use super::models::{Address, Cart, CustomerType, Item, ShippingMethod};

/// Builds an [`Address`]. Defaults to `country` / `city` / `street`.
#[derive(Debug, Clone)]
pub struct AddressBuilder {
    country: String,
    city: String,
    street: String,
}

impl Default for AddressBuilder {
    fn default() -> Self {
        Self {
            country: "country".to_string(),
            city: "city".to_string(),
            street: "street".to_string(),
        }
    }
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn build(self) -> Address {
        Address {
            country: self.country,
            city: self.city,
            street: self.street,
        }
    }
}

/// Builds an [`Item`]. Defaults to one unit of `prod-1` at price 1.0.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    product_id: String,
    product_name: String,
    price: f64,
    quantity: u32,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self {
            product_id: "prod-1".to_string(),
            product_name: "Product 1".to_string(),
            price: 1.0,
            quantity: 1,
        }
    }
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = product_id.into();
        self
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = product_name.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn build(self) -> Item {
        Item {
            product_id: self.product_id,
            product_name: self.product_name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Builds a [`Cart`].
///
/// Defaults: id `1`, customer `cust-1`, standard customer, standard shipping,
/// the default [`AddressBuilder`] address and no items.
#[derive(Debug, Clone)]
pub struct CartBuilder {
    id: String,
    customer_id: String,
    customer_type: CustomerType,
    shipping_method: ShippingMethod,
    shipping_address: Address,
    items: Vec<Item>,
}

impl Default for CartBuilder {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            customer_id: "cust-1".to_string(),
            customer_type: CustomerType::Standard,
            shipping_method: ShippingMethod::Standard,
            shipping_address: AddressBuilder::new().build(),
            items: Vec::new(),
        }
    }
}

impl CartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replaces the id with a freshly generated UUID.
    pub fn with_generated_id(mut self) -> Self {
        self.id = get_or_create_cart_id(None);
        self
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    pub fn with_customer_type(mut self, customer_type: CustomerType) -> Self {
        self.customer_type = customer_type;
        self
    }

    pub fn with_shipping_method(mut self, shipping_method: ShippingMethod) -> Self {
        self.shipping_method = shipping_method;
        self
    }

    pub fn with_shipping_address(mut self, shipping_address: Address) -> Self {
        self.shipping_address = shipping_address;
        self
    }

    /// Appends one item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Replaces all items.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn build(self) -> Cart {
        Cart {
            id: self.id,
            customer_id: self.customer_id,
            customer_type: self.customer_type,
            shipping_method: self.shipping_method,
            shipping_address: self.shipping_address,
            items: self.items,
        }
    }
}
