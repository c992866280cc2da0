//! Shipping cost calculation
//!
//! Cost = total item count × tier rate × method multiplier, where the tier is
//! picked by comparing the destination with the office address and Premium
//! customers ship Expedited and Priority at the Standard price.

use super::config::{ShippingConfig, ShippingRates};
use crate::cart::helpers::{format_item_summary, total_item_count};
use crate::cart::models::{Address, Cart, CustomerType, ShippingMethod};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where a destination lies relative to the office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LocalityTier {
    SameCity,
    SameCountry,
    International,
}

/// Multiplier for `method`, after the customer-tier override.
pub fn method_multiplier(customer_type: CustomerType, method: ShippingMethod) -> f64 {
    // Premium waives the Expedited and Priority surcharge, never Express.
    if customer_type == CustomerType::Premium
        && matches!(method, ShippingMethod::Expedited | ShippingMethod::Priority)
    {
        return 1.0;
    }

    method.multiplier()
}

/// Computes shipping costs from a fixed office address.
///
/// Immutable after construction, so one instance can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingCalculator {
    office: Address,
    rates: ShippingRates,
}

impl ShippingCalculator {
    /// Creates a calculator with the default rate table.
    pub fn new(office: Address) -> Self {
        Self::with_rates(office, ShippingRates::default())
    }

    pub fn with_rates(office: Address, rates: ShippingRates) -> Self {
        debug!(
            office_city = %office.city,
            office_country = %office.country,
            same_city = rates.same_city(),
            same_country = rates.same_country(),
            international = rates.international(),
            "shipping calculator configured"
        );

        Self { office, rates }
    }

    pub fn from_config(config: ShippingConfig) -> Self {
        Self::with_rates(config.office, config.rates)
    }

    pub fn office(&self) -> &Address {
        &self.office
    }

    pub fn rates(&self) -> &ShippingRates {
        &self.rates
    }

    /// Classifies `destination` by city and country. Street is ignored.
    pub fn locality_tier(&self, destination: &Address) -> LocalityTier {
        if destination.country != self.office.country {
            LocalityTier::International
        } else if destination.city != self.office.city {
            LocalityTier::SameCountry
        } else {
            LocalityTier::SameCity
        }
    }

    /// Shipping cost of `cart`. Zero for a cart with no items.
    #[instrument(level = "debug", skip(self, cart), fields(cart_id = %cart.id))]
    pub fn calculate_shipping_cost(&self, cart: &Cart) -> f64 {
        let item_count = total_item_count(&cart.items);
        if item_count == 0 {
            debug!("empty cart ships free");
            return 0.0;
        }

        let tier = self.locality_tier(&cart.shipping_address);
        let base_cost = item_count as f64 * self.rates.rate_for(tier);
        let multiplier = method_multiplier(cart.customer_type, cart.shipping_method);
        let cost = base_cost * multiplier;

        debug!(
            ?tier,
            item_count,
            method = ?cart.shipping_method,
            customer_type = ?cart.customer_type,
            multiplier,
            cost,
            items = %format_item_summary(&cart.items),
            "calculated shipping cost"
        );

        cost
    }
}
