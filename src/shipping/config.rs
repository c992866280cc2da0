//! Shipping configuration: the office address and the per-tier rate table.

use super::error::{Result, ShippingError};
use super::LocalityTier;
use crate::cart::models::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

// =============================================================================
// Rate Table
// =============================================================================

/// Default cost per item when shipping within the office's city
pub const SAME_CITY_RATE: f64 = 1.0;
/// Default cost per item when shipping within the office's country
pub const SAME_COUNTRY_RATE: f64 = 2.0;
/// Default cost per item when shipping abroad
pub const INTERNATIONAL_SHIPPING_RATE: f64 = 15.0;

/// Per-item cost for each locality tier.
///
/// Always finite, non-negative and strictly increasing with distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawRates")]
pub struct ShippingRates {
    same_city: f64,
    same_country: f64,
    international: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRates {
    same_city: f64,
    same_country: f64,
    international: f64,
}

impl TryFrom<RawRates> for ShippingRates {
    type Error = ShippingError;

    fn try_from(raw: RawRates) -> Result<Self> {
        Self::new(raw.same_city, raw.same_country, raw.international)
    }
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self {
            same_city: SAME_CITY_RATE,
            same_country: SAME_COUNTRY_RATE,
            international: INTERNATIONAL_SHIPPING_RATE,
        }
    }
}

impl ShippingRates {
    pub fn new(same_city: f64, same_country: f64, international: f64) -> Result<Self> {
        for (name, value) in [
            ("same city", same_city),
            ("same country", same_country),
            ("international", international),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ShippingError::InvalidRate { name, value });
            }
        }

        if !(same_city < same_country && same_country < international) {
            return Err(ShippingError::RateOrdering {
                same_city,
                same_country,
                international,
            });
        }

        Ok(Self {
            same_city,
            same_country,
            international,
        })
    }

    pub fn same_city(&self) -> f64 {
        self.same_city
    }

    pub fn same_country(&self) -> f64 {
        self.same_country
    }

    pub fn international(&self) -> f64 {
        self.international
    }

    /// Per-item rate for the given tier.
    pub fn rate_for(&self, tier: LocalityTier) -> f64 {
        match tier {
            LocalityTier::SameCity => self.same_city,
            LocalityTier::SameCountry => self.same_country,
            LocalityTier::International => self.international,
        }
    }
}

// =============================================================================
// Calculator Configuration
// =============================================================================

/// Everything a [`ShippingCalculator`](super::ShippingCalculator) is built from.
///
/// ```json
/// {
///   "office": { "country": "country 1", "city": "city 1", "street": "1 Main St" },
///   "rates": { "sameCity": 1.0, "sameCountry": 2.0, "international": 15.0 }
/// }
/// ```
///
/// `rates` may be omitted to use the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingConfig {
    /// Origin of every shipment
    pub office: Address,

    #[serde(default)]
    pub rates: ShippingRates,
}

impl ShippingConfig {
    pub fn new(office: Address) -> Self {
        Self {
            office,
            rates: ShippingRates::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;

        info!(
            path = %path.display(),
            office_city = %config.office.city,
            office_country = %config.office.country,
            "loaded shipping config"
        );

        Ok(config)
    }
}
