use crate::types::ids::{ProductId, RestaurantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restaurant {
    /// Restaurant id.
    pub id: RestaurantId,
    pub name: String,
    /// Postal address, also the key of its cached location.
    pub address: String,
    #[serde(default)]
    pub contact_phone: String,
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Current catalog price. Orders copy it into their lines when placed.
    pub price: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    /// Featured on the storefront.
    #[serde(default)]
    pub special_status: bool,
    #[serde(default)]
    pub description: String,
}

/// A product offered by a restaurant. Only available entries count when
/// looking for restaurants able to cook an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuEntry {
    pub restaurant_id: RestaurantId,
    pub product_id: ProductId,
    #[serde(default = "available_by_default")]
    pub is_available: bool,
}

fn available_by_default() -> bool {
    true
}

impl MenuEntry {
    pub fn available(restaurant_id: RestaurantId, product_id: ProductId) -> Self {
        Self {
            restaurant_id,
            product_id,
            is_available: true,
        }
    }
}
