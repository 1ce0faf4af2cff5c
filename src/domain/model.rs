use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque menu item identifier shared by the catalog and the cart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

/// One cart entry. Quantities are signed: the ledger sums whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

/// Body of `POST /place_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub cart: Vec<CartLine>,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub message: String,
}

/// One row of `GET /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: u64,
    pub item_name: String,
    pub quantity: i64,
    pub delivery_address: String,
    pub order_timestamp: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
}
