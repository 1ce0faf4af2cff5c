pub mod cart;
pub mod catalog;

pub use crate::domain::model::{CartLine, ItemId, MenuItem, PlaceOrderRequest};
pub use crate::domain::ports::{DisplayHook, PriceCatalog};
pub use crate::utils::error::Result;
