pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::ApiClient;
pub use config::AppConfig;
pub use core::{
    cart::CartLedger,
    catalog::{MenuCatalog, SharedCatalog},
};
pub use domain::model::{CartLine, ItemId, MenuItem, OrderSummary, PlaceOrderRequest};
pub use domain::ports::PriceCatalog;
pub use utils::error::{AppError, Result};
