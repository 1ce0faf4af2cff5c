use crate::domain::model::ItemId;
use std::collections::HashMap;
use std::sync::Arc;

/// Unit price lookup consumed by the cart. Unknown items are priced at 0.
pub trait PriceCatalog {
    fn price(&self, item_id: ItemId) -> f64;
}

impl PriceCatalog for HashMap<ItemId, f64> {
    fn price(&self, item_id: ItemId) -> f64 {
        self.get(&item_id).copied().unwrap_or(0.0)
    }
}

impl<T: PriceCatalog + ?Sized> PriceCatalog for &T {
    fn price(&self, item_id: ItemId) -> f64 {
        (**self).price(item_id)
    }
}

impl<T: PriceCatalog + ?Sized> PriceCatalog for Arc<T> {
    fn price(&self, item_id: ItemId) -> f64 {
        (**self).price(item_id)
    }
}

/// Callback fired after every cart mutation.
pub type DisplayHook = Box<dyn Fn() + Send + Sync>;
