use crate::core::{ItemId, MenuItem, PriceCatalog};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Illustrative client-side prices, used when no menu is configured.
const DEFAULT_MENU: [(u32, &str, f64); 5] = [
    (1, "Biriyani", 180.00),
    (2, "Paneer", 150.00),
    (3, "Butter Chicken", 200.00),
    (4, "Veg Momos", 90.00),
    (5, "Chicken Wings", 120.00),
];

#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: HashMap<ItemId, MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    pub fn default_menu() -> Self {
        Self::new(DEFAULT_MENU.iter().map(|&(id, name, price)| MenuItem {
            id: ItemId(id),
            name: name.to_string(),
            price,
        }))
    }

    pub fn get(&self, item_id: ItemId) -> Option<&MenuItem> {
        self.items.get(&item_id)
    }

    /// Menu entries ordered by id.
    pub fn items(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.values().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PriceCatalog for MenuCatalog {
    fn price(&self, item_id: ItemId) -> f64 {
        self.items.get(&item_id).map(|item| item.price).unwrap_or(0.0)
    }
}

/// Catalog handle that can be refreshed while a cart holds a clone of it.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<MenuCatalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn replace(&self, catalog: MenuCatalog) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tracing::debug!("Replacing catalog ({} -> {} items)", guard.len(), catalog.len());
        *guard = catalog;
    }

    pub fn snapshot(&self) -> MenuCatalog {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl PriceCatalog for SharedCatalog {
    fn price(&self, item_id: ItemId) -> f64 {
        match self.inner.read() {
            Ok(guard) => guard.price(item_id),
            Err(poisoned) => poisoned.into_inner().price(item_id),
        }
    }
}
