use crate::core::{CartLine, DisplayHook, ItemId, PlaceOrderRequest, PriceCatalog};
use std::collections::HashMap;
use std::fmt;

/// Client-held shopping cart.
///
/// Holds one line per item and prices it through an injected
/// [`PriceCatalog`]. Every mutation fires the display hook, when one is
/// registered, exactly once after the change is applied. No operation fails:
/// quantities are taken as given, so a negative `add_item` lowers the count
/// and unknown items contribute nothing to the total.
pub struct CartLedger<C: PriceCatalog> {
    catalog: C,
    items: HashMap<ItemId, i64>,
    on_change: Option<DisplayHook>,
}

impl<C: PriceCatalog> CartLedger<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            items: HashMap::new(),
            on_change: None,
        }
    }

    pub fn with_display_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(hook));
        self
    }

    pub fn set_display_hook<F>(&mut self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(hook));
    }

    pub fn clear_display_hook(&mut self) {
        self.on_change = None;
    }

    /// Adds to the line's count, saturating at the `i64` bounds.
    pub fn add_item(&mut self, item_id: ItemId, quantity: i64) {
        let count = self.items.entry(item_id).or_insert(0);
        *count = count.saturating_add(quantity);
        tracing::debug!("Cart: item {} now x{}", item_id, count);
        self.notify();
    }

    pub fn add_one(&mut self, item_id: ItemId) {
        self.add_item(item_id, 1);
    }

    pub fn remove_item(&mut self, item_id: ItemId) {
        self.remove_line(item_id);
        self.notify();
    }

    /// Overwrites the quantity; a non-positive value removes the line.
    pub fn update_quantity(&mut self, item_id: ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_line(item_id);
        } else {
            self.items.insert(item_id, quantity);
            tracing::debug!("Cart: item {} set to x{}", item_id, quantity);
        }
        self.notify();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("Cart cleared");
        self.notify();
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|(&item_id, &quantity)| self.item_price(item_id) * quantity as f64)
            .sum()
    }

    pub fn item_price(&self, item_id: ItemId) -> f64 {
        self.catalog.price(item_id)
    }

    pub fn quantity(&self, item_id: ItemId) -> Option<i64> {
        self.items.get(&item_id).copied()
    }

    /// Current lines ordered by item id.
    pub fn lines(&self) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = self
            .items
            .iter()
            .map(|(&item_id, &quantity)| CartLine { item_id, quantity })
            .collect();
        lines.sort_by_key(|line| line.item_id);
        lines
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn to_order_request(&self, address: impl Into<String>) -> PlaceOrderRequest {
        PlaceOrderRequest {
            cart: self.lines(),
            address: address.into(),
        }
    }

    fn remove_line(&mut self, item_id: ItemId) {
        if self.items.remove(&item_id).is_some() {
            tracing::debug!("Cart: item {} removed", item_id);
        }
    }

    fn notify(&self) {
        if let Some(hook) = &self.on_change {
            hook();
        }
    }
}

impl<C: PriceCatalog> fmt::Debug for CartLedger<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartLedger")
            .field("items", &self.lines())
            .field("has_display_hook", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MenuCatalog;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counted_cart() -> (CartLedger<MenuCatalog>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let cart = CartLedger::new(MenuCatalog::default_menu()).with_display_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (cart, calls)
    }

    #[test]
    fn test_repeated_add_accumulates() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_item(ItemId(1), 2);
        cart.add_item(ItemId(1), 3);

        assert_eq!(cart.quantity(ItemId(1)), Some(5));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_one_defaults_to_single_unit() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_one(ItemId(3));
        cart.add_one(ItemId(3));
        assert_eq!(cart.quantity(ItemId(3)), Some(2));
    }

    #[test]
    fn test_negative_add_is_summed() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_item(ItemId(1), 3);
        cart.add_item(ItemId(1), -1);
        assert_eq!(cart.quantity(ItemId(1)), Some(2));
        assert_eq!(cart.total(), 360.0);

        cart.add_item(ItemId(2), -2);
        assert_eq!(cart.quantity(ItemId(2)), Some(-2));
        assert_eq!(cart.total(), 60.0);
    }

    #[test]
    fn test_add_saturates_instead_of_overflowing() {
        let (mut cart, calls) = counted_cart();
        cart.add_item(ItemId(1), i64::MAX);
        cart.add_item(ItemId(1), 1);
        assert_eq!(cart.quantity(ItemId(1)), Some(i64::MAX));
        assert!(cart.total() > 0.0);

        cart.add_item(ItemId(2), i64::MIN);
        cart.add_item(ItemId(2), -1);
        assert_eq!(cart.quantity(ItemId(2)), Some(i64::MIN));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_non_positive_update_removes_line() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_item(ItemId(1), 2);
        cart.add_item(ItemId(2), 1);

        cart.update_quantity(ItemId(1), 0);
        assert_eq!(cart.quantity(ItemId(1)), None);

        cart.update_quantity(ItemId(2), -5);
        assert_eq!(cart.quantity(ItemId(2)), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_overwrites() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_item(ItemId(5), 4);
        cart.update_quantity(ItemId(5), 1);
        assert_eq!(cart.quantity(ItemId(5)), Some(1));

        cart.update_quantity(ItemId(2), 3);
        assert_eq!(cart.quantity(ItemId(2)), Some(3));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_item(ItemId(1), 2);
        let before = cart.lines();

        cart.remove_item(ItemId(99));
        assert_eq!(cart.lines(), before);
    }

    #[test]
    fn test_clear_zeroes_total() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_item(ItemId(1), 2);
        cart.add_item(ItemId(3), 1);
        assert!(cart.total() > 0.0);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_total_uses_catalog_prices() {
        let catalog: HashMap<ItemId, f64> = [(ItemId(1), 180.0), (ItemId(4), 90.0)].into();
        let mut cart = CartLedger::new(catalog);
        assert_eq!(cart.total(), 0.0);

        cart.add_item(ItemId(1), 2);
        cart.add_item(ItemId(4), 1);
        assert_eq!(cart.total(), 450.0);
    }

    #[test]
    fn test_unknown_items_price_at_zero() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        assert_eq!(cart.item_price(ItemId(404)), 0.0);

        cart.add_item(ItemId(404), 7);
        cart.add_item(ItemId(2), 1);
        assert_eq!(cart.total(), 150.0);
    }

    #[test]
    fn test_each_mutation_fires_hook_once() {
        let (mut cart, calls) = counted_cart();

        cart.add_item(ItemId(1), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        cart.update_quantity(ItemId(1), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        cart.update_quantity(ItemId(1), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        cart.remove_item(ItemId(1));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        cart.clear();
        assert_eq!(calls.load(Ordering::SeqCst), 5);

        cart.total();
        cart.item_price(ItemId(1));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_hook_can_be_swapped_and_removed() {
        let (mut cart, first) = counted_cart();
        let second = Arc::new(AtomicUsize::new(0));
        let counter = second.clone();
        cart.set_display_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        cart.add_one(ItemId(2));
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);

        cart.clear_display_hook();
        cart.add_one(ItemId(2));
        cart.clear();
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_order_request_lists_lines_by_id() {
        let mut cart = CartLedger::new(MenuCatalog::default_menu());
        cart.add_item(ItemId(4), 1);
        cart.add_item(ItemId(1), 2);

        let request = cart.to_order_request("Flat 2B, Indiranagar");
        assert_eq!(
            request.cart,
            vec![
                CartLine {
                    item_id: ItemId(1),
                    quantity: 2,
                },
                CartLine {
                    item_id: ItemId(4),
                    quantity: 1,
                },
            ]
        );
        assert_eq!(request.address, "Flat 2B, Indiranagar");
    }
}
