//! Cart store
//!
//! Per-session carts keyed by customer email. Each mutation runs to
//! completion under the owning map shard's lock; totals are pure
//! derivations recomputed on every read, never stored.

use std::sync::Arc;

use dashmap::DashMap;
use shared::models::{CartLine, CartTotals, CartView, MenuItem};

/// Subtotal above which shipping is waived
pub const FREE_SHIPPING_THRESHOLD: f64 = 200.0;

/// Flat shipping fee in currency units
pub const SHIPPING_FEE: f64 = 30.0;

/// Derive totals from a set of cart lines.
///
/// subtotal = Σ(unit_price × quantity); shipping is waived only when the
/// subtotal strictly exceeds the threshold.
pub fn totals(lines: &[CartLine]) -> CartTotals {
    let subtotal: f64 = lines
        .iter()
        .map(|line| line.unit_price * f64::from(line.quantity))
        .sum();
    let shipping_fee = if subtotal > FREE_SHIPPING_THRESHOLD {
        0.0
    } else {
        SHIPPING_FEE
    };

    CartTotals {
        subtotal,
        shipping_fee,
        total: subtotal + shipping_fee,
    }
}

/// In-memory cart store
///
/// Owned by the application root; each cart belongs to one customer
/// session and is cleared on logout and on successful checkout.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    carts: Arc<DashMap<String, Vec<CartLine>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu item to a customer's cart.
    ///
    /// Quantities below 1 are clamped, not rejected. A line for an
    /// already-present item merges quantities instead of duplicating.
    pub fn add(&self, customer_id: &str, item: &MenuItem, quantity: u32) {
        let quantity = quantity.max(1);
        let mut cart = self.carts.entry(customer_id.to_string()).or_default();

        if let Some(line) = cart.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity += quantity;
        } else {
            cart.push(CartLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity,
            });
        }

        tracing::debug!(
            customer_id,
            item_id = item.id,
            quantity,
            "Item added to cart"
        );
    }

    /// Replace a line's quantity; a quantity of zero or less removes the line.
    pub fn set_quantity(&self, customer_id: &str, item_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(customer_id, item_id);
            return;
        }

        if let Some(mut cart) = self.carts.get_mut(customer_id)
            && let Some(line) = cart.iter_mut().find(|line| line.item_id == item_id)
        {
            line.quantity = quantity as u32;
        }
    }

    /// Delete a line if present; no-op otherwise.
    pub fn remove(&self, customer_id: &str, item_id: i64) {
        if let Some(mut cart) = self.carts.get_mut(customer_id) {
            cart.retain(|line| line.item_id != item_id);
        }
    }

    /// Empty a customer's cart.
    pub fn clear(&self, customer_id: &str) {
        self.carts.remove(customer_id);
    }

    /// Snapshot of a customer's cart lines.
    pub fn lines(&self, customer_id: &str) -> Vec<CartLine> {
        self.carts
            .get(customer_id)
            .map(|cart| cart.value().clone())
            .unwrap_or_default()
    }

    /// Read-only view with derived totals and item count.
    pub fn view(&self, customer_id: &str) -> CartView {
        let lines = self.lines(customer_id);
        let totals = totals(&lines);
        let item_count = lines.iter().map(|line| line.quantity).sum();

        CartView {
            lines,
            totals,
            item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MenuCategory;

    fn pizza(id: i64, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: "test".to_string(),
            unit_price: price,
            image: String::new(),
            category: MenuCategory::Special,
            rating: 4.5,
            ingredients: vec![],
        }
    }

    #[test]
    fn test_add_merges_lines_for_same_item() {
        let store = CartStore::new();
        let item = pizza(1, "Jarocha", 189.0);

        store.add("ana@example.com", &item, 1);
        store.add("ana@example.com", &item, 2);

        let lines = store.lines("ana@example.com");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn test_add_clamps_zero_quantity_to_one() {
        let store = CartStore::new();
        store.add("ana@example.com", &pizza(1, "Jarocha", 189.0), 0);

        let lines = store.lines("ana@example.com");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_replaces_value() {
        let store = CartStore::new();
        store.add("ana@example.com", &pizza(1, "Jarocha", 189.0), 2);
        store.set_quantity("ana@example.com", 1, 5);

        assert_eq!(store.lines("ana@example.com")[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let store = CartStore::new();
        store.add("ana@example.com", &pizza(1, "Jarocha", 189.0), 2);
        store.set_quantity("ana@example.com", 1, 0);

        assert!(store.lines("ana@example.com").is_empty());
    }

    #[test]
    fn test_remove_unknown_item_is_noop() {
        let store = CartStore::new();
        store.add("ana@example.com", &pizza(1, "Jarocha", 189.0), 1);
        store.remove("ana@example.com", 99);

        assert_eq!(store.lines("ana@example.com").len(), 1);
    }

    #[test]
    fn test_clear_empties_cart() {
        let store = CartStore::new();
        store.add("ana@example.com", &pizza(1, "Jarocha", 189.0), 1);
        store.add("ana@example.com", &pizza(2, "Veracruzana", 249.0), 1);
        store.clear("ana@example.com");

        assert!(store.lines("ana@example.com").is_empty());
    }

    #[test]
    fn test_carts_are_isolated_per_customer() {
        let store = CartStore::new();
        store.add("ana@example.com", &pizza(1, "Jarocha", 189.0), 1);

        assert!(store.lines("luis@example.com").is_empty());
    }

    #[test]
    fn test_totals_below_threshold_pays_shipping() {
        let lines = vec![CartLine {
            item_id: 1,
            name: "Jarocha".to_string(),
            unit_price: 189.0,
            quantity: 1,
        }];

        let t = totals(&lines);
        assert_eq!(t.subtotal, 189.0);
        assert_eq!(t.shipping_fee, SHIPPING_FEE);
        assert_eq!(t.total, 219.0);
    }

    #[test]
    fn test_totals_above_threshold_ships_free() {
        let lines = vec![CartLine {
            item_id: 2,
            name: "Veracruzana".to_string(),
            unit_price: 249.0,
            quantity: 1,
        }];

        let t = totals(&lines);
        assert_eq!(t.subtotal, 249.0);
        assert_eq!(t.shipping_fee, 0.0);
        assert_eq!(t.total, 249.0);
    }

    #[test]
    fn test_totals_at_exact_threshold_pays_shipping() {
        // The waiver requires strictly greater than the threshold
        let lines = vec![CartLine {
            item_id: 3,
            name: "Combo".to_string(),
            unit_price: 200.0,
            quantity: 1,
        }];

        let t = totals(&lines);
        assert_eq!(t.shipping_fee, SHIPPING_FEE);
        assert_eq!(t.total, 230.0);
    }

    #[test]
    fn test_view_counts_items_across_lines() {
        let store = CartStore::new();
        store.add("ana@example.com", &pizza(1, "Jarocha", 189.0), 2);
        store.add("ana@example.com", &pizza(2, "Veracruzana", 249.0), 1);

        let view = store.view("ana@example.com");
        assert_eq!(view.item_count, 3);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.totals.subtotal, 189.0 * 2.0 + 249.0);
    }
}
