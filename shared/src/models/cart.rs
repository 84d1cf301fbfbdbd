//! Cart Model

use serde::{Deserialize, Serialize};

/// One line of a cart: a menu item selection with quantity
///
/// At most one line exists per item id; repeated adds merge quantities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub item_id: i64,
    pub name: String,
    /// Price in currency unit
    pub unit_price: f64,
    pub quantity: u32,
}

/// Derived cart totals
///
/// Never stored; recomputed from the lines on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub total: f64,
}

/// Read-only cart view returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    /// Total item count across lines (header badge)
    pub item_count: u32,
}

/// Add-to-cart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartAdd {
    pub item_id: i64,
    pub quantity: u32,
}

/// Set-quantity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSetQuantity {
    pub quantity: i64,
}
