//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    #[default]
    Special,
    Classic,
    Vegetarian,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in currency unit
    pub unit_price: f64,
    /// Image reference (URL or opaque payload)
    pub image: String,
    pub category: MenuCategory,
    /// Customer rating, 0–5
    pub rating: f64,
    pub ingredients: Vec<String>,
}

/// Upsert menu item payload
///
/// Used for both create and update. On create the id is assigned by the
/// store; on update the addressed item's id and rating are preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpsert {
    pub name: String,
    pub description: String,
    /// Price in currency unit
    pub unit_price: f64,
    /// Empty or missing keeps the existing image (or the default on create)
    #[serde(default)]
    pub image: Option<String>,
    pub category: MenuCategory,
    #[serde(default)]
    pub ingredients: Vec<String>,
}
