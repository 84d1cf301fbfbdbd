//! Catalog store implementation

use std::sync::Arc;

use parking_lot::RwLock;
use shared::error::ErrorCode;
use shared::models::{MenuItem, MenuItemUpsert, Promotion, PromotionUpsert};

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Image used when an item is created without one
pub const DEFAULT_ITEM_IMAGE: &str = "https://images.unsplash.com/photo-1681495511907-fb445d988128?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// Rating assigned to newly created items
const DEFAULT_ITEM_RATING: f64 = 4.5;

/// In-memory catalog of menu items and promotions
///
/// Process-wide state owned by the application root. Both collections
/// are append/replace/delete-only through the admin operations below;
/// reads hand out snapshots.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    menu_items: Arc<RwLock<Vec<MenuItem>>>,
    promotions: Arc<RwLock<Vec<Promotion>>>,
}

/// Empty optional display fields normalize to absent
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with initial collections
    pub fn with_initial(menu_items: Vec<MenuItem>, promotions: Vec<Promotion>) -> Self {
        Self {
            menu_items: Arc::new(RwLock::new(menu_items)),
            promotions: Arc::new(RwLock::new(promotions)),
        }
    }

    // ========== Menu items ==========

    /// Snapshot of all menu items
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.menu_items.read().clone()
    }

    /// Look up a single menu item
    pub fn menu_item(&self, id: i64) -> Option<MenuItem> {
        self.menu_items.read().iter().find(|i| i.id == id).cloned()
    }

    /// Create or replace a menu item (whole-record upsert keyed by id).
    ///
    /// An existing id replaces that item's fields in place, preserving
    /// its id and rating. A missing or previously-unseen id appends a
    /// new item whose id is max(existing)+1 — whatever id the caller
    /// supplied is ignored.
    pub fn upsert_menu_item(
        &self,
        id: Option<i64>,
        payload: MenuItemUpsert,
    ) -> AppResult<MenuItem> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
        if payload.unit_price <= 0.0 {
            return Err(AppError::new(ErrorCode::MenuItemInvalidPrice)
                .with_detail("unit_price", payload.unit_price));
        }

        let mut items = self.menu_items.write();

        match id.and_then(|id| items.iter().position(|i| i.id == id)) {
            Some(pos) => {
                let item = &mut items[pos];
                item.name = payload.name;
                item.description = payload.description;
                item.unit_price = payload.unit_price;
                item.category = payload.category;
                item.ingredients = payload.ingredients;
                if let Some(image) = normalize(payload.image) {
                    item.image = image;
                }

                tracing::info!(item_id = item.id, name = %item.name, "Menu item updated");
                Ok(item.clone())
            }
            None => {
                let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
                let item = MenuItem {
                    id,
                    name: payload.name,
                    description: payload.description,
                    unit_price: payload.unit_price,
                    image: normalize(payload.image)
                        .unwrap_or_else(|| DEFAULT_ITEM_IMAGE.to_string()),
                    category: payload.category,
                    rating: DEFAULT_ITEM_RATING,
                    ingredients: payload.ingredients,
                };

                items.push(item.clone());
                tracing::info!(item_id = id, name = %item.name, "Menu item created");
                Ok(item)
            }
        }
    }

    /// Remove a menu item by id; returns whether anything was removed.
    pub fn delete_menu_item(&self, id: i64) -> bool {
        let mut items = self.menu_items.write();
        let before = items.len();
        items.retain(|i| i.id != id);
        let removed = items.len() < before;

        if removed {
            tracing::info!(item_id = id, "Menu item deleted");
        }
        removed
    }

    // ========== Promotions ==========

    /// Snapshot of all promotions
    pub fn promotions(&self) -> Vec<Promotion> {
        self.promotions.read().clone()
    }

    /// Create or replace a promotion (whole-record upsert keyed by id).
    ///
    /// Same id semantics as menu items; empty optional display fields
    /// normalize to absent.
    pub fn upsert_promotion(
        &self,
        id: Option<i64>,
        payload: PromotionUpsert,
    ) -> AppResult<Promotion> {
        validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
        validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
        for (value, field) in [
            (&payload.days, "days"),
            (&payload.hours, "hours"),
            (&payload.price_label, "price_label"),
            (&payload.savings_label, "savings_label"),
        ] {
            if let Some(v) = value
                && v.len() > MAX_SHORT_TEXT_LEN
            {
                return Err(AppError::validation(format!("{field} is too long")));
            }
        }

        let mut promotions = self.promotions.write();

        match id.and_then(|id| promotions.iter().position(|p| p.id == id)) {
            Some(pos) => {
                let promo = &mut promotions[pos];
                promo.title = payload.title;
                promo.description = payload.description;
                promo.days = normalize(payload.days);
                promo.hours = normalize(payload.hours);
                promo.price_label = normalize(payload.price_label);
                promo.savings_label = normalize(payload.savings_label);
                promo.restrictions = normalize(payload.restrictions);

                tracing::info!(promotion_id = promo.id, title = %promo.title, "Promotion updated");
                Ok(promo.clone())
            }
            None => {
                let id = promotions.iter().map(|p| p.id).max().unwrap_or(0) + 1;
                let promo = Promotion {
                    id,
                    title: payload.title,
                    description: payload.description,
                    days: normalize(payload.days),
                    hours: normalize(payload.hours),
                    price_label: normalize(payload.price_label),
                    savings_label: normalize(payload.savings_label),
                    restrictions: normalize(payload.restrictions),
                };

                promotions.push(promo.clone());
                tracing::info!(promotion_id = id, title = %promo.title, "Promotion created");
                Ok(promo)
            }
        }
    }

    /// Remove a promotion by id; returns whether anything was removed.
    pub fn delete_promotion(&self, id: i64) -> bool {
        let mut promotions = self.promotions.write();
        let before = promotions.len();
        promotions.retain(|p| p.id != id);
        let removed = promotions.len() < before;

        if removed {
            tracing::info!(promotion_id = id, "Promotion deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed_menu_items, seed_promotions};
    use shared::models::MenuCategory;

    fn seeded() -> CatalogStore {
        CatalogStore::with_initial(seed_menu_items(), seed_promotions())
    }

    fn item_payload(name: &str, price: f64) -> MenuItemUpsert {
        MenuItemUpsert {
            name: name.to_string(),
            description: "Una pizza de prueba".to_string(),
            unit_price: price,
            image: None,
            category: MenuCategory::Classic,
            ingredients: vec!["Queso".to_string()],
        }
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let store = seeded();
        let item = store
            .upsert_menu_item(None, item_payload("Pizza Norteña", 199.0))
            .expect("create should succeed");

        assert_eq!(item.id, 7);
        assert_eq!(item.rating, DEFAULT_ITEM_RATING);
        assert_eq!(item.image, DEFAULT_ITEM_IMAGE);
        assert_eq!(store.menu_items().len(), 7);
    }

    #[test]
    fn test_create_after_delete_follows_counting_rule() {
        let store = seeded();
        assert!(store.delete_menu_item(6));

        // max existing id is now 5, so the next item takes 6 again
        let item = store
            .upsert_menu_item(None, item_payload("Pizza Nueva", 120.0))
            .expect("create should succeed");
        assert_eq!(item.id, 6);
    }

    #[test]
    fn test_update_preserves_id_and_rating() {
        let store = seeded();
        let before = store.menu_item(1).expect("seeded item");

        let updated = store
            .upsert_menu_item(Some(1), item_payload("Pizza Jarocha 2.0", 205.0))
            .expect("update should succeed");

        assert_eq!(updated.id, 1);
        assert_eq!(updated.rating, before.rating);
        assert_eq!(updated.name, "Pizza Jarocha 2.0");
        assert_eq!(updated.unit_price, 205.0);
        // empty image keeps the existing one
        assert_eq!(updated.image, before.image);
    }

    #[test]
    fn test_upsert_unseen_id_appends_ignoring_supplied_id() {
        let store = seeded();
        let item = store
            .upsert_menu_item(Some(99), item_payload("Pizza Nueva", 100.0))
            .expect("upsert should append");

        // replace-or-append: the unseen id is ignored, max+1 is assigned
        assert_eq!(item.id, 7);
        assert_eq!(store.menu_items().len(), 7);
    }

    #[test]
    fn test_upsert_rejects_invalid_fields() {
        let store = seeded();

        let err = store
            .upsert_menu_item(None, item_payload("", 100.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = store
            .upsert_menu_item(None, item_payload("Pizza", 0.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);

        let err = store
            .upsert_menu_item(None, item_payload("Pizza", -5.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }

    #[test]
    fn test_delete_is_unconditional() {
        let store = seeded();
        assert!(store.delete_menu_item(3));
        assert!(!store.delete_menu_item(3));
        assert!(store.menu_item(3).is_none());
    }

    #[test]
    fn test_promotion_upsert_normalizes_blank_fields() {
        let store = seeded();
        let promo = store
            .upsert_promotion(
                None,
                PromotionUpsert {
                    title: "Jueves Pozolero".to_string(),
                    description: "Pizza + pozole".to_string(),
                    days: Some("Jueves".to_string()),
                    hours: Some("   ".to_string()),
                    price_label: Some(String::new()),
                    savings_label: None,
                    restrictions: None,
                },
            )
            .expect("create should succeed");

        assert_eq!(promo.id, 4);
        assert_eq!(promo.days.as_deref(), Some("Jueves"));
        assert!(promo.hours.is_none());
        assert!(promo.price_label.is_none());
    }

    #[test]
    fn test_promotion_requires_title_and_description() {
        let store = seeded();
        let err = store
            .upsert_promotion(
                None,
                PromotionUpsert {
                    title: String::new(),
                    description: "desc".to_string(),
                    days: None,
                    hours: None,
                    price_label: None,
                    savings_label: None,
                    restrictions: None,
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_promotion_update_and_delete() {
        let store = seeded();
        let updated = store
            .upsert_promotion(
                Some(2),
                PromotionUpsert {
                    title: "Combo Familiar XL".to_string(),
                    description: "3 pizzas grandes + refresco".to_string(),
                    days: None,
                    hours: None,
                    price_label: Some("$599".to_string()),
                    savings_label: None,
                    restrictions: None,
                },
            )
            .expect("update should succeed");

        assert_eq!(updated.id, 2);
        assert_eq!(updated.price_label.as_deref(), Some("$599"));

        assert!(store.delete_promotion(2));
        assert_eq!(store.promotions().len(), 2);
    }
}
