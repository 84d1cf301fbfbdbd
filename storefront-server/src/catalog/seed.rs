//! Initial catalog data
//!
//! The storefront has no persistent store; collections are seeded from
//! fixed initial data and live only for the process lifetime.

use shared::models::{MenuCategory, MenuItem, Promotion};

use super::store::DEFAULT_ITEM_IMAGE;

/// Seed menu items
pub fn seed_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Pizza Jarocha Especial".to_string(),
            description: "Nuestra receta tradicional con queso manchego, jalapeños y salsa secreta"
                .to_string(),
            unit_price: 189.0,
            image: DEFAULT_ITEM_IMAGE.to_string(),
            category: MenuCategory::Special,
            rating: 4.8,
            ingredients: vec![
                "Queso manchego".to_string(),
                "Jalapeños".to_string(),
                "Tomate".to_string(),
                "Cebolla".to_string(),
            ],
        },
        MenuItem {
            id: 2,
            name: "Pizza Veracruzana".to_string(),
            description: "Con mariscos frescos del puerto, camarones y pulpo".to_string(),
            unit_price: 249.0,
            image: DEFAULT_ITEM_IMAGE.to_string(),
            category: MenuCategory::Special,
            rating: 4.9,
            ingredients: vec![
                "Camarones".to_string(),
                "Pulpo".to_string(),
                "Queso".to_string(),
                "Ajo".to_string(),
            ],
        },
        MenuItem {
            id: 3,
            name: "Pizza Hawaiana Tropical".to_string(),
            description: "Piña, jamón y queso oaxaca derretido".to_string(),
            unit_price: 169.0,
            image: DEFAULT_ITEM_IMAGE.to_string(),
            category: MenuCategory::Classic,
            rating: 4.5,
            ingredients: vec![
                "Piña".to_string(),
                "Jamón".to_string(),
                "Queso oaxaca".to_string(),
                "Orégano".to_string(),
            ],
        },
        MenuItem {
            id: 4,
            name: "Pizza Mexicana".to_string(),
            description: "Chorizo, jalapeños, frijoles refritos y aguacate".to_string(),
            unit_price: 179.0,
            image: DEFAULT_ITEM_IMAGE.to_string(),
            category: MenuCategory::Special,
            rating: 4.7,
            ingredients: vec![
                "Chorizo".to_string(),
                "Jalapeños".to_string(),
                "Frijoles".to_string(),
                "Aguacate".to_string(),
            ],
        },
        MenuItem {
            id: 5,
            name: "Pizza Pepperoni".to_string(),
            description: "Clásica pizza con abundante pepperoni y queso".to_string(),
            unit_price: 159.0,
            image: DEFAULT_ITEM_IMAGE.to_string(),
            category: MenuCategory::Classic,
            rating: 4.6,
            ingredients: vec![
                "Pepperoni".to_string(),
                "Queso mozzarella".to_string(),
                "Orégano".to_string(),
            ],
        },
        MenuItem {
            id: 6,
            name: "Pizza Vegetariana".to_string(),
            description: "Vegetales frescos del mercado, champiñones y pimientos".to_string(),
            unit_price: 149.0,
            image: DEFAULT_ITEM_IMAGE.to_string(),
            category: MenuCategory::Vegetarian,
            rating: 4.4,
            ingredients: vec![
                "Champiñones".to_string(),
                "Pimientos".to_string(),
                "Cebolla".to_string(),
                "Aceitunas".to_string(),
            ],
        },
    ]
}

/// Seed promotions
pub fn seed_promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            id: 1,
            title: "Martes de 2x1".to_string(),
            description: "Compra una pizza grande y lleva otra del mismo tamaño gratis".to_string(),
            days: Some("Martes".to_string()),
            hours: None,
            price_label: None,
            savings_label: None,
            restrictions: Some("Aplica en pizzas seleccionadas".to_string()),
        },
        Promotion {
            id: 2,
            title: "Combo Familiar".to_string(),
            description: "2 pizzas grandes + 2 litros de refresco + orden de alitas".to_string(),
            days: None,
            hours: None,
            price_label: Some("$499".to_string()),
            savings_label: Some("Ahorra $150".to_string()),
            restrictions: None,
        },
        Promotion {
            id: 3,
            title: "Happy Hour".to_string(),
            description: "20% de descuento en pizzas medianas".to_string(),
            days: Some("Lunes a Viernes".to_string()),
            hours: Some("5:00 PM - 7:00 PM".to_string()),
            price_label: None,
            savings_label: None,
            restrictions: None,
        },
    ]
}
