//! Promotion Model

use serde::{Deserialize, Serialize};

/// Promotion entity
///
/// The optional fields are display strings shown on the catalog page;
/// absent fields are simply not rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Applicable days, e.g. "Martes"
    pub days: Option<String>,
    /// Applicable hours, e.g. "5:00 PM - 7:00 PM"
    pub hours: Option<String>,
    /// Display price, e.g. "$499"
    pub price_label: Option<String>,
    /// Display savings, e.g. "Ahorra $150"
    pub savings_label: Option<String>,
    pub restrictions: Option<String>,
}

/// Upsert promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionUpsert {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub days: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub price_label: Option<String>,
    #[serde(default)]
    pub savings_label: Option<String>,
    #[serde(default)]
    pub restrictions: Option<String>,
}
