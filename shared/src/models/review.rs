//! Review Model

use serde::{Deserialize, Serialize};

/// Customer review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub author: String,
    /// Star rating, 1–5
    pub rating: u8,
    pub comment: String,
    /// Reviewed item name; absent for general reviews
    pub item_name: Option<String>,
    pub created_at: i64,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub item_name: Option<String>,
}

/// Review board view: the reviews plus the derived average rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewBoardView {
    pub reviews: Vec<Review>,
    pub average_rating: f64,
}
