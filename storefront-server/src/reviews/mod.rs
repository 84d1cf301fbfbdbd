//! Review board
//!
//! Customer reviews with a derived average rating. Seeded with fixed
//! initial data; new reviews are prepended so the newest shows first.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::error::ErrorCode;
use shared::models::{Review, ReviewBoardView, ReviewCreate};
use shared::util::now_millis;

use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// In-memory review board
#[derive(Debug, Clone, Default)]
pub struct ReviewBoard {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with the initial reviews
    pub fn seeded() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(seed_reviews())),
        }
    }

    /// Add a review from the named author.
    ///
    /// Rating must be 1–5 and the comment non-blank; the new review is
    /// prepended with id = count + 1.
    pub fn add(&self, author: &str, payload: ReviewCreate) -> AppResult<Review> {
        if !(1..=5).contains(&payload.rating) {
            return Err(
                AppError::new(ErrorCode::ReviewInvalidRating).with_detail("rating", payload.rating)
            );
        }
        validate_required_text(&payload.comment, "comment", MAX_NOTE_LEN)?;
        validate_required_text(author, "author", MAX_NAME_LEN)?;

        let mut reviews = self.reviews.write();
        let review = Review {
            id: reviews.len() as i64 + 1,
            author: author.to_string(),
            rating: payload.rating,
            comment: payload.comment,
            item_name: payload.item_name.filter(|n| !n.trim().is_empty()),
            created_at: now_millis(),
        };
        reviews.insert(0, review.clone());

        tracing::info!(review_id = review.id, rating = review.rating, "Review added");
        Ok(review)
    }

    /// Snapshot of all reviews, newest first
    pub fn list(&self) -> Vec<Review> {
        self.reviews.read().clone()
    }

    /// Average rating across all reviews (0.0 when empty)
    pub fn average_rating(&self) -> f64 {
        let reviews = self.reviews.read();
        if reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        f64::from(sum) / reviews.len() as f64
    }

    /// Board view: reviews plus the derived average
    pub fn view(&self) -> ReviewBoardView {
        ReviewBoardView {
            reviews: self.list(),
            average_rating: self.average_rating(),
        }
    }
}

/// Seed reviews, dated relative to startup
fn seed_reviews() -> Vec<Review> {
    let now = now_millis();
    let entries: [(&str, u8, &str, &str, i64); 6] = [
        (
            "María González",
            5,
            "¡La Pizza Jarocha Especial es deliciosa! Los jalapeños le dan un toque perfecto. Excelente servicio y entrega rápida.",
            "Pizza Jarocha Especial",
            1,
        ),
        (
            "Carlos Ramírez",
            5,
            "La mejor pizza de Veracruz sin duda. La Veracruzana con mariscos está increíble, muy fresca y con buen sabor. Totalmente recomendada.",
            "Pizza Veracruzana",
            2,
        ),
        (
            "Ana Martínez",
            4,
            "Muy buena pizza, la masa está perfecta. Solo me gustaría que agregaran más opciones vegetarianas.",
            "Pizza Vegetariana",
            3,
        ),
        (
            "Roberto Sánchez",
            5,
            "Pedimos la Pizza Mexicana para una reunión familiar y todos quedaron encantados. El sabor es auténtico y las porciones son generosas.",
            "Pizza Mexicana",
            4,
        ),
        (
            "Laura Pérez",
            5,
            "Servicio excelente y pizza deliciosa. La Hawaiana tiene el equilibrio perfecto entre dulce y salado. ¡Volveré a ordenar!",
            "Pizza Hawaiana Tropical",
            5,
        ),
        (
            "Diego Torres",
            4,
            "Buena calidad-precio. La pizza llegó caliente y bien empacada. El queso manchego le da un sabor único.",
            "Pizza Pepperoni",
            7,
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(idx, (author, rating, comment, item, days_ago))| Review {
            id: idx as i64 + 1,
            author: author.to_string(),
            rating: *rating,
            comment: comment.to_string(),
            item_name: Some(item.to_string()),
            created_at: now - days_ago * DAY_MS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8, comment: &str) -> ReviewCreate {
        ReviewCreate {
            rating,
            comment: comment.to_string(),
            item_name: None,
        }
    }

    #[test]
    fn test_add_prepends_review() {
        let board = ReviewBoard::seeded();
        let added = board
            .add("Usuario Actual", review(5, "¡Excelente!"))
            .expect("review should be added");

        assert_eq!(added.id, 7);
        let all = board.list();
        assert_eq!(all.first().map(|r| r.id), Some(7));
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_rating_bounds_enforced() {
        let board = ReviewBoard::new();

        let err = board.add("Ana", review(0, "mala")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReviewInvalidRating);

        let err = board.add("Ana", review(6, "demasiado buena")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReviewInvalidRating);

        assert!(board.add("Ana", review(1, "regular")).is_ok());
        assert!(board.add("Ana", review(5, "excelente")).is_ok());
    }

    #[test]
    fn test_blank_comment_rejected() {
        let board = ReviewBoard::new();
        let err = board.add("Ana", review(4, "   ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_average_rating() {
        let board = ReviewBoard::new();
        assert_eq!(board.average_rating(), 0.0);

        board.add("Ana", review(4, "buena")).expect("added");
        board.add("Luis", review(5, "excelente")).expect("added");

        assert_eq!(board.average_rating(), 4.5);
    }

    #[test]
    fn test_seeded_board_matches_initial_data() {
        let board = ReviewBoard::seeded();
        let all = board.list();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].author, "María González");
        assert!((board.average_rating() - 28.0 / 6.0).abs() < 1e-9);
    }
}
