//! Review API Handlers

use axum::{Json, extract::State};
use shared::models::{Review, ReviewBoardView, ReviewCreate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/reviews - reviews with the derived average rating
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ReviewBoardView>> {
    Ok(Json(state.reviews.view()))
}

/// POST /api/reviews - add a review as the current user
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<Json<Review>> {
    let review = state.reviews.add(&user.name, payload)?;
    Ok(Json(review))
}
