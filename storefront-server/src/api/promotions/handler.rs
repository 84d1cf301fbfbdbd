//! Promotion API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Promotion, PromotionUpsert};

use crate::auth::{CurrentUser, require_admin};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/promotions - browse promotions
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Promotion>>> {
    Ok(Json(state.catalog.promotions()))
}

/// POST /api/promotions - create a promotion (admin)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PromotionUpsert>,
) -> AppResult<Json<Promotion>> {
    require_admin(&user)?;
    let promo = state.catalog.upsert_promotion(None, payload)?;
    Ok(Json(promo))
}

/// PUT /api/promotions/:id - upsert a promotion by id (admin)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<PromotionUpsert>,
) -> AppResult<Json<Promotion>> {
    require_admin(&user)?;
    let promo = state.catalog.upsert_promotion(Some(id), payload)?;
    Ok(Json(promo))
}

/// DELETE /api/promotions/:id - remove a promotion (admin)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    require_admin(&user)?;
    Ok(Json(state.catalog.delete_promotion(id)))
}
