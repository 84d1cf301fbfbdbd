//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ErrorCode;
use shared::models::{MenuItem, MenuItemUpsert};

use crate::auth::{CurrentUser, require_admin};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/menu - browse the menu
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.catalog.menu_items()))
}

/// GET /api/menu/:id - single menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = state.catalog.menu_item(id).ok_or_else(|| {
        AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {} not found", id))
    })?;
    Ok(Json(item))
}

/// POST /api/menu - create a menu item (admin)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MenuItemUpsert>,
) -> AppResult<Json<MenuItem>> {
    require_admin(&user)?;
    let item = state.catalog.upsert_menu_item(None, payload)?;
    Ok(Json(item))
}

/// PUT /api/menu/:id - upsert a menu item by id (admin)
///
/// Replace-or-append: an unseen id appends a new item with the next
/// assigned id instead of failing.
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpsert>,
) -> AppResult<Json<MenuItem>> {
    require_admin(&user)?;
    let item = state.catalog.upsert_menu_item(Some(id), payload)?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - remove a menu item (admin)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    require_admin(&user)?;
    Ok(Json(state.catalog.delete_menu_item(id)))
}
