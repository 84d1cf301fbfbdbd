//! Cart API Handlers
//!
//! All cart routes operate on the calling customer's own cart; there
//! are no error conditions beyond auth — invalid quantities are
//! clamped, unknown lines are no-ops.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ErrorCode;
use shared::models::{CartAdd, CartSetQuantity, CartView};

use crate::auth::{CurrentUser, require_customer};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/cart - the caller's cart with derived totals
pub async fn view(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<CartView>> {
    require_customer(&user)?;
    Ok(Json(state.carts.view(&user.email)))
}

/// POST /api/cart/items - add a menu item to the cart
pub async fn add(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CartAdd>,
) -> AppResult<Json<CartView>> {
    require_customer(&user)?;

    let item = state.catalog.menu_item(payload.item_id).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::MenuItemNotFound,
            format!("Menu item {} not found", payload.item_id),
        )
    })?;

    state.carts.add(&user.email, &item, payload.quantity);
    Ok(Json(state.carts.view(&user.email)))
}

/// PUT /api/cart/items/:id - set a line's quantity (zero removes it)
pub async fn set_quantity(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(item_id): Path<i64>,
    Json(payload): Json<CartSetQuantity>,
) -> AppResult<Json<CartView>> {
    require_customer(&user)?;
    state
        .carts
        .set_quantity(&user.email, item_id, payload.quantity);
    Ok(Json(state.carts.view(&user.email)))
}

/// DELETE /api/cart/items/:id - remove a line
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(item_id): Path<i64>,
) -> AppResult<Json<CartView>> {
    require_customer(&user)?;
    state.carts.remove(&user.email, item_id);
    Ok(Json(state.carts.view(&user.email)))
}

/// DELETE /api/cart - empty the cart
pub async fn clear(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<CartView>> {
    require_customer(&user)?;
    state.carts.clear(&user.email);
    Ok(Json(state.carts.view(&user.email)))
}
