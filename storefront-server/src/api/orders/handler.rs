//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    AdminOrderView, CheckoutRequest, Message, MessageAuthor, Order, OrderStatusUpdate,
    PostMessageRequest,
};

use crate::auth::{CurrentUser, require_admin, require_customer};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Orders are visible to their owner and to the administrator.
///
/// Unknown ids fall through untouched so the messaging routes keep
/// their silent no-op contract.
fn check_access(user: &CurrentUser, order: Option<&Order>) -> AppResult<()> {
    if let Some(order) = order
        && !user.is_admin
        && order.customer_id != user.email
    {
        return Err(AppError::forbidden("Order belongs to another customer"));
    }
    Ok(())
}

/// POST /api/orders - submit the caller's cart as an order (checkout)
pub async fn checkout(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<Order>> {
    require_customer(&user)?;

    let lines = state.carts.lines(&user.email);
    let order = state.orders.submit(&user, lines, payload)?;

    // The cart is owned by the session and empties on success
    state.carts.clear(&user.email);

    Ok(Json(order))
}

/// GET /api/orders - every order with unread badges (admin)
pub async fn list_all(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AdminOrderView>>> {
    require_admin(&user)?;
    Ok(Json(state.orders.admin_views()))
}

/// GET /api/orders/mine - the caller's own orders
pub async fn list_mine(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Order>>> {
    require_customer(&user)?;
    Ok(Json(state.orders.for_customer(&user.email)))
}

/// GET /api/orders/:id - one order (owner or admin)
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get(id);
    check_access(&user, order.as_ref())?;

    let order = order.ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;
    Ok(Json(order))
}

/// PUT /api/orders/:id/status - set the order status (admin)
///
/// The status is free-form: any target is accepted, including
/// reverting a delivered order.
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    require_admin(&user)?;
    let order = state.orders.set_status(id, payload.status)?;
    Ok(Json(order))
}

/// POST /api/orders/:id/messages - post to the order's thread
///
/// The author is derived from the session; unknown orders and blank
/// content are silent no-ops (the response carries no message).
pub async fn post_message(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<PostMessageRequest>,
) -> AppResult<Json<Option<Message>>> {
    check_access(&user, state.orders.get(id).as_ref())?;

    let author = if user.is_admin {
        MessageAuthor::Admin
    } else {
        MessageAuthor::Customer
    };

    Ok(Json(state.orders.post_message(id, author, &payload.content)))
}

/// POST /api/orders/:id/messages/read - mark the whole thread read
///
/// Invoked when a party opens the order's detail view.
pub async fn mark_read(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<()>> {
    check_access(&user, state.orders.get(id).as_ref())?;
    state.orders.mark_thread_read(id);
    Ok(Json(()))
}
