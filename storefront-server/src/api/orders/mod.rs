//! Orders API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_all).post(handler::checkout))
        .route("/mine", get(handler::list_mine))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/messages", post(handler::post_message))
        .route("/{id}/messages/read", post(handler::mark_read))
}
