//! Promotions API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/promotions", promotion_routes())
}

fn promotion_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::put(handler::update).delete(handler::delete))
}
