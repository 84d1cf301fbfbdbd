//! Cart API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", cart_routes())
}

fn cart_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::view).delete(handler::clear))
        .route("/items", post(handler::add))
        .route(
            "/items/{id}",
            put(handler::set_quantity).delete(handler::remove),
        )
}
