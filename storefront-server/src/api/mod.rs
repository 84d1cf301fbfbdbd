//! API routing module
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`auth`] - login, logout, session introspection
//! - [`menu`] - menu browsing and admin management
//! - [`promotions`] - promotion browsing and admin management
//! - [`cart`] - the customer's cart
//! - [`orders`] - checkout, order triage, message threads
//! - [`reviews`] - customer reviews

pub mod auth;
pub mod cart;
pub mod health;
pub mod menu;
pub mod orders;
pub mod promotions;
pub mod reviews;

use axum::Router;

use crate::core::ServerState;

/// Compose every resource router and attach the server state
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(menu::router())
        .merge(promotions::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(reviews::router())
        .with_state(state)
}
