//! Authentication Handlers
//!
//! Handles login, logout, and session introspection

use std::time::Duration;

use axum::{Json, extract::State};
use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login - authenticate and issue a session token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Fixed delay to prevent timing attacks on the admin credential pair
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = state.identity.authenticate(&req)?;

    let token = state
        .jwt_service
        .generate_token(&user.email, &user.name, &user.phone, user.is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    security_log!(
        "INFO",
        "login_success",
        email = user.email.clone(),
        is_admin = user.is_admin
    );
    tracing::info!(
        email = %user.email,
        is_admin = user.is_admin,
        "User logged in"
    );

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            name: user.name,
            email: user.email,
            phone: user.phone,
            is_admin: user.is_admin,
        },
    }))
}

/// POST /api/auth/logout - end the session
///
/// The cart belongs to the session, so it is cleared here; the token
/// itself simply expires (no server-side session list exists).
pub async fn logout(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<()>> {
    state.carts.clear(&user.email);

    tracing::info!(email = %user.email, "User logged out");
    Ok(Json(()))
}

/// GET /api/auth/me - current session profile
pub async fn me(user: CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        name: user.name,
        email: user.email,
        phone: user.phone,
        is_admin: user.is_admin,
    })
}
