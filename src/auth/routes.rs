//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /api/auth/status` - Whether the caller is authenticated
/// - `POST /api/auth/sync` - Mirror the provider profile into the users table
/// - `GET /api/me` - Get the caller's stored user record
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/status", get(handlers::auth_status_handler))
        .route("/api/auth/sync", post(handlers::sync_user_handler))
        .route("/api/me", get(handlers::me_handler))
}
