// src/favorites/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn favorites_routes() -> Router {
    Router::new()
        .route("/api/favorites", get(handlers::user_favorites_handler))
        .route("/api/favorites/toggle", post(handlers::toggle_favorite_handler))
}
