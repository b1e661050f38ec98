// src/preferences/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn preferences_routes() -> Router {
    Router::new().route(
        "/api/preferences",
        get(handlers::get_preferences_handler).put(handlers::update_preferences_handler),
    )
}
