// src/page/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn page_routes() -> Router {
    Router::new()
        .route("/api/page", get(handlers::page_handler))
        .route("/health", get(handlers::health_handler))
}
