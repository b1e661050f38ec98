// src/quotes/routes.rs

use axum::{routing::get, Router};

use super::handlers;

pub fn quotes_routes() -> Router {
    Router::new()
        .route("/api/quotes", get(handlers::all_quotes_handler))
        .route("/api/quotes/random", get(handlers::random_quote_handler))
}
