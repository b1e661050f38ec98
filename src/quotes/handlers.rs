// src/quotes/handlers.rs

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::QuoteResponse;
use super::services::QuotesService;
use crate::auth::Caller;
use crate::common::{ApiError, AppState};

/// GET /api/quotes/random
/// Responds with `null` when no quotes exist
pub async fn random_quote_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
) -> Result<Json<Option<QuoteResponse>>, ApiError> {
    let state = state_lock.read().await.clone();

    let quote = QuotesService::new(state.db)
        .fetch_random_quote(caller.identity())
        .await?;

    Ok(Json(quote))
}

/// GET /api/quotes
pub async fn all_quotes_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
) -> Result<Json<Vec<QuoteResponse>>, ApiError> {
    let state = state_lock.read().await.clone();

    let quotes = QuotesService::new(state.db)
        .get_all_quotes(caller.identity())
        .await?;

    Ok(Json(quotes))
}
