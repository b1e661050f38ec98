// src/favorites/handlers.rs
//! Favorite toggling and listing

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{ToggleFavoriteRequest, ToggleFavoriteResponse};
use super::services::FavoritesService;
use super::validators::ToggleFavoriteValidator;
use crate::auth::Caller;
use crate::common::{ApiError, AppState, Validator};
use crate::quotes::Quote;

/// POST /api/favorites/toggle
///
/// # Request Body
/// ```json
/// { "quote_id": 7 }
/// ```
pub async fn toggle_favorite_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
    Json(payload): Json<ToggleFavoriteRequest>,
) -> Result<Json<ToggleFavoriteResponse>, ApiError> {
    let identity = caller
        .identity()
        .ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;

    ToggleFavoriteValidator.validate(&payload).into_result()?;

    let state = state_lock.read().await.clone();

    let favorited = FavoritesService::new(state.db)
        .toggle_favorite(Some(identity), payload.quote_id)
        .await?;

    Ok(Json(ToggleFavoriteResponse {
        quote_id: payload.quote_id,
        favorited,
    }))
}

/// GET /api/favorites
pub async fn user_favorites_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let state = state_lock.read().await.clone();

    let favorites = FavoritesService::new(state.db)
        .get_user_favorites(caller.identity())
        .await?;

    Ok(Json(favorites))
}
