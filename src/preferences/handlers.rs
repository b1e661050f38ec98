// src/preferences/handlers.rs

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{Preferences, UpdatePreferencesRequest};
use super::services::PreferencesService;
use crate::auth::Caller;
use crate::common::{ApiError, AppState};

/// GET /api/preferences
pub async fn get_preferences_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
) -> Result<Json<Preferences>, ApiError> {
    let state = state_lock.read().await.clone();

    let prefs = PreferencesService::new(state.db)
        .get_preferences(caller.identity())
        .await?;

    Ok(Json(prefs))
}

/// PUT /api/preferences
///
/// # Request Body
/// ```json
/// { "dark_mode": true }
/// ```
pub async fn update_preferences_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
    Json(payload): Json<UpdatePreferencesRequest>,
) -> Result<Json<Preferences>, ApiError> {
    let state = state_lock.read().await.clone();

    let prefs = PreferencesService::new(state.db)
        .set_dark_mode(caller.identity(), payload.dark_mode)
        .await?;

    Ok(Json(prefs))
}
