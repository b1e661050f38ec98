// src/page/handlers.rs

use axum::{
    extract::{Extension, Query},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use super::models::{PageModel, PageQuery};
use super::services::PageService;
use crate::auth::Caller;
use crate::common::{ApiError, AppState};
use crate::favorites::FavoritesService;

/// GET /api/page?fav=<quote id>
///
/// An invalid session token degrades to the anonymous page instead of a 401.
pub async fn page_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Result<Caller, ApiError>,
    Query(query): Query<PageQuery>,
) -> Json<PageModel> {
    let state = state_lock.read().await.clone();

    let caller = caller.unwrap_or_else(|e| {
        warn!(error = %e, "Caller resolution failed, rendering anonymous page");
        Caller::anonymous()
    });

    let page = PageService::new(state.identity_service(), FavoritesService::new(state.db.clone()))
        .render_page(caller.identity(), query.fav.as_deref())
        .await;

    Json(page)
}

/// GET /health
pub async fn health_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(Json(json!({ "status": "ok" })))
}
