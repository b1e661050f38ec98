//! Authentication handlers

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::extractors::Caller;
use super::identity::auth_status;
use super::models::{AuthStatus, SyncResponse, User};
use crate::common::{ApiError, AppState};

/// GET /api/auth/status
///
/// # Response
/// ```json
/// { "is_authenticated": true, "user_id": "user_2abc" }
/// ```
pub async fn auth_status_handler(caller: Caller) -> Json<AuthStatus> {
    Json(auth_status(caller.identity()))
}

/// POST /api/auth/sync
/// Creates or refreshes the caller's local user record
pub async fn sync_user_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
) -> Result<Json<SyncResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let user_id = state.identity_service().sync_user(caller.identity()).await?;

    info!(user_id = %user_id, "User synced");

    Ok(Json(SyncResponse { user_id }))
}

/// GET /api/me
/// Returns the caller's stored user record
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    caller: Caller,
) -> Result<Json<User>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = state.identity_service().get_user(caller.identity()).await?;

    Ok(Json(user))
}
