// src/preferences/services.rs

use sqlx::SqlitePool;
use tracing::{error, info};

use super::models::Preferences;
use crate::auth::Identity;
use crate::common::ApiError;

pub struct PreferencesService {
    db: SqlitePool,
}

impl PreferencesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Stored preferences, or the defaults when the caller has none
    pub async fn get_preferences(&self, caller: Option<&Identity>) -> Result<Preferences, ApiError> {
        let identity =
            caller.ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;

        let prefs = sqlx::query_as::<_, Preferences>(
            "SELECT dark_mode, updated_at FROM preferences WHERE user_id = ?",
        )
        .bind(&identity.external_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %identity.external_id, "Database error fetching preferences");
            ApiError::DatabaseError(e)
        })?;

        Ok(prefs.unwrap_or_default())
    }

    pub async fn set_dark_mode(
        &self,
        caller: Option<&Identity>,
        dark_mode: bool,
    ) -> Result<Preferences, ApiError> {
        let identity =
            caller.ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO preferences (user_id, dark_mode, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(user_id) DO UPDATE SET
                dark_mode = excluded.dark_mode,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&identity.external_id)
        .bind(dark_mode)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %identity.external_id, "Failed to update preferences");
            ApiError::DatabaseError(e)
        })?;

        info!(user_id = %identity.external_id, dark_mode = dark_mode, "Dark mode updated");

        self.get_preferences(Some(identity)).await
    }
}
