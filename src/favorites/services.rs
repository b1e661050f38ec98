// src/favorites/services.rs

use sqlx::SqlitePool;
use tracing::{error, info};

use crate::auth::Identity;
use crate::common::ApiError;
use crate::quotes::Quote;

pub struct FavoritesService {
    db: SqlitePool,
}

impl FavoritesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Flip the caller's favorite edge for `quote_id` and return the new state.
    ///
    /// Runs in one transaction; the unique (user_id, quote_id) index keeps at
    /// most one edge even when toggles race.
    pub async fn toggle_favorite(
        &self,
        caller: Option<&Identity>,
        quote_id: i64,
    ) -> Result<bool, ApiError> {
        let identity =
            caller.ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;
        let user_id = identity.external_id.as_str();

        let mut tx = self.db.begin().await.map_err(ApiError::DatabaseError)?;

        // Write first so SQLite takes the write lock up front
        let deleted = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND quote_id = ?")
            .bind(user_id)
            .bind(quote_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, quote_id = quote_id, "Failed to remove favorite");
                ApiError::DatabaseError(e)
            })?
            .rows_affected();

        let favorited = if deleted > 0 {
            false
        } else {
            let quote_exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM quotes WHERE id = ?")
                .bind(quote_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(ApiError::DatabaseError)?;

            if quote_exists.is_none() {
                return Err(ApiError::NotFound("Quote not found".to_string()));
            }

            sqlx::query(
                r#"
                INSERT INTO favorites (user_id, quote_id, created_at)
                VALUES (?, ?, datetime('now'))
                ON CONFLICT(user_id, quote_id) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(quote_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, quote_id = quote_id, "Failed to add favorite");
                ApiError::DatabaseError(e)
            })?;

            true
        };

        tx.commit().await.map_err(ApiError::DatabaseError)?;

        info!(user_id = %user_id, quote_id = quote_id, favorited = favorited, "Favorite toggled");

        Ok(favorited)
    }

    /// The caller's favorite quotes, newest favorite first
    pub async fn get_user_favorites(
        &self,
        caller: Option<&Identity>,
    ) -> Result<Vec<Quote>, ApiError> {
        let identity =
            caller.ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;

        sqlx::query_as::<_, Quote>(
            r#"
            SELECT q.id, q.text, q.author
            FROM favorites f
            INNER JOIN quotes q ON f.quote_id = q.id
            WHERE f.user_id = ?
            ORDER BY f.created_at DESC, f.id DESC
            "#,
        )
        .bind(&identity.external_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %identity.external_id, "Failed to fetch favorites");
            ApiError::DatabaseError(e)
        })
    }

    pub async fn is_favorite(&self, user_id: &str, quote_id: i64) -> Result<bool, ApiError> {
        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM favorites WHERE user_id = ? AND quote_id = ? LIMIT 1")
                .bind(user_id)
                .bind(quote_id)
                .fetch_optional(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        Ok(existing.is_some())
    }

    pub async fn favorite_quote_ids(&self, user_id: &str) -> Result<Vec<i64>, ApiError> {
        let rows: Vec<(i64,)> = sqlx::query_as("SELECT quote_id FROM favorites WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
