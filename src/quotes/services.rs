// src/quotes/services.rs

use sqlx::SqlitePool;
use std::collections::HashSet;
use tracing::{debug, error};

use super::models::{Quote, QuoteResponse};
use crate::auth::Identity;
use crate::common::ApiError;
use crate::favorites::FavoritesService;

pub struct QuotesService {
    db: SqlitePool,
}

impl QuotesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// One quote picked uniformly at random by the database.
    /// `None` when there are no quotes.
    pub async fn fetch_random_quote(
        &self,
        caller: Option<&Identity>,
    ) -> Result<Option<QuoteResponse>, ApiError> {
        let quote = sqlx::query_as::<_, Quote>(
            "SELECT id, text, author FROM quotes ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching random quote");
            ApiError::DatabaseError(e)
        })?;

        let quote = match quote {
            Some(q) => q,
            None => {
                debug!("Quote table is empty");
                return Ok(None);
            }
        };

        let is_favorite = match caller {
            Some(identity) => Some(
                FavoritesService::new(self.db.clone())
                    .is_favorite(&identity.external_id, quote.id)
                    .await?,
            ),
            None => None,
        };

        Ok(Some(QuoteResponse::new(quote, is_favorite)))
    }

    /// Every quote by id, annotated for authenticated callers
    pub async fn get_all_quotes(
        &self,
        caller: Option<&Identity>,
    ) -> Result<Vec<QuoteResponse>, ApiError> {
        let quotes = sqlx::query_as::<_, Quote>("SELECT id, text, author FROM quotes ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error fetching quotes");
                ApiError::DatabaseError(e)
            })?;

        let identity = match caller {
            Some(identity) => identity,
            None => return Ok(quotes.into_iter().map(QuoteResponse::from).collect()),
        };

        let favorite_ids: HashSet<i64> = FavoritesService::new(self.db.clone())
            .favorite_quote_ids(&identity.external_id)
            .await?
            .into_iter()
            .collect();

        Ok(quotes
            .into_iter()
            .map(|quote| {
                let is_favorite = favorite_ids.contains(&quote.id);
                QuoteResponse::new(quote, Some(is_favorite))
            })
            .collect())
    }
}
