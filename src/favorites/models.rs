// src/favorites/models.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub quote_id: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ToggleFavoriteResponse {
    pub quote_id: i64,
    /// State after the toggle
    pub favorited: bool,
}
