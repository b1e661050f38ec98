// src/preferences/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub updated_at: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            updated_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub dark_mode: bool,
}
