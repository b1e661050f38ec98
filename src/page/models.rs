// src/page/models.rs

use serde::{Deserialize, Serialize};

use crate::quotes::Quote;

#[derive(Serialize, Debug, PartialEq)]
pub struct PageModel {
    pub user_id: Option<String>,
    pub favorites: Vec<Quote>,
    pub is_authenticated: bool,
}

impl PageModel {
    /// What an anonymous visitor, or a failed render, sees
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            favorites: Vec::new(),
            is_authenticated: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    /// Quote id to toggle before rendering
    pub fav: Option<String>,
}
