// src/quotes/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: i64,
    pub text: String,
    pub author: String,
}

/// Quote annotated with the caller's favorite flag.
/// `is_favorite` is omitted for anonymous callers.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuoteResponse {
    pub id: i64,
    pub text: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl QuoteResponse {
    pub fn new(quote: Quote, is_favorite: Option<bool>) -> Self {
        Self {
            id: quote.id,
            text: quote.text,
            author: quote.author,
            is_favorite,
        }
    }
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        QuoteResponse::new(quote, None)
    }
}
