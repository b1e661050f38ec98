//! Tests for quotes module
//!
//! These tests verify:
//! - Random quote selection, including the empty table
//! - Favorite annotation for authenticated callers
//! - Response serialization

#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashSet;

    use crate::common::test_support::{empty_pool, identity, seeded_pool};
    use crate::favorites::FavoritesService;

    const QUOTES: &[(&str, &str)] = &[
        ("Happiness depends upon ourselves.", "Aristotle"),
        ("Dream big and dare to fail.", "Norman Vaughan"),
        ("Start where you are. Use what you have. Do what you can.", "Arthur Ashe"),
    ];

    #[tokio::test]
    async fn test_random_quote_on_empty_table_is_none() {
        let service = QuotesService::new(empty_pool().await);

        assert!(service.fetch_random_quote(None).await.unwrap().is_none());
        assert!(service
            .fetch_random_quote(Some(&identity("user_a")))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_random_quote_eventually_returns_every_quote() {
        let service = QuotesService::new(seeded_pool(QUOTES).await);

        let mut seen = HashSet::new();
        for _ in 0..300 {
            let quote = service.fetch_random_quote(None).await.unwrap().unwrap();
            seen.insert(quote.id);
            if seen.len() == QUOTES.len() {
                break;
            }
        }

        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_random_quote_annotation() {
        let pool = seeded_pool(&QUOTES[..1]).await;
        let service = QuotesService::new(pool.clone());
        let reader = identity("user_reader");

        let anonymous = service.fetch_random_quote(None).await.unwrap().unwrap();
        assert_eq!(anonymous.is_favorite, None);

        let before = service.fetch_random_quote(Some(&reader)).await.unwrap().unwrap();
        assert_eq!(before.is_favorite, Some(false));

        FavoritesService::new(pool)
            .toggle_favorite(Some(&reader), 1)
            .await
            .unwrap();

        let after = service.fetch_random_quote(Some(&reader)).await.unwrap().unwrap();
        assert_eq!(after.id, 1);
        assert_eq!(after.is_favorite, Some(true));
    }

    #[tokio::test]
    async fn test_all_quotes_annotated_for_caller() {
        let pool = seeded_pool(QUOTES).await;
        let service = QuotesService::new(pool.clone());
        let reader = identity("user_reader");

        FavoritesService::new(pool)
            .toggle_favorite(Some(&reader), 2)
            .await
            .unwrap();

        let quotes = service.get_all_quotes(Some(&reader)).await.unwrap();
        let flags: Vec<(i64, Option<bool>)> = quotes.iter().map(|q| (q.id, q.is_favorite)).collect();
        assert_eq!(
            flags,
            vec![(1, Some(false)), (2, Some(true)), (3, Some(false))]
        );

        let anonymous = service.get_all_quotes(None).await.unwrap();
        assert_eq!(anonymous.len(), 3);
        assert!(anonymous.iter().all(|q| q.is_favorite.is_none()));
    }

    #[test]
    fn test_anonymous_response_omits_favorite_flag() {
        let quote = Quote {
            id: 1,
            text: "Dream big and dare to fail.".to_string(),
            author: "Norman Vaughan".to_string(),
        };

        let anonymous = serde_json::to_value(QuoteResponse::from(quote.clone())).unwrap();
        assert!(anonymous.get("is_favorite").is_none());

        let annotated = serde_json::to_value(QuoteResponse::new(quote, Some(true))).unwrap();
        assert_eq!(annotated["is_favorite"], serde_json::json!(true));
        assert_eq!(annotated["author"], serde_json::json!("Norman Vaughan"));
    }
}
