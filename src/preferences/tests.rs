//! Tests for preferences module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::{empty_pool, identity};
    use crate::common::ApiError;

    #[tokio::test]
    async fn test_defaults_to_light_mode() {
        let service = PreferencesService::new(empty_pool().await);

        let prefs = service.get_preferences(Some(&identity("user_a"))).await.unwrap();
        assert!(!prefs.dark_mode);
        assert!(prefs.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_set_dark_mode_upserts_single_row() {
        let pool = empty_pool().await;
        let service = PreferencesService::new(pool.clone());
        let reader = identity("user_a");

        let prefs = service.set_dark_mode(Some(&reader), true).await.unwrap();
        assert!(prefs.dark_mode);
        assert!(prefs.updated_at.is_some());

        let prefs = service.set_dark_mode(Some(&reader), false).await.unwrap();
        assert!(!prefs.dark_mode);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM preferences WHERE user_id = ?")
            .bind("user_a")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let other = service.get_preferences(Some(&identity("user_b"))).await.unwrap();
        assert!(!other.dark_mode);
    }

    #[tokio::test]
    async fn test_requires_authentication() {
        let service = PreferencesService::new(empty_pool().await);

        assert!(matches!(
            service.get_preferences(None).await,
            Err(ApiError::Unauthorized(_))
        ));
        assert!(matches!(
            service.set_dark_mode(None, true).await,
            Err(ApiError::Unauthorized(_))
        ));
    }
}
