// src/common/migrations.rs
//! Database schema management and quote seeding

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Built-in quotes inserted into an empty `quotes` table
pub const SEED_QUOTES: &[(&str, &str)] = &[
    ("The best way to predict the future is to create it.", "Peter Drucker"),
    ("In the middle of every difficulty lies opportunity.", "Albert Einstein"),
    ("What you do today can improve all your tomorrows.", "Ralph Marston"),
    ("Do what you can, with what you have, where you are.", "Theodore Roosevelt"),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    ("Happiness depends upon ourselves.", "Aristotle"),
    ("Act as if what you do makes a difference. It does.", "William James"),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
    ("Don’t let yesterday take up too much of today.", "Will Rogers"),
    (
        "Your time is limited, so don’t waste it living someone else’s life.",
        "Steve Jobs",
    ),
    ("If you want to lift yourself up, lift up someone else.", "Booker T. Washington"),
    ("I never dreamed about success. I worked for it.", "Estée Lauder"),
    ("Opportunities don't happen, you create them.", "Chris Grosser"),
    (
        "I am not a product of my circumstances. I am a product of my decisions.",
        "Stephen Covey",
    ),
    ("It does not matter how slowly you go as long as you do not stop.", "Confucius"),
    ("Hardships often prepare ordinary people for an extraordinary destiny.", "C.S. Lewis"),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    ("Everything you’ve ever wanted is on the other side of fear.", "George Addair"),
    ("Start where you are. Use what you have. Do what you can.", "Arthur Ashe"),
    ("Dream big and dare to fail.", "Norman Vaughan"),
];

/// Run all database migrations
///
/// Tables are created if missing. With `reset` every table is dropped first.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("⚠️  RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("✅ Dropped old tables");
    }

    create_tables(pool).await?;
    create_indexes(pool).await?;

    info!("✅ Database migration completed successfully!");

    Ok(())
}

/// Insert the built-in quotes when the table is empty.
/// Returns the number of inserted rows.
pub async fn seed_quotes(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        info!(existing = existing, "Quotes already present, skipping seed");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for (text, author) in SEED_QUOTES {
        sqlx::query("INSERT INTO quotes (text, author) VALUES (?, ?)")
            .bind(text)
            .bind(author)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    info!(count = SEED_QUOTES.len(), "Quotes seeded");

    Ok(SEED_QUOTES.len() as u64)
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Reverse dependency order
    let tables = vec!["preferences", "favorites", "quotes", "users"];

    for table in tables {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }

    Ok(())
}

async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Local mirror of identity provider users, keyed by the provider's id
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            clerk_id TEXT NOT NULL UNIQUE,
            email TEXT,
            name TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quotes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            author TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // user_id holds the external id; one edge per (user, quote)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            quote_id INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_id, quote_id),
            FOREIGN KEY(quote_id) REFERENCES quotes(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL UNIQUE,
            dark_mode BOOLEAN NOT NULL DEFAULT 0,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = vec![
        "CREATE INDEX IF NOT EXISTS idx_favorites_user_created ON favorites(user_id, created_at)",
        "CREATE INDEX IF NOT EXISTS idx_favorites_quote_id ON favorites(quote_id)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_support::{empty_pool, seeded_pool};

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = empty_pool().await;

        assert_eq!(seed_quotes(&pool).await.unwrap(), SEED_QUOTES.len() as u64);
        assert_eq!(seed_quotes(&pool).await.unwrap(), 0);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, SEED_QUOTES.len() as i64);
    }

    #[tokio::test]
    async fn test_duplicate_favorite_rejected_by_schema() {
        let pool = seeded_pool(&[("Dream big and dare to fail.", "Norman Vaughan")]).await;

        sqlx::query("INSERT INTO favorites (user_id, quote_id) VALUES ('user_a', 1)")
            .execute(&pool)
            .await
            .unwrap();
        let duplicate = sqlx::query("INSERT INTO favorites (user_id, quote_id) VALUES ('user_a', 1)")
            .execute(&pool)
            .await;

        assert!(duplicate.is_err(), "(user, quote) must be unique");
    }

    #[tokio::test]
    async fn test_reset_drops_data() {
        let pool = seeded_pool(&[("Happiness depends upon ourselves.", "Aristotle")]).await;

        run_migrations(&pool, true).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
