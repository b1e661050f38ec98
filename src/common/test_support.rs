// Shared fixtures for database-backed tests

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use super::config::AppConfig;
use super::demo_mode::DemoModeConfig;
use super::migrations::run_migrations;
use super::state::AppState;
use crate::auth::models::{Claims, Identity, Profile};

/// Fresh in-memory database with the full schema and no rows
pub async fn empty_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool, false).await.unwrap();

    pool
}

/// In-memory database holding the given quotes, with ids 1..=n in order
pub async fn seeded_pool(quotes: &[(&str, &str)]) -> SqlitePool {
    let pool = empty_pool().await;
    insert_quotes(&pool, quotes).await;
    pool
}

/// On-disk database file shared by several pooled connections.
///
/// Unlike the in-memory pools, connections here really run side by side, so
/// concurrent writers contend for SQLite's write lock. Call `remove` when done.
pub struct FileDb {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl FileDb {
    pub async fn seeded(quotes: &[(&str, &str)], connections: u32) -> Self {
        let path = std::env::temp_dir().join(format!("quote_api_test_{}.db", uuid::Uuid::new_v4()));

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(10));

        let pool = SqlitePoolOptions::new()
            .max_connections(connections)
            .connect_with(options)
            .await
            .unwrap();

        run_migrations(&pool, false).await.unwrap();
        insert_quotes(&pool, quotes).await;

        Self { pool, path }
    }

    pub async fn remove(self) {
        self.pool.close().await;
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

async fn insert_quotes(pool: &SqlitePool, quotes: &[(&str, &str)]) {
    for (text, author) in quotes {
        sqlx::query("INSERT INTO quotes (text, author) VALUES (?, ?)")
            .bind(text)
            .bind(author)
            .execute(pool)
            .await
            .unwrap();
    }
}

pub fn identity(external_id: &str) -> Identity {
    Identity {
        external_id: external_id.to_string(),
        profile: None,
    }
}

pub fn identity_with_profile(external_id: &str, first: &str, last: &str, email: &str) -> Identity {
    Identity {
        external_id: external_id.to_string(),
        profile: Some(Profile {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            username: None,
            email_addresses: vec![email.to_string()],
        }),
    }
}

pub const TEST_JWT_SECRET: &str = "test_secret_key";

/// App state over `pool` with demo mode off and the test JWT secret
pub fn test_state(pool: SqlitePool) -> AppState {
    let mut config = AppConfig::from_lookup(|_| None);
    config.jwt_secret = TEST_JWT_SECRET.to_string();

    AppState {
        db: pool,
        http: reqwest::Client::new(),
        config,
        demo_mode: DemoModeConfig::disabled(),
    }
}

/// Signs a session token for `sub` with the test secret
pub fn session_token(claims: &Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode token")
}

pub fn claims_for(sub: &str) -> Claims {
    Claims {
        sub: sub.to_string(),
        exp: 9999999999,
        first_name: None,
        last_name: None,
        username: None,
        email_addresses: Vec::new(),
    }
}
