// src/common/config.rs
//! Runtime configuration read from the environment (and `.env` via dotenv)

use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://quotes.db";
const DEFAULT_JWT_SECRET: &str = "replace_with_strong_secret";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Shared secret used to verify identity provider session tokens
    pub jwt_secret: String,
    /// Base URL of the identity provider's user API, e.g. `https://api.clerk.com/v1`
    pub identity_api_url: Option<String>,
    pub identity_secret_key: Option<String>,
    pub seed_quotes: bool,
    pub reset_db: bool,
    pub cors_origins: Vec<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| v.trim().to_lowercase() == "true")
                .unwrap_or(default)
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            database_url: non_empty("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: non_empty("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            identity_api_url: non_empty("IDENTITY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            identity_secret_key: non_empty("IDENTITY_SECRET_KEY"),
            seed_quotes: flag("SEED_QUOTES", true),
            reset_db: flag("RESET_DB", false),
            cors_origins,
            port: lookup("PORT")
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// True when the server may call the provider's user API
    pub fn has_identity_api(&self) -> bool {
        self.identity_api_url.is_some() && self.identity_secret_key.is_some()
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.database_url, "sqlite://quotes.db");
        assert_eq!(config.port, 8080);
        assert!(config.seed_quotes);
        assert!(!config.reset_db);
        assert!(!config.has_identity_api());
        assert!(config.uses_default_secret());
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite://data/app.db"),
            ("JWT_SECRET", "s3cret"),
            ("IDENTITY_API_URL", "https://api.clerk.com/v1/"),
            ("IDENTITY_SECRET_KEY", "sk_test_123"),
            ("SEED_QUOTES", "FALSE"),
            ("RESET_DB", "true"),
            ("CORS_ORIGINS", "https://quotes.example.com, ,http://localhost:3000"),
            ("PORT", "9000"),
        ]);

        assert_eq!(config.database_url, "sqlite://data/app.db");
        assert_eq!(config.identity_api_url.as_deref(), Some("https://api.clerk.com/v1"));
        assert!(config.has_identity_api());
        assert!(!config.uses_default_secret());
        assert!(!config.seed_quotes);
        assert!(config.reset_db);
        assert_eq!(
            config.cors_origins,
            vec!["https://quotes.example.com", "http://localhost:3000"]
        );
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 8080);
    }
}
