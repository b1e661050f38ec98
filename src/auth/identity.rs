//! Identity sync: keeps the local `users` table in step with the provider

use reqwest::{Client, Url};
use serde::Deserialize;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::models::{AuthStatus, Identity, Profile, User};
use crate::common::{safe_email_log, ApiError, AppConfig};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("identity provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("identity provider returned status {0}")]
    Status(u16),
    #[error("invalid identity provider url: {0}")]
    InvalidUrl(String),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::ServiceUnavailable(err.to_string())
    }
}

/// User payload returned by the provider's user API
#[derive(Debug, Deserialize)]
struct ProviderUser {
    first_name: Option<String>,
    last_name: Option<String>,
    username: Option<String>,
    #[serde(default)]
    email_addresses: Vec<ProviderEmail>,
}

#[derive(Debug, Deserialize)]
struct ProviderEmail {
    email_address: String,
}

impl From<ProviderUser> for Profile {
    fn from(user: ProviderUser) -> Self {
        Profile {
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email_addresses: user
                .email_addresses
                .into_iter()
                .map(|e| e.email_address)
                .collect(),
        }
    }
}

/// Client for the provider's backend user API
#[derive(Clone)]
pub struct ProviderClient {
    http: Client,
    api_url: String,
    secret_key: String,
}

impl ProviderClient {
    pub fn new(http: Client, api_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Builds a client when both the API URL and secret key are configured
    pub fn from_config(http: &Client, config: &AppConfig) -> Option<Self> {
        match (&config.identity_api_url, &config.identity_secret_key) {
            (Some(url), Some(key)) => Some(Self::new(http.clone(), url.clone(), key.clone())),
            _ => None,
        }
    }

    /// `{api_url}/users/{external_id}` with the id escaped as one path segment
    pub fn user_url(&self, external_id: &str) -> Result<Url, ProviderError> {
        let mut url =
            Url::parse(&self.api_url).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .push("users")
            .push(external_id);

        Ok(url)
    }

    /// GET {api_url}/users/{external_id}
    pub async fn fetch_profile(&self, external_id: &str) -> Result<Profile, ProviderError> {
        let url = self.user_url(external_id)?;

        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let user: ProviderUser = resp.json().await?;
        Ok(user.into())
    }
}

pub struct IdentityService {
    db: SqlitePool,
    provider: Option<ProviderClient>,
}

impl IdentityService {
    pub fn new(db: SqlitePool, provider: Option<ProviderClient>) -> Self {
        Self { db, provider }
    }

    /// Ensure exactly one local user row mirrors the caller.
    ///
    /// Known profile values overwrite the stored name and email. Without a
    /// profile the row is only created if missing. Returns the external id.
    pub async fn sync_user(&self, caller: Option<&Identity>) -> Result<String, ApiError> {
        let identity =
            caller.ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;
        let external_id = identity.external_id.as_str();

        let profile = match (&identity.profile, &self.provider) {
            (Some(profile), _) => Some(profile.clone()),
            (None, Some(provider)) => {
                let profile = provider.fetch_profile(external_id).await.map_err(|e| {
                    warn!(error = %e, user_id = %external_id, "Provider profile lookup failed");
                    ApiError::from(e)
                })?;
                Some(profile)
            }
            (None, None) => None,
        };

        match profile {
            Some(profile) => {
                let name = profile.display_name();
                let email = profile.primary_email();

                sqlx::query(
                    r#"
                    INSERT INTO users (clerk_id, email, name)
                    VALUES (?, ?, ?)
                    ON CONFLICT(clerk_id) DO UPDATE SET
                        email = excluded.email,
                        name = excluded.name
                    "#,
                )
                .bind(external_id)
                .bind(email)
                .bind(name.as_deref())
                .execute(&self.db)
                .await
                .map_err(|e| {
                    error!(error = %e, user_id = %external_id, "Database error syncing user");
                    ApiError::DatabaseError(e)
                })?;

                debug!(
                    user_id = %external_id,
                    email = %email.map(safe_email_log).unwrap_or_default(),
                    "User profile synced"
                );
            }
            None => {
                let result = sqlx::query(
                    "INSERT INTO users (clerk_id) VALUES (?) ON CONFLICT(clerk_id) DO NOTHING",
                )
                .bind(external_id)
                .execute(&self.db)
                .await
                .map_err(|e| {
                    error!(error = %e, user_id = %external_id, "Database error syncing user");
                    ApiError::DatabaseError(e)
                })?;

                if result.rows_affected() > 0 {
                    info!(user_id = %external_id, "Created user without profile");
                }
            }
        }

        Ok(external_id.to_string())
    }

    /// Stored user row for the caller
    pub async fn get_user(&self, caller: Option<&Identity>) -> Result<User, ApiError> {
        let identity =
            caller.ok_or_else(|| ApiError::Unauthorized("not authenticated".to_string()))?;

        sqlx::query_as::<_, User>(
            "SELECT id, clerk_id, email, name, created_at FROM users WHERE clerk_id = ?",
        )
        .bind(&identity.external_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("User has not been synced".to_string()))
    }
}

pub fn auth_status(caller: Option<&Identity>) -> AuthStatus {
    AuthStatus {
        is_authenticated: caller.is_some(),
        user_id: caller.map(|identity| identity.external_id.clone()),
    }
}
