//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::models::{Claims, Identity};
use crate::common::{safe_token_log, ApiError, AppState};

/// Header used in demo mode to switch between demo users
pub const DEMO_USER_HEADER: &str = "x-demo-user";

/// The requester, authenticated or anonymous.
///
/// A missing `Authorization` header yields an anonymous caller; a token that
/// fails validation is rejected with `ApiError::Unauthorized`.
#[derive(Debug, Clone, Default)]
pub struct Caller {
    identity: Option<Identity>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Extension containing the AppState
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        resolve_caller(&parts.headers, &app_state)
    }
}

/// Resolves the caller from request headers
pub fn resolve_caller(headers: &HeaderMap, state: &AppState) -> Result<Caller, ApiError> {
    if state.demo_mode.is_enabled() {
        let switch_to = headers.get(DEMO_USER_HEADER).and_then(|h| h.to_str().ok());
        let identity = state.demo_mode.demo_identity(switch_to);

        debug!(
            user_id = %identity.external_id,
            "DEMO MODE: token validation bypassed"
        );

        return Ok(Caller::authenticated(identity));
    }

    let token = match headers.get(AUTHORIZATION) {
        Some(value) => value
            .to_str()
            .map_err(|_| ApiError::Unauthorized("malformed authorization header".into()))?,
        None => return Ok(Caller::anonymous()),
    };

    // Handle "Bearer <token>" format or raw token
    let bare_token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
    if bare_token.is_empty() {
        warn!("Authentication failed: empty bearer token");
        return Err(ApiError::Unauthorized("missing token".into()));
    }

    let claims = decode_session_token(bare_token, &state.config.jwt_secret)?;

    debug!(user_id = %claims.sub, "Caller authenticated via session token");

    Ok(Caller::authenticated(claims.into_identity()))
}

/// Validates an HS256 session token and returns its claims
pub fn decode_session_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        warn!(
            error = %e,
            token = %safe_token_log(token),
            "Session token validation failed"
        );
        ApiError::Unauthorized("invalid token".into())
    })
}
