//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Session token claims issued by the identity provider
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    /// External user id
    pub sub: String,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_addresses: Vec<String>,
}

impl Claims {
    pub fn into_identity(self) -> Identity {
        let profile = Profile {
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email_addresses: self.email_addresses,
        };

        Identity {
            external_id: self.sub,
            profile: if profile.is_empty() { None } else { Some(profile) },
        }
    }
}

/// Profile fields supplied by the identity provider
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<String>,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.username.is_none()
            && self.email_addresses.is_empty()
    }

    /// "First Last" when either part is set, otherwise the username
    pub fn display_name(&self) -> Option<String> {
        let full_name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !full_name.is_empty() {
            return Some(full_name);
        }

        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .iter()
            .map(|email| email.trim())
            .find(|email| !email.is_empty())
    }
}

/// Explicit caller identity passed into every operation
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub external_id: String,
    pub profile: Option<Profile>,
}

/// User database model
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub clerk_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub user_id: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SyncResponse {
    pub user_id: String,
}
