//! # Auth Module
//!
//! Caller identity and the local user mirror:
//! - Session token validation and the `Caller` extractor
//! - Demo-mode identities
//! - Identity sync against the provider's profile

pub mod extractors;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod routes;


pub use extractors::Caller;
pub use identity::IdentityService;
pub use models::Identity;
pub use routes::auth_routes;
