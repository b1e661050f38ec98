// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;

use crate::common::config::AppConfig;
use crate::auth::identity::{IdentityService, ProviderClient};
use crate::common::demo_mode::DemoModeConfig;

/// Application state containing database pool, HTTP client, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub config: AppConfig,
    pub demo_mode: DemoModeConfig,
}

impl AppState {
    pub fn identity_service(&self) -> IdentityService {
        IdentityService::new(
            self.db.clone(),
            ProviderClient::from_config(&self.http, &self.config),
        )
    }
}
