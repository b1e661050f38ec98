// src/common/demo_mode.rs
//! Demo mode configuration
//! Lets the app run without an identity provider by impersonating demo users

use std::env;

use crate::auth::models::{Identity, Profile};

const DEFAULT_DEMO_USER_ID: &str = "demo_user_0001";

#[derive(Debug, Clone)]
pub struct DemoModeConfig {
    pub enabled: bool,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
}

impl DemoModeConfig {
    pub fn from_env() -> Self {
        let enabled = env::var("DEMO_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        let user_id = env::var("DEMO_USER_ID").unwrap_or_else(|_| DEFAULT_DEMO_USER_ID.to_string());
        let user_name = env::var("DEMO_USER_NAME").unwrap_or_else(|_| "Demo User".to_string());
        let user_email =
            env::var("DEMO_USER_EMAIL").unwrap_or_else(|_| "demo@quotes.local".to_string());

        Self {
            enabled,
            user_id,
            user_name,
            user_email,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            user_id: DEFAULT_DEMO_USER_ID.to_string(),
            user_name: "Demo User".to_string(),
            user_email: "demo@quotes.local".to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Identity for a demo request.
    ///
    /// `switch_to` comes from the `X-Demo-User` header and selects another
    /// demo account; without it the configured default user is used.
    pub fn demo_identity(&self, switch_to: Option<&str>) -> Identity {
        match switch_to.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) if id != self.user_id => Identity {
                external_id: id.to_string(),
                profile: Some(Profile {
                    username: Some(id.to_string()),
                    ..Profile::default()
                }),
            },
            _ => Identity {
                external_id: self.user_id.clone(),
                profile: Some(Profile {
                    first_name: Some(self.user_name.clone()),
                    email_addresses: vec![self.user_email.clone()],
                    ..Profile::default()
                }),
            },
        }
    }
}

/// Print demo mode status on startup
pub fn print_demo_mode_status(config: &DemoModeConfig) {
    if config.enabled {
        println!("⚠️  DEMO MODE ENABLED ⚠️");
        println!("   Token validation bypassed");
        println!("   Demo User: {} ({})", config.user_name, config.user_id);
        println!("   Switch users with the X-Demo-User header");
        println!("   ⚠️  DO NOT USE IN PRODUCTION ⚠️");
        println!();
    } else {
        println!("🔒 Production mode - provider tokens required");
    }
}

/// CLI argument parsing for demo mode
pub fn parse_demo_mode_args<I>(args: I) -> Option<bool>
where
    I: IntoIterator<Item = String>,
{
    for arg in args {
        match arg.as_str() {
            "--demo" | "--demo-mode" => return Some(true),
            "--no-demo" | "--prod" | "--production" => return Some(false),
            _ => {}
        }
    }

    None
}

/// Override demo mode from CLI args
pub fn apply_cli_override(mut config: DemoModeConfig) -> DemoModeConfig {
    if let Some(cli_demo_mode) = parse_demo_mode_args(env::args()) {
        println!("🔧 CLI override: DEMO_MODE = {}", cli_demo_mode);
        config.enabled = cli_demo_mode;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> DemoModeConfig {
        DemoModeConfig {
            enabled: true,
            ..DemoModeConfig::disabled()
        }
    }

    #[test]
    fn test_default_demo_identity() {
        let identity = enabled_config().demo_identity(None);

        assert_eq!(identity.external_id, DEFAULT_DEMO_USER_ID);
        let profile = identity.profile.expect("demo profile");
        assert_eq!(profile.display_name().as_deref(), Some("Demo User"));
        assert_eq!(profile.primary_email(), Some("demo@quotes.local"));
    }

    #[test]
    fn test_demo_user_switching() {
        let config = enabled_config();

        let switched = config.demo_identity(Some("demo_alice"));
        assert_eq!(switched.external_id, "demo_alice");
        assert_eq!(
            switched.profile.and_then(|p| p.display_name()).as_deref(),
            Some("demo_alice")
        );

        let blank = config.demo_identity(Some("  "));
        assert_eq!(blank.external_id, DEFAULT_DEMO_USER_ID);
    }

    #[test]
    fn test_parse_demo_mode_args() {
        let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(parse_demo_mode_args(args(&["quote_api", "--demo"])), Some(true));
        assert_eq!(parse_demo_mode_args(args(&["quote_api", "--prod"])), Some(false));
        assert_eq!(parse_demo_mode_args(args(&["quote_api"])), None);
    }
}
