// src/preferences/mod.rs
//! Per-user display preferences (dark mode)

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use routes::preferences_routes;
pub use services::PreferencesService;
