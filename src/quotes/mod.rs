// src/quotes/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use models::*;
pub use routes::quotes_routes;
pub use services::QuotesService;
