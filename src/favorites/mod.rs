// src/favorites/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::favorites_routes;
pub use services::FavoritesService;
