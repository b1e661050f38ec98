// src/page/mod.rs
//! Page model: the data the quote page renders from

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::page_routes;
pub use services::PageService;
