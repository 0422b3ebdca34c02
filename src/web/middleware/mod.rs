//! Middleware for the Web API.

pub mod cache;
pub mod cors;

pub use cache::cache_headers;
pub use cors::create_cors_layer;
