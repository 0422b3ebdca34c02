//! API handlers for the Web API.

pub mod board;

pub use board::*;

use crate::DbPool;

/// Shared application state for handlers.
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}

impl AppState {
    /// Create a new application state.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
