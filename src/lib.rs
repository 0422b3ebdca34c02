//! corkboard - a small boards API service.
//!
//! Exposes CRUD endpoints for board records over HTTP, backed by SQLite,
//! with static seed data applied at process start.

pub mod board;
pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{Board, BoardRepository, BoardUpdate, NewBoard};
pub use config::Config;
pub use db::DbPool;
pub use error::{CorkboardError, Result};
pub use web::WebServer;
