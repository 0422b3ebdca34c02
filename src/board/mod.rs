//! Board module for corkboard.
//!
//! This module provides the board domain type and its CRUD repository.

mod repository;
mod types;

pub use repository::BoardRepository;
pub use types::{Board, BoardUpdate, NewBoard};
