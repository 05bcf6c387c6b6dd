//! Storage layer for the fantasy football companion
//!
//! This module provides a document-style store on top of SQLite,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Document upserts and lookups
//! - `analysis`: Rankings, trends and grouped aggregations
//! - `users`: Accounts and password checks
//! - `leagues`: Registered ESPN leagues, scoped to their owner

pub mod analysis;
pub mod leagues;
pub mod models;
pub mod queries;
pub mod schema;
pub mod users;


// Re-export the main types and database struct for easy access
pub use analysis::{round_one_decimal, DEFAULT_MIN_GAMES, POSITIONAL_RANKING_LIMIT};
pub use models::*;
pub use schema::StatsDatabase;
