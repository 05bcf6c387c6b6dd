//! Fantasy Football Companion Library
//!
//! Pulls NFL player statistics from nflverse into a local SQLite document
//! store, answers fantasy analytics queries over it, and reads private ESPN
//! leagues for standings and rosters.
//!
//! ## Features
//!
//! - **Ingestion**: Seasonal and weekly player stats, idempotent by player/season/week
//! - **Analytics**: Leaderboards, weekly trends, positional rankings and per-game averages
//! - **Configurable Scoring**: Any numeric stat column can act as the fantasy score
//! - **League Registry**: Store ESPN league credentials and view standings and rosters
//! - **Accounts**: Leagues belong to password-protected users
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_companion::{config::AppConfig, ingest::{ingest_weekly, NflverseSource}};
//! use ffl_companion::{storage::{ScoringField, StatsDatabase}, Season};
//!
//! # async fn example() -> ffl_companion::Result<()> {
//! let config = AppConfig::from_env()?;
//! let mut db = StatsDatabase::open(&config.database_path)?;
//! let source = NflverseSource::new(&config)?;
//!
//! ingest_weekly(&mut db, &source, &[Season::new(2024)]).await?;
//! let averages = db.weekly_averages(Season::new(2024), Some("WR"), 6, &ScoringField::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FFL_DB_PATH=~/fantasy/stats.db
//! export FFL_USER=sam FFL_PASSWORD=secret
//! export RUST_LOG=ffl_companion=debug
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod ingest;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, Season, Week};
pub use error::{CompanionError, Result};
