//! Database schema and connection management

use crate::error::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the stats store: the two stat collections plus the league registry.
///
/// Constructed once at startup and passed by reference to whatever needs
/// persistence.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl StatsDatabase {
    /// Open (or create) the database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.initialize_schema()?;
        debug!(path = %path.display(), "opened stats database");
        Ok(db)
    }

    /// Create an in-memory database (tests, dry runs)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn, path: None };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Location of the backing file, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON")?;

        // Season-level documents, unique per (player_id, season)
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS seasonal_stats (
                player_id TEXT NOT NULL,
                season INTEGER NOT NULL,
                doc TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, season)
            )",
            [],
        )?;

        // Week-level documents, unique per (player_id, season, week)
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS weekly_stats (
                player_id TEXT NOT NULL,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                doc TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, season, week)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Each league belongs to the user who registered it
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS leagues (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                espn_league_id INTEGER NOT NULL,
                espn_year INTEGER NOT NULL,
                espn_s2 TEXT NOT NULL,
                espn_swid TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                UNIQUE (user_id, espn_league_id, espn_year)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_leagues_user ON leagues(user_id)",
            [],
        )?;

        // Season scans back every ranking query
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_seasonal_season ON seasonal_stats(season)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_weekly_season ON weekly_stats(season)",
            [],
        )?;

        Ok(())
    }
}
