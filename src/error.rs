//! Error types for the fantasy football companion

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompanionError>;

#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Parquet decoding failed: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid scoring field: {field}")]
    InvalidScoringField { field: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("League not found: {id}")]
    LeagueNotFound { id: i64 },

    #[error("League {id} belongs to another user")]
    LeagueForbidden { id: i64 },

    #[error("User {username} already exists")]
    UserExists { username: String },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("League {espn_league_id} ({espn_year}) is already registered")]
    LeagueExists { espn_league_id: u32, espn_year: u16 },

    #[error("Team {team_id} not found in league")]
    TeamNotFound { team_id: u32 },

    #[error("ESPN rejected the league credentials (HTTP {status})")]
    EspnAuth { status: u16 },
}

#[cfg(test)]
mod tests;
