//! Data models for the storage layer

use crate::cli::types::{PlayerId, Position, Season, Week};
use crate::error::CompanionError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Name of a numeric column used for ranking and aggregation.
///
/// Any column name is accepted as long as it is a plain identifier; the name
/// is not checked against the columns actually present in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoringField(String);

impl ScoringField {
    pub const DEFAULT: &'static str = "fantasy_points_ppr";

    pub fn new(name: &str) -> Result<Self, CompanionError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(CompanionError::InvalidScoringField {
                field: name.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// JSON path addressing this field inside a stored document
    pub(crate) fn json_path(&self) -> String {
        format!("$.\"{}\"", self.0)
    }
}

impl Default for ScoringField {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ScoringField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ScoringField {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

/// A season-level stat document keyed by (player_id, season)
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalStatDocument {
    pub player_id: PlayerId,
    pub season: Season,
    pub doc: Map<String, Value>,
}

/// A week-level stat document keyed by (player_id, season, week)
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyStatDocument {
    pub player_id: PlayerId,
    pub season: Season,
    pub week: Week,
    pub doc: Map<String, Value>,
}

/// One row of a season leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonSummary {
    pub player_id: PlayerId,
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub recent_team: Option<String>,
    pub games: Option<i64>,
    pub points: Option<f64>,
}

/// A player's score in a single week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPoint {
    pub week: Week,
    pub opponent_team: Option<String>,
    pub points: Option<f64>,
}

/// Per-player weekly scoring aggregate, rounded to one decimal place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAverageSummary {
    pub player_id: PlayerId,
    pub player_name: Option<String>,
    pub position: Option<String>,
    pub avg_points: Option<f64>,
    pub total_points: f64,
    pub games: u32,
    pub max_points: Option<f64>,
    pub min_points: Option<f64>,
}

/// Top players per ranked position
pub type PositionalRankings = BTreeMap<Position, Vec<PlayerSeasonSummary>>;

/// An account that owns leagues
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// A registered ESPN league and the credentials used to read it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct League {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub espn_league_id: u32,
    pub espn_year: u16,
    #[serde(skip_serializing)]
    pub espn_s2: String,
    #[serde(skip_serializing)]
    pub espn_swid: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Fields needed to register a league
#[derive(Debug, Clone)]
pub struct NewLeague {
    pub user_id: i64,
    pub name: String,
    pub espn_league_id: u32,
    pub espn_year: u16,
    pub espn_s2: String,
    pub espn_swid: String,
}

/// Partial update of a registered league; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct LeagueUpdate {
    pub name: Option<String>,
    pub espn_s2: Option<String>,
    pub espn_swid: Option<String>,
}

impl LeagueUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.espn_s2.is_none() && self.espn_swid.is_none()
    }
}
