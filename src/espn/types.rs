//! Response types for the ESPN league endpoint (`mTeam`, `mRoster`, `mSettings` views)

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// A league as returned by ESPN
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<u16>,
    #[serde(default)]
    pub settings: Option<LeagueInfo>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl LeagueSnapshot {
    pub fn name(&self) -> Option<&str> {
        self.settings.as_ref().map(|s| s.name.as_str())
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueInfo {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: u32,
    #[serde(default)]
    pub abbrev: Option<String>,
    /// Present on current seasons; older payloads only carry location/nickname
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(rename = "playoffSeed", default)]
    pub playoff_seed: Option<u32>,
    #[serde(rename = "rankCalculatedFinal", default)]
    pub final_rank: Option<u32>,
    #[serde(default)]
    pub record: Option<TeamRecord>,
    #[serde(default)]
    pub roster: Option<Roster>,
}

impl Team {
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        let joined = [self.location.as_deref(), self.nickname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            format!("Team {}", self.id)
        } else {
            joined
        }
    }

    pub fn overall(&self) -> RecordLine {
        self.record
            .as_ref()
            .map(|r| r.overall.clone())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        self.roster
            .as_ref()
            .map(|r| r.entries.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub overall: RecordLine,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecordLine {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: f64,
    #[serde(rename = "pointsAgainst", default)]
    pub points_against: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterEntry {
    #[serde(rename = "lineupSlotId")]
    pub lineup_slot_id: u8,
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(rename = "playerPoolEntry", default)]
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerPoolEntry {
    #[serde(rename = "appliedStatTotal", default)]
    pub applied_stat_total: Option<f64>,
    pub player: EspnPlayer,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EspnPlayer {
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: i64,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: Option<u32>,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
}
