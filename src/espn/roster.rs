//! Standings and lineup views over a league snapshot

use serde::Serialize;

use super::types::{LeagueSnapshot, RosterEntry, Team};
use crate::Position;

pub const BENCH_SLOT: &str = "BE";
pub const INJURED_RESERVE_SLOT: &str = "IR";

/// ESPN lineup slot id to its label
pub fn lineup_slot_label(slot_id: u8) -> &'static str {
    match slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        20 => BENCH_SLOT,
        21 => INJURED_RESERVE_SLOT,
        23 => "RB/WR/TE",
        24 => "ER",
        _ => "UNKNOWN",
    }
}

pub fn pro_team_abbrev(pro_team_id: u32) -> &'static str {
    match pro_team_id {
        1 => "ATL",
        2 => "BUF",
        3 => "CHI",
        4 => "CIN",
        5 => "CLE",
        6 => "DAL",
        7 => "DEN",
        8 => "DET",
        9 => "GB",
        10 => "TEN",
        11 => "IND",
        12 => "KC",
        13 => "LV",
        14 => "LAR",
        15 => "MIA",
        16 => "MIN",
        17 => "NE",
        18 => "NO",
        19 => "NYG",
        20 => "NYJ",
        21 => "PHI",
        22 => "ARI",
        23 => "PIT",
        24 => "LAC",
        25 => "SF",
        26 => "SEA",
        27 => "TB",
        28 => "WSH",
        29 => "CAR",
        30 => "JAX",
        33 => "BAL",
        34 => "HOU",
        _ => "FA",
    }
}

/// Sort rank of a starting slot; unlisted slots sort last.
pub fn slot_order(slot: &str) -> u8 {
    match slot {
        "QB" | "OP" => 0,
        "RB" => 1,
        "WR" => 2,
        "TE" => 3,
        "FLEX" | "RB/WR/TE" => 4,
        "K" => 5,
        "D/ST" => 6,
        _ => 99,
    }
}

/// Label shown for a slot: superflex reads as QB, the standard flex as FLEX.
pub fn display_slot(slot: &str) -> &str {
    match slot {
        "OP" => "QB",
        "RB/WR/TE" => "FLEX",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPlayer {
    pub name: String,
    pub position: Option<Position>,
    pub lineup_slot: String,
    pub pro_team: String,
    pub injury_status: Option<String>,
    pub points: Option<f64>,
}

impl RosterPlayer {
    pub fn from_entry(entry: &RosterEntry) -> Self {
        let player = entry.player_pool_entry.as_ref().map(|p| &p.player);
        let name = player
            .and_then(|p| p.full_name.clone())
            .unwrap_or_else(|| format!("Player {}", entry.player_id));
        let injury_status = entry
            .injury_status
            .clone()
            .or_else(|| player.and_then(|p| p.injury_status.clone()));

        Self {
            name,
            position: player.and_then(|p| Position::try_from_espn_id(p.default_position_id).ok()),
            lineup_slot: lineup_slot_label(entry.lineup_slot_id).to_string(),
            pro_team: pro_team_abbrev(player.and_then(|p| p.pro_team_id).unwrap_or(0)).to_string(),
            injury_status,
            points: entry
                .player_pool_entry
                .as_ref()
                .and_then(|p| p.applied_stat_total),
        }
    }

    pub fn display_slot(&self) -> &str {
        display_slot(&self.lineup_slot)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterView {
    pub starters: Vec<RosterPlayer>,
    pub bench: Vec<RosterPlayer>,
    pub injured_reserve: Vec<RosterPlayer>,
}

/// Partition a team's roster into starters, bench and IR.
///
/// Starters are ordered by slot; bench and IR keep ESPN's order.
pub fn split_roster(team: &Team) -> RosterView {
    let mut view = RosterView::default();
    for entry in team.entries() {
        let player = RosterPlayer::from_entry(entry);
        match player.lineup_slot.as_str() {
            BENCH_SLOT => view.bench.push(player),
            INJURED_RESERVE_SLOT => view.injured_reserve.push(player),
            _ => view.starters.push(player),
        }
    }
    view.starters.sort_by_key(|p| slot_order(&p.lineup_slot));
    view
}

/// Teams ordered by playoff seed, unseeded teams last in ESPN's order.
pub fn standings(snapshot: &LeagueSnapshot) -> Vec<&Team> {
    let mut teams: Vec<&Team> = snapshot.teams.iter().collect();
    teams.sort_by_key(|t| match t.playoff_seed {
        Some(seed) if seed > 0 => (0, seed),
        _ => (1, 0),
    });
    teams
}
