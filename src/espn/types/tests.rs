//! Unit tests for ESPN league payloads and the views built on them

use super::*;
use crate::espn::roster::{display_slot, slot_order, split_roster, standings};
use crate::Position;
use serde_json::json;

fn entry(slot: u8, name: &str, position_id: i64) -> serde_json::Value {
    json!({
        "lineupSlotId": slot,
        "playerId": 1000 + slot as i64,
        "playerPoolEntry": {
            "appliedStatTotal": 12.5,
            "player": {
                "fullName": name,
                "defaultPositionId": position_id,
                "proTeamId": 12,
                "injuryStatus": "ACTIVE"
            }
        }
    })
}

fn sample_league() -> LeagueSnapshot {
    let payload = json!({
        "id": 123456,
        "seasonId": 2024,
        "settings": { "name": "Sunday Funday" },
        "teams": [
            {
                "id": 1,
                "abbrev": "ONE",
                "name": "Team One",
                "playoffSeed": 2,
                "rankCalculatedFinal": 3,
                "record": { "overall": { "wins": 9, "losses": 5, "ties": 0, "pointsFor": 1501.2, "pointsAgainst": 1400.4 } },
                "roster": { "entries": [
                    entry(20, "Bench Guy", 2),
                    entry(23, "Flex Guy", 3),
                    entry(16, "Defense", 16),
                    entry(0, "Quarterback", 1),
                    entry(21, "Hurt Guy", 4),
                    entry(2, "Runner", 2),
                    entry(17, "Kicker", 5),
                    entry(6, "Tight End", 6),
                    entry(4, "Receiver", 3)
                ]}
            },
            {
                "id": 2,
                "location": "Team",
                "nickname": "Two",
                "playoffSeed": 1,
                "record": { "overall": { "wins": 11, "losses": 3, "ties": 0, "pointsFor": 1620.0, "pointsAgainst": 1300.0 } }
            },
            {
                "id": 3,
                "abbrev": "THR"
            }
        ]
    });
    serde_json::from_value(payload).unwrap()
}

#[test]
fn test_league_snapshot_deserialization() {
    let league = sample_league();
    assert_eq!(league.id, Some(123456));
    assert_eq!(league.season_id, Some(2024));
    assert_eq!(league.name(), Some("Sunday Funday"));
    assert_eq!(league.teams.len(), 3);

    let one = league.team(1).unwrap();
    assert_eq!(one.abbrev.as_deref(), Some("ONE"));
    assert_eq!(one.final_rank, Some(3));
    assert_eq!(one.overall().wins, 9);
    assert_eq!(one.overall().points_for, 1501.2);
    assert_eq!(one.entries().len(), 9);
}

#[test]
fn test_team_display_name_fallbacks() {
    let league = sample_league();
    assert_eq!(league.team(1).unwrap().display_name(), "Team One");
    assert_eq!(league.team(2).unwrap().display_name(), "Team Two");
    assert_eq!(league.team(3).unwrap().display_name(), "Team 3");
}

#[test]
fn test_missing_record_and_roster_default() {
    let league = sample_league();
    let three = league.team(3).unwrap();
    assert_eq!(three.overall(), RecordLine::default());
    assert!(three.entries().is_empty());
    assert!(league.team(99).is_none());
}

#[test]
fn test_standings_orders_by_seed_unseeded_last() {
    let league = sample_league();
    let ids: Vec<u32> = standings(&league).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_split_roster() {
    let league = sample_league();
    let view = split_roster(league.team(1).unwrap());

    let starters: Vec<&str> = view.starters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        starters,
        vec!["Quarterback", "Runner", "Receiver", "Tight End", "Flex Guy", "Kicker", "Defense"]
    );
    assert_eq!(view.bench.len(), 1);
    assert_eq!(view.bench[0].name, "Bench Guy");
    assert_eq!(view.injured_reserve.len(), 1);
    assert_eq!(view.injured_reserve[0].name, "Hurt Guy");

    let flex = &view.starters[4];
    assert_eq!(flex.lineup_slot, "RB/WR/TE");
    assert_eq!(flex.display_slot(), "FLEX");
    assert_eq!(flex.position, Some(Position::WR));
    assert_eq!(flex.pro_team, "KC");
    assert_eq!(flex.points, Some(12.5));
}

#[test]
fn test_roster_entry_without_player_pool() {
    let team: Team = serde_json::from_value(json!({
        "id": 4,
        "roster": { "entries": [ { "lineupSlotId": 7, "playerId": 42, "injuryStatus": "OUT" } ] }
    }))
    .unwrap();
    let view = split_roster(&team);
    assert_eq!(view.starters.len(), 1);
    let p = &view.starters[0];
    assert_eq!(p.name, "Player 42");
    assert_eq!(p.position, None);
    assert_eq!(p.pro_team, "FA");
    assert_eq!(p.injury_status.as_deref(), Some("OUT"));
    assert_eq!(p.display_slot(), "QB");
}

#[test]
fn test_slot_order_and_display() {
    assert_eq!(slot_order("OP"), slot_order("QB"));
    assert_eq!(slot_order("FLEX"), 4);
    assert_eq!(slot_order("D/ST"), 6);
    assert_eq!(slot_order("LB"), 99);
    assert_eq!(display_slot("OP"), "QB");
    assert_eq!(display_slot("RB/WR/TE"), "FLEX");
    assert_eq!(display_slot("WR"), "WR");
}
