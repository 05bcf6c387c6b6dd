//! League registry and ESPN view commands

use std::fmt::Write as _;

use reqwest::Client;
use serde::Serialize;

use super::{fmt_points, fmt_text, print_json, stats::render_rankings};
use crate::{
    config::AppConfig,
    core::build_client,
    espn::{fetch_league, fetch_snapshot, split_roster, standings, RosterView, Team},
    storage::{League, LeagueUpdate, NewLeague, ScoringField, StatsDatabase, User},
    CompanionError, LeagueId, Result, Season,
};

/// Arguments for `league add`
#[derive(Debug, Clone)]
pub struct AddLeagueParams {
    pub name: String,
    pub league_id: LeagueId,
    pub season: Season,
    pub espn_s2: String,
    pub swid: String,
    pub skip_verify: bool,
}

impl AddLeagueParams {
    /// Trim every field and reject blanks.
    pub fn into_new_league(self, user_id: i64) -> Result<NewLeague> {
        Ok(NewLeague {
            user_id,
            name: required("name", &self.name)?,
            espn_league_id: self.league_id.as_u32(),
            espn_year: self.season.as_u16(),
            espn_s2: required("espn_s2", &self.espn_s2)?,
            espn_swid: required("swid", &self.swid)?,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CompanionError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn espn_client(config: &AppConfig) -> Result<Client> {
    build_client(config.http_timeout)
}

/// Handle `league add`
pub async fn handle_add_league(
    config: &AppConfig,
    db: &mut StatsDatabase,
    owner: &User,
    params: AddLeagueParams,
) -> Result<()> {
    let skip_verify = params.skip_verify;
    let new_league = params.into_new_league(owner.id)?;

    if !skip_verify {
        println!("Verifying league with ESPN...");
        let client = espn_client(config)?;
        // tarpaulin::skip - HTTP call
        let snapshot = fetch_snapshot(
            &client,
            new_league.espn_league_id,
            new_league.espn_year,
            &new_league.espn_swid,
            &new_league.espn_s2,
        )
        .await?;
        println!(
            "✓ Found {} with {} teams",
            snapshot.name().unwrap_or("league"),
            snapshot.teams.len()
        );
    }

    let league = db.create_league(&new_league)?;
    println!(
        "✓ Registered league {} as id {} ({} {})",
        league.name, league.id, league.espn_league_id, league.espn_year
    );
    Ok(())
}

/// Handle `league list`
pub fn handle_list_leagues(db: &StatsDatabase, owner: &User, as_json: bool) -> Result<()> {
    let leagues = db.list_leagues(owner.id)?;
    if as_json {
        return print_json(&leagues);
    }
    if leagues.is_empty() {
        println!("No leagues registered. Add one with `league add`.");
        return Ok(());
    }
    print!("{}", render_leagues(&leagues));
    Ok(())
}

/// Handle `league update`
pub fn handle_update_league(
    db: &mut StatsDatabase,
    owner: &User,
    id: i64,
    update: LeagueUpdate,
) -> Result<()> {
    if update.is_empty() {
        println!("Nothing to update for league {}.", id);
        return Ok(());
    }
    let league = db.update_league(owner.id, id, &update)?;
    println!("✓ Updated league {} ({})", league.id, league.name);
    Ok(())
}

/// Handle `league remove`
pub fn handle_remove_league(db: &mut StatsDatabase, owner: &User, id: i64) -> Result<()> {
    if db.delete_league(owner.id, id)? {
        println!("✓ Removed league {}", id);
        Ok(())
    } else {
        Err(CompanionError::LeagueNotFound { id })
    }
}

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub team_id: u32,
    pub name: String,
    pub abbrev: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub playoff_seed: Option<u32>,
    pub final_rank: Option<u32>,
}

impl From<&Team> for StandingRow {
    fn from(team: &Team) -> Self {
        let record = team.overall();
        Self {
            team_id: team.id,
            name: team.display_name(),
            abbrev: team.abbrev.clone(),
            wins: record.wins,
            losses: record.losses,
            ties: record.ties,
            points_for: record.points_for,
            points_against: record.points_against,
            playoff_seed: team.playoff_seed,
            final_rank: team.final_rank,
        }
    }
}

/// Handle `league standings`
pub async fn handle_standings(
    config: &AppConfig,
    db: &StatsDatabase,
    owner: &User,
    id: i64,
    as_json: bool,
) -> Result<()> {
    let league = db.user_league(owner.id, id)?;
    let client = espn_client(config)?;
    let snapshot = fetch_league(&client, &league).await?; // tarpaulin::skip

    let rows: Vec<StandingRow> = standings(&snapshot).into_iter().map(StandingRow::from).collect();
    if as_json {
        return print_json(&rows);
    }
    println!("{} standings, {}", league.name, league.espn_year);
    print!("{}", render_standings(&rows));
    Ok(())
}

/// Handle `league roster`
pub async fn handle_roster(
    config: &AppConfig,
    db: &StatsDatabase,
    owner: &User,
    id: i64,
    team_id: u32,
    as_json: bool,
) -> Result<()> {
    let league = db.user_league(owner.id, id)?;
    let client = espn_client(config)?;
    let snapshot = fetch_league(&client, &league).await?; // tarpaulin::skip

    let team = snapshot
        .team(team_id)
        .ok_or(CompanionError::TeamNotFound { team_id })?;
    let view = split_roster(team);
    if as_json {
        return print_json(&view);
    }
    println!("{}", team.display_name());
    print!("{}", render_roster(&view));
    Ok(())
}

/// Handle `league analytics`
pub fn handle_league_analytics(
    db: &StatsDatabase,
    owner: &User,
    id: i64,
    scoring: &ScoringField,
    as_json: bool,
) -> Result<()> {
    let league = db.user_league(owner.id, id)?;
    let rankings = db.positional_rankings(Season::new(league.espn_year), scoring)?;
    if as_json {
        return print_json(&rankings);
    }
    println!("{} analytics, {} ({})", league.name, league.espn_year, scoring);
    print!("{}", render_rankings(&rankings));
    Ok(())
}

pub fn render_leagues(leagues: &[League]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<5} {:<28} {:>10} {:>6}", "ID", "Name", "ESPN ID", "Year");
    for l in leagues {
        let _ = writeln!(
            out,
            "{:<5} {:<28} {:>10} {:>6}",
            l.id, l.name, l.espn_league_id, l.espn_year
        );
    }
    out
}

pub fn render_standings(rows: &[StandingRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<28} {:<6} {:>9} {:>9} {:>9}",
        "Seed", "Team", "Abbr", "W-L-T", "PF", "PA"
    );
    for r in rows {
        let seed = r.playoff_seed.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:<5} {:<28} {:<6} {:>9} {:>9.1} {:>9.1}",
            seed,
            r.name,
            fmt_text(r.abbrev.as_deref()),
            format!("{}-{}-{}", r.wins, r.losses, r.ties),
            r.points_for,
            r.points_against
        );
    }
    out
}

pub fn render_roster(view: &RosterView) -> String {
    let mut out = String::new();
    let sections = [
        ("Starters", &view.starters),
        ("Bench", &view.bench),
        ("Injured Reserve", &view.injured_reserve),
    ];
    for (title, players) in sections {
        if players.is_empty() {
            continue;
        }
        let _ = writeln!(out, "== {} ==", title);
        for p in players.iter() {
            let _ = writeln!(
                out,
                "{:<6} {:<24} {:<5} {:<12} {:>7}",
                p.display_slot(),
                p.name,
                p.pro_team,
                fmt_text(p.injury_status.as_deref()),
                fmt_points(p.points)
            );
        }
    }
    out
}
