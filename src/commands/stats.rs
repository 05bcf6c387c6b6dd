//! Stats query command implementations

use std::fmt::Write as _;

use super::{fmt_points, fmt_text, print_json};
use crate::{
    cli::QueryArgs,
    storage::{
        PlayerAverageSummary, PlayerSeasonSummary, PositionalRankings, StatsDatabase, WeekPoint,
    },
    PlayerId, Position, Result,
};

/// Handle `stats top`
pub fn handle_top_scorers(
    db: &StatsDatabase,
    query: &QueryArgs,
    position: Option<Position>,
    limit: u32,
) -> Result<()> {
    let position = position.map(|p| p.as_str());
    let leaders = db.top_scorers(query.season, position, &query.scoring, limit)?;

    if query.json {
        return print_json(&leaders);
    }
    if leaders.is_empty() {
        println!("No seasonal stats stored for {}.", query.season);
        println!("Run `ingest seasonal --year {}` first.", query.season);
        return Ok(());
    }

    println!("Top scorers, {} ({})", query.season, query.scoring);
    print!("{}", render_leaderboard(&leaders));
    Ok(())
}

/// Handle `stats trend`
pub fn handle_weekly_trend(db: &StatsDatabase, query: &QueryArgs, player_id: &PlayerId) -> Result<()> {
    let trend = db.weekly_trend(player_id, query.season, &query.scoring)?;

    if query.json {
        return print_json(&trend);
    }
    if trend.is_empty() {
        println!("No weekly stats for player {} in {}.", player_id, query.season);
        return Ok(());
    }

    println!("Player {} weekly {}, {}", player_id, query.scoring, query.season);
    print!("{}", render_trend(&trend));
    Ok(())
}

/// Handle `stats rankings`
pub fn handle_positional_rankings(db: &StatsDatabase, query: &QueryArgs) -> Result<()> {
    let rankings = db.positional_rankings(query.season, &query.scoring)?;

    if query.json {
        return print_json(&rankings);
    }
    print!("{}", render_rankings(&rankings));
    Ok(())
}

/// Handle `stats averages`
pub fn handle_weekly_averages(
    db: &StatsDatabase,
    query: &QueryArgs,
    position: Option<Position>,
    min_games: u32,
) -> Result<()> {
    let position = position.map(|p| p.as_str());
    let averages = db.weekly_averages(query.season, position, min_games, &query.scoring)?;

    if query.json {
        return print_json(&averages);
    }
    if averages.is_empty() {
        println!(
            "No players with at least {} weekly lines in {}.",
            min_games, query.season
        );
        return Ok(());
    }

    println!(
        "Weekly averages, {} ({}, min {} games)",
        query.season, query.scoring, min_games
    );
    print!("{}", render_averages(&averages));
    Ok(())
}

pub fn render_leaderboard(leaders: &[PlayerSeasonSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<24} {:<4} {:<5} {:>5} {:>8}",
        "#", "Player", "Pos", "Team", "G", "Points"
    );
    for (i, p) in leaders.iter().enumerate() {
        let games = p.games.map(|g| g.to_string()).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<4} {:<5} {:>5} {:>8}",
            i + 1,
            fmt_text(p.player_name.as_deref()),
            fmt_text(p.position.as_deref()),
            fmt_text(p.recent_team.as_deref()),
            games,
            fmt_points(p.points)
        );
    }
    out
}

pub fn render_trend(trend: &[WeekPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<6} {:>8}", "Week", "Opp", "Points");
    for w in trend {
        let _ = writeln!(
            out,
            "{:<6} {:<6} {:>8}",
            w.week,
            fmt_text(w.opponent_team.as_deref()),
            fmt_points(w.points)
        );
    }
    out
}

pub fn render_rankings(rankings: &PositionalRankings) -> String {
    let mut out = String::new();
    for (position, leaders) in rankings {
        let _ = writeln!(out, "== {} ==", position);
        if leaders.is_empty() {
            let _ = writeln!(out, "(no players)");
        } else {
            out.push_str(&render_leaderboard(leaders));
        }
        out.push('\n');
    }
    out
}

pub fn render_averages(averages: &[PlayerAverageSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<4} {:>4} {:>7} {:>8} {:>6} {:>6}",
        "Player", "Pos", "G", "Avg", "Total", "Max", "Min"
    );
    for a in averages {
        let _ = writeln!(
            out,
            "{:<24} {:<4} {:>4} {:>7} {:>8.1} {:>6} {:>6}",
            fmt_text(a.player_name.as_deref()),
            fmt_text(a.position.as_deref()),
            a.games,
            fmt_points(a.avg_points),
            a.total_points,
            fmt_points(a.max_points),
            fmt_points(a.min_points)
        );
    }
    out
}
