//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_companion::{
    cli::{Commands, FflCompanion, IngestCmd, LeagueCmd, StatsCmd, UserCmd},
    commands::{
        ingest::{handle_ingest_seasonal, handle_ingest_weekly},
        league::{
            handle_add_league, handle_league_analytics, handle_list_leagues, handle_remove_league,
            handle_roster, handle_standings, handle_update_league, AddLeagueParams,
        },
        stats::{
            handle_positional_rankings, handle_top_scorers, handle_weekly_averages,
            handle_weekly_trend,
        },
        user::{handle_add_user, handle_verify_user, login},
    },
    config::AppConfig,
    storage::{LeagueUpdate, StatsDatabase},
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = FflCompanion::parse();

    let config = AppConfig::from_env()
        .context("loading configuration")?
        .with_database_path(app.db)
        .with_credentials(app.user, app.password);
    let mut db = StatsDatabase::open(&config.database_path).with_context(|| {
        format!("opening database at {}", config.database_path.display())
    })?;

    match app.command {
        Commands::Ingest { cmd } => match cmd {
            IngestCmd::Seasonal { years } => {
                handle_ingest_seasonal(&config, &mut db, &years).await?
            }
            IngestCmd::Weekly { years } => handle_ingest_weekly(&config, &mut db, &years).await?,
        },

        Commands::Stats { cmd } => match cmd {
            StatsCmd::Top {
                query,
                position,
                limit,
            } => handle_top_scorers(&db, &query, position, limit)?,
            StatsCmd::Trend { query, player_id } => handle_weekly_trend(&db, &query, &player_id)?,
            StatsCmd::Rankings { query } => handle_positional_rankings(&db, &query)?,
            StatsCmd::Averages {
                query,
                position,
                min_games,
            } => handle_weekly_averages(&db, &query, position, min_games)?,
        },

        Commands::User { cmd } => match cmd {
            UserCmd::Add { username } => {
                handle_add_user(&mut db, &username, config.password.as_deref())?
            }
            UserCmd::Verify => handle_verify_user(&config, &db)?,
        },

        Commands::League { cmd } => {
            let owner = login(&config, &db).context("signing in")?;
            match cmd {
                LeagueCmd::Add {
                    name,
                    league_id,
                    season,
                    credentials,
                    skip_verify,
                } => {
                    handle_add_league(
                        &config,
                        &mut db,
                        &owner,
                        AddLeagueParams {
                            name,
                            league_id,
                            season,
                            espn_s2: credentials.espn_s2,
                            swid: credentials.swid,
                            skip_verify,
                        },
                    )
                    .await?
                }
                LeagueCmd::List { json } => handle_list_leagues(&db, &owner, json)?,
                LeagueCmd::Update {
                    id,
                    name,
                    espn_s2,
                    swid,
                } => handle_update_league(
                    &mut db,
                    &owner,
                    id,
                    LeagueUpdate {
                        name,
                        espn_s2,
                        espn_swid: swid,
                    },
                )?,
                LeagueCmd::Remove { id } => handle_remove_league(&mut db, &owner, id)?,
                LeagueCmd::Standings { id, json } => {
                    handle_standings(&config, &db, &owner, id, json).await?
                }
                LeagueCmd::Roster { id, team_id, json } => {
                    handle_roster(&config, &db, &owner, id, team_id, json).await?
                }
                LeagueCmd::Analytics { id, scoring, json } => {
                    handle_league_analytics(&db, &owner, id, &scoring, json)?
                }
            }
        }
    }

    Ok(())
}
