//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::{ScoringField, DEFAULT_MIN_GAMES};
use types::{LeagueId, PlayerId, Position, Season};

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-companion",
    about = "Fantasy football stats ingestion, analytics and ESPN league viewer"
)]
pub struct FflCompanion {
    /// SQLite database file (or set `FFL_DB_PATH`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Account that owns the leagues (or set `FFL_USER`).
    #[clap(long, global = true)]
    pub user: Option<String>,

    /// Password for `--user` (or set `FFL_PASSWORD`).
    #[clap(long, global = true)]
    pub password: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download nflverse player stats into the local store
    Ingest {
        #[clap(subcommand)]
        cmd: IngestCmd,
    },

    /// Query stored player stats
    Stats {
        #[clap(subcommand)]
        cmd: StatsCmd,
    },

    /// Manage accounts
    User {
        #[clap(subcommand)]
        cmd: UserCmd,
    },

    /// Manage registered ESPN leagues (requires `--user` and `--password`)
    League {
        #[clap(subcommand)]
        cmd: LeagueCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCmd {
    /// Create an account with the global `--password`
    Add {
        /// Unique account name.
        username: String,
    },

    /// Check the global `--user` / `--password` pair
    Verify,
}

#[derive(Debug, Subcommand)]
pub enum IngestCmd {
    /// Season totals, one document per player and season
    Seasonal {
        /// Season year, repeatable: `--year 2023 --year 2024`.
        #[clap(long = "year", short, required = true)]
        years: Vec<Season>,
    },

    /// Weekly lines, one document per player, season and week
    Weekly {
        /// Season year, repeatable: `--year 2023 --year 2024`.
        #[clap(long = "year", short, required = true)]
        years: Vec<Season>,
    },
}

/// Options shared by every stats query
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Season year (e.g. 2024).
    #[clap(long, short)]
    pub season: Season,

    /// Stat field used as the fantasy score.
    #[clap(long, default_value_t = ScoringField::default())]
    pub scoring: ScoringField,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum StatsCmd {
    /// Season leaderboard
    Top {
        #[clap(flatten)]
        query: QueryArgs,

        /// Only players at this position.
        #[clap(long, short)]
        position: Option<Position>,

        /// Number of players to show (0 for all).
        #[clap(long, short, default_value_t = 20)]
        limit: u32,
    },

    /// Week-by-week scoring for one player
    Trend {
        #[clap(flatten)]
        query: QueryArgs,

        /// nflverse player id, e.g. `00-0033873`.
        #[clap(long)]
        player_id: PlayerId,
    },

    /// Top ten at QB, RB, WR and TE
    Rankings {
        #[clap(flatten)]
        query: QueryArgs,
    },

    /// Per-game averages from weekly lines
    Averages {
        #[clap(flatten)]
        query: QueryArgs,

        /// Only players at this position.
        #[clap(long, short)]
        position: Option<Position>,

        /// Minimum weekly lines a player needs to be listed.
        #[clap(long, default_value_t = DEFAULT_MIN_GAMES)]
        min_games: u32,
    },
}

/// ESPN credentials for a private league
#[derive(Debug, Args)]
pub struct CredentialArgs {
    /// `espn_s2` cookie value.
    #[clap(long)]
    pub espn_s2: String,

    /// `SWID` cookie value, braces optional.
    #[clap(long)]
    pub swid: String,
}

#[derive(Debug, Subcommand)]
pub enum LeagueCmd {
    /// Register an ESPN league
    Add {
        /// Display name.
        #[clap(long)]
        name: String,

        /// ESPN league id.
        #[clap(long)]
        league_id: LeagueId,

        /// ESPN season year.
        #[clap(long, short)]
        season: Season,

        #[clap(flatten)]
        credentials: CredentialArgs,

        /// Store without checking the credentials against ESPN.
        #[clap(long)]
        skip_verify: bool,
    },

    /// List registered leagues
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Change a league's name or credentials
    Update {
        /// Local league id, as shown by `league list`.
        id: i64,

        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        espn_s2: Option<String>,

        #[clap(long)]
        swid: Option<String>,
    },

    /// Forget a registered league
    Remove {
        /// Local league id, as shown by `league list`.
        id: i64,
    },

    /// Teams ordered by playoff seed
    Standings {
        /// Local league id, as shown by `league list`.
        id: i64,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Starters, bench and IR for one team
    Roster {
        /// Local league id, as shown by `league list`.
        id: i64,

        /// ESPN team id within the league.
        #[clap(long)]
        team_id: u32,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Positional rankings for the league's season
    Analytics {
        /// Local league id, as shown by `league list`.
        id: i64,

        /// Stat field used as the fantasy score.
        #[clap(long, default_value_t = ScoringField::default())]
        scoring: ScoringField,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        FflCompanion::command().debug_assert();
    }

    #[test]
    fn test_parse_stats_top() {
        let cli = FflCompanion::try_parse_from([
            "ffl-companion", "--db", "/tmp/x.db", "stats", "top", "--season", "2024", "-p", "QB",
            "--limit", "5",
        ])
        .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        match cli.command {
            Commands::Stats {
                cmd: StatsCmd::Top { query, position, limit },
            } => {
                assert_eq!(query.season, Season::new(2024));
                assert_eq!(query.scoring.as_str(), "fantasy_points_ppr");
                assert!(!query.json);
                assert_eq!(position, Some(Position::QB));
                assert_eq!(limit, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_averages_defaults() {
        let cli = FflCompanion::try_parse_from([
            "ffl-companion", "stats", "averages", "--season", "2024", "--scoring", "fantasy_points",
        ])
        .unwrap();
        match cli.command {
            Commands::Stats {
                cmd: StatsCmd::Averages { query, position, min_games },
            } => {
                assert_eq!(query.scoring.as_str(), "fantasy_points");
                assert_eq!(position, None);
                assert_eq!(min_games, DEFAULT_MIN_GAMES);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_scoring_field() {
        let result = FflCompanion::try_parse_from([
            "ffl-companion", "stats", "rankings", "--season", "2024", "--scoring", "$.bad",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ingest_requires_year() {
        assert!(FflCompanion::try_parse_from(["ffl-companion", "ingest", "weekly"]).is_err());
        let cli = FflCompanion::try_parse_from([
            "ffl-companion", "ingest", "weekly", "--year", "2023", "--year", "2024",
        ])
        .unwrap();
        match cli.command {
            Commands::Ingest {
                cmd: IngestCmd::Weekly { years },
            } => assert_eq!(years, vec![Season::new(2023), Season::new(2024)]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_user_add_and_global_credentials() {
        let cli = FflCompanion::try_parse_from([
            "ffl-companion", "user", "add", "sam", "--password", "hunter2",
        ])
        .unwrap();
        assert_eq!(cli.password.as_deref(), Some("hunter2"));
        assert_eq!(cli.user, None);
        match cli.command {
            Commands::User {
                cmd: UserCmd::Add { username },
            } => assert_eq!(username, "sam"),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = FflCompanion::try_parse_from([
            "ffl-companion", "league", "list", "--user", "sam", "--password", "pw",
        ])
        .unwrap();
        assert_eq!(cli.user.as_deref(), Some("sam"));
        assert!(matches!(
            cli.command,
            Commands::League {
                cmd: LeagueCmd::List { json: false }
            }
        ));
    }

    #[test]
    fn test_parse_league_add() {
        let cli = FflCompanion::try_parse_from([
            "ffl-companion", "league", "add", "--name", "Work League", "--league-id", "123456",
            "--season", "2024", "--espn-s2", "s2", "--swid", "{ABC}", "--skip-verify",
        ])
        .unwrap();
        match cli.command {
            Commands::League {
                cmd: LeagueCmd::Add { name, league_id, season, credentials, skip_verify },
            } => {
                assert_eq!(name, "Work League");
                assert_eq!(league_id, LeagueId::new(123456));
                assert_eq!(season, Season::new(2024));
                assert_eq!(credentials.swid, "{ABC}");
                assert!(skip_verify);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
