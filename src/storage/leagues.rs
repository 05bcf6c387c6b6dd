//! Registered ESPN leagues, each owned by one user

use super::{models::*, queries::unix_now, schema::StatsDatabase};
use crate::error::{CompanionError, Result};
use rusqlite::{params, ErrorCode, OptionalExtension, Row};
use tracing::info;

const LEAGUE_COLUMNS: &str =
    "id, user_id, name, espn_league_id, espn_year, espn_s2, espn_swid, created_at, updated_at";

impl StatsDatabase {
    /// Register a league; the (owner, ESPN league, year) triple must be new
    pub fn create_league(&mut self, league: &NewLeague) -> Result<League> {
        let now = unix_now();
        let inserted = self.conn.execute(
            "INSERT INTO leagues (user_id, name, espn_league_id, espn_year, espn_s2, espn_swid, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                league.user_id,
                league.name,
                league.espn_league_id,
                league.espn_year,
                league.espn_s2,
                league.espn_swid,
                now,
                now
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                // Unknown owners trip the foreign key, duplicates the unique key
                if self.find_user(league.user_id)?.is_none() {
                    return Err(CompanionError::InvalidCredentials);
                }
                return Err(CompanionError::LeagueExists {
                    espn_league_id: league.espn_league_id,
                    espn_year: league.espn_year,
                });
            }
            Err(e) => return Err(e.into()),
        }

        let id = self.conn.last_insert_rowid();
        info!(id, user_id = league.user_id, espn_league_id = league.espn_league_id, "registered league");
        self.league_by_id(id)?
            .ok_or(CompanionError::LeagueNotFound { id })
    }

    /// A user's leagues in registration order
    pub fn list_leagues(&self, user_id: i64) -> Result<Vec<League>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LEAGUE_COLUMNS} FROM leagues WHERE user_id = ? ORDER BY id"
        ))?;
        let rows = stmt.query_map(params![user_id], row_to_league)?;

        let mut leagues = Vec::new();
        for row in rows {
            leagues.push(row?);
        }
        Ok(leagues)
    }

    /// Look up a league on behalf of `user_id`.
    ///
    /// `Ok(None)` when no such league exists; `LeagueForbidden` when it
    /// belongs to someone else.
    pub fn find_league(&self, user_id: i64, id: i64) -> Result<Option<League>> {
        match self.league_by_id(id)? {
            Some(league) if league.user_id != user_id => Err(CompanionError::LeagueForbidden { id }),
            found => Ok(found),
        }
    }

    /// [`find_league`](Self::find_league) with a missing league as `LeagueNotFound`
    pub fn user_league(&self, user_id: i64, id: i64) -> Result<League> {
        self.find_league(user_id, id)?
            .ok_or(CompanionError::LeagueNotFound { id })
    }

    /// Apply a partial update to one of the user's leagues
    pub fn update_league(&mut self, user_id: i64, id: i64, update: &LeagueUpdate) -> Result<League> {
        self.user_league(user_id, id)?;
        self.conn.execute(
            "UPDATE leagues
             SET name = COALESCE(?, name),
                 espn_s2 = COALESCE(?, espn_s2),
                 espn_swid = COALESCE(?, espn_swid),
                 updated_at = ?
             WHERE id = ?",
            params![update.name, update.espn_s2, update.espn_swid, unix_now(), id],
        )?;
        self.user_league(user_id, id)
    }

    /// Remove one of the user's leagues; returns whether anything was deleted
    pub fn delete_league(&mut self, user_id: i64, id: i64) -> Result<bool> {
        if self.find_league(user_id, id)?.is_none() {
            return Ok(false);
        }
        let deleted = self
            .conn
            .execute("DELETE FROM leagues WHERE id = ?", params![id])?;
        if deleted > 0 {
            info!(id, user_id, "deleted league");
        }
        Ok(deleted > 0)
    }

    fn league_by_id(&self, id: i64) -> Result<Option<League>> {
        let league = self
            .conn
            .query_row(
                &format!("SELECT {LEAGUE_COLUMNS} FROM leagues WHERE id = ?"),
                params![id],
                row_to_league,
            )
            .optional()?;
        Ok(league)
    }
}

fn row_to_league(row: &Row<'_>) -> rusqlite::Result<League> {
    Ok(League {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        espn_league_id: row.get(3)?,
        espn_year: row.get(4)?,
        espn_s2: row.get(5)?,
        espn_swid: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
