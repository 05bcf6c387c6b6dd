//! Document upserts and lookups for the stat collections

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{PlayerId, Season, Week};
use crate::error::Result;
use rusqlite::{params, OptionalExtension};
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl StatsDatabase {
    /// Insert or replace season documents keyed on (player_id, season).
    ///
    /// A matching document is replaced wholesale; its creation time and
    /// position in insertion order are kept. Returns the number of documents
    /// written.
    pub fn upsert_seasonal_documents(&mut self, docs: &[SeasonalStatDocument]) -> Result<usize> {
        let now = unix_now();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO seasonal_stats (player_id, season, doc, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 ON CONFLICT (player_id, season)
                 DO UPDATE SET doc = excluded.doc, updated_at = excluded.updated_at",
            )?;
            for doc in docs {
                let body = serde_json::to_string(&doc.doc)?;
                stmt.execute(params![doc.player_id.as_str(), doc.season.as_u16(), body, now])?;
            }
        }
        tx.commit()?;
        Ok(docs.len())
    }

    /// Insert or replace week documents keyed on (player_id, season, week).
    pub fn upsert_weekly_documents(&mut self, docs: &[WeeklyStatDocument]) -> Result<usize> {
        let now = unix_now();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO weekly_stats (player_id, season, week, doc, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                 ON CONFLICT (player_id, season, week)
                 DO UPDATE SET doc = excluded.doc, updated_at = excluded.updated_at",
            )?;
            for doc in docs {
                let body = serde_json::to_string(&doc.doc)?;
                stmt.execute(params![
                    doc.player_id.as_str(),
                    doc.season.as_u16(),
                    doc.week.as_u16(),
                    body,
                    now
                ])?;
            }
        }
        tx.commit()?;
        Ok(docs.len())
    }

    /// Fetch the stored season document for a player
    pub fn get_seasonal_document(
        &self,
        player_id: &PlayerId,
        season: Season,
    ) -> Result<Option<Map<String, Value>>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT doc FROM seasonal_stats WHERE player_id = ? AND season = ?",
                params![player_id.as_str(), season.as_u16()],
                |row| row.get(0),
            )
            .optional()?;
        parse_document(body)
    }

    /// Fetch the stored week document for a player
    pub fn get_weekly_document(
        &self,
        player_id: &PlayerId,
        season: Season,
        week: Week,
    ) -> Result<Option<Map<String, Value>>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT doc FROM weekly_stats WHERE player_id = ? AND season = ? AND week = ?",
                params![player_id.as_str(), season.as_u16(), week.as_u16()],
                |row| row.get(0),
            )
            .optional()?;
        parse_document(body)
    }

    /// Number of season documents, optionally restricted to one season
    pub fn count_seasonal_documents(&self, season: Option<Season>) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM seasonal_stats WHERE ?1 IS NULL OR season = ?1",
            params![season.map(|s| s.as_u16())],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Number of week documents, optionally restricted to one season
    pub fn count_weekly_documents(&self, season: Option<Season>) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM weekly_stats WHERE ?1 IS NULL OR season = ?1",
            params![season.map(|s| s.as_u16())],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

fn parse_document(body: Option<String>) -> Result<Option<Map<String, Value>>> {
    match body {
        Some(body) => Ok(Some(serde_json::from_str(&body)?)),
        None => Ok(None),
    }
}
