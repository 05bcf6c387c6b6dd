//! Ranking and trend queries over the stat collections

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{PlayerId, Position, Season, Week};
use crate::error::Result;
use rusqlite::{params, types::ValueRef, Row};

/// Number of players kept per position by `positional_rankings`
pub const POSITIONAL_RANKING_LIMIT: u32 = 10;

/// Default threshold of weekly rows for `weekly_averages`
pub const DEFAULT_MIN_GAMES: u32 = 6;

/// Numeric value of the scoring field at `?1`; anything non-numeric reads as NULL.
const SCORING_VALUE: &str = "CASE WHEN json_type(doc, ?1) IN ('integer', 'real')
                                  THEN json_extract(doc, ?1) END";

impl StatsDatabase {
    /// Leaderboard for a season, best first.
    ///
    /// Players without a numeric value for the scoring field sort last; ties
    /// keep insertion order. A `limit` of 0 means no limit.
    pub fn top_scorers(
        &self,
        season: Season,
        position: Option<&str>,
        scoring: &ScoringField,
        limit: u32,
    ) -> Result<Vec<PlayerSeasonSummary>> {
        let query = format!(
            "SELECT player_id,
                    json_extract(doc, '$.player_name'),
                    json_extract(doc, '$.position'),
                    json_extract(doc, '$.recent_team'),
                    json_extract(doc, '$.games'),
                    {SCORING_VALUE} AS points
             FROM seasonal_stats
             WHERE season = ?2
               AND (?3 IS NULL OR json_extract(doc, '$.position') = ?3)
             ORDER BY points DESC, rowid ASC
             LIMIT ?4"
        );

        let sql_limit: i64 = if limit == 0 { -1 } else { i64::from(limit) };

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            params![scoring.json_path(), season.as_u16(), position, sql_limit],
            |row| {
                Ok(PlayerSeasonSummary {
                    player_id: PlayerId::new(row.get::<_, String>(0)?),
                    player_name: text_column(row, 1)?,
                    position: text_column(row, 2)?,
                    recent_team: text_column(row, 3)?,
                    games: integer_column(row, 4)?,
                    points: row.get(5)?,
                })
            },
        )?;

        let mut leaders = Vec::new();
        for row in rows {
            leaders.push(row?);
        }
        Ok(leaders)
    }

    /// A player's week-by-week scoring for a season, in week order
    pub fn weekly_trend(
        &self,
        player_id: &PlayerId,
        season: Season,
        scoring: &ScoringField,
    ) -> Result<Vec<WeekPoint>> {
        let query = format!(
            "SELECT week,
                    json_extract(doc, '$.opponent_team'),
                    {SCORING_VALUE}
             FROM weekly_stats
             WHERE player_id = ?2 AND season = ?3
             ORDER BY week ASC"
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            params![scoring.json_path(), player_id.as_str(), season.as_u16()],
            |row| {
                Ok(WeekPoint {
                    week: Week::new(row.get(0)?),
                    opponent_team: text_column(row, 1)?,
                    points: row.get(2)?,
                })
            },
        )?;

        let mut trend = Vec::new();
        for row in rows {
            trend.push(row?);
        }
        Ok(trend)
    }

    /// Top ten players at each of QB, RB, WR and TE.
    ///
    /// Every ranked position is present in the result, possibly with an empty list.
    pub fn positional_rankings(
        &self,
        season: Season,
        scoring: &ScoringField,
    ) -> Result<PositionalRankings> {
        let mut rankings = PositionalRankings::new();
        for position in Position::RANKED {
            let leaders = self.top_scorers(
                season,
                Some(position.as_str()),
                scoring,
                POSITIONAL_RANKING_LIMIT,
            )?;
            rankings.insert(position, leaders);
        }
        Ok(rankings)
    }

    /// Per-player weekly averages for a season, best average first.
    ///
    /// Weekly rows are grouped by (player_id, player_name, position). Groups
    /// with fewer than `min_games` rows are dropped. Rows without a numeric
    /// scoring value still count toward `games` but not toward the average,
    /// total, max or min. Outputs are rounded half-to-even to one decimal.
    pub fn weekly_averages(
        &self,
        season: Season,
        position: Option<&str>,
        min_games: u32,
        scoring: &ScoringField,
    ) -> Result<Vec<PlayerAverageSummary>> {
        let query = format!(
            "SELECT player_id, player_name, position,
                    AVG(points), TOTAL(points), COUNT(*), MAX(points), MIN(points)
             FROM (
                 SELECT player_id,
                        json_extract(doc, '$.player_name') AS player_name,
                        json_extract(doc, '$.position') AS position,
                        {SCORING_VALUE} AS points,
                        rowid AS rid
                 FROM weekly_stats
                 WHERE season = ?2
                   AND (?3 IS NULL OR json_extract(doc, '$.position') = ?3)
             )
             GROUP BY player_id, player_name, position
             HAVING COUNT(*) >= ?4
             ORDER BY AVG(points) DESC, MIN(rid) ASC"
        );

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            params![scoring.json_path(), season.as_u16(), position, min_games],
            |row| {
                Ok(PlayerAverageSummary {
                    player_id: PlayerId::new(row.get::<_, String>(0)?),
                    player_name: text_column(row, 1)?,
                    position: text_column(row, 2)?,
                    avg_points: row.get::<_, Option<f64>>(3)?.map(round_one_decimal),
                    total_points: round_one_decimal(row.get(4)?),
                    games: row.get(5)?,
                    max_points: row.get::<_, Option<f64>>(6)?.map(round_one_decimal),
                    min_points: row.get::<_, Option<f64>>(7)?.map(round_one_decimal),
                })
            },
        )?;

        let mut averages = Vec::new();
        for row in rows {
            averages.push(row?);
        }
        Ok(averages)
    }
}

/// Round to one decimal place, ties to even
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Read a document attribute as text regardless of its stored JSON type
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Blob(_) => None,
    })
}

/// Read a document attribute as an integer, accepting integral reals
fn integer_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(f) if f.fract() == 0.0 => Some(f as i64),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(21.04), 21.0);
        assert_eq!(round_one_decimal(21.06), 21.1);
        assert_eq!(round_one_decimal(-3.26), -3.3);
        // 0.25 and 0.75 are exact in binary, so the tie rule applies
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.75), 0.8);
    }
}
