//! Idempotent import of season and week stat tables into the store

use async_trait::async_trait;
use tracing::{debug, info};

use super::table::StatTable;
use crate::{
    cli::types::{Season, Week},
    error::Result,
    storage::{SeasonalStatDocument, StatsDatabase, WeeklyStatDocument},
};

/// Upstream provider of player stat tables.
///
/// Errors from either fetch are not handled by the pipeline; they abort the
/// ingestion run.
#[async_trait]
pub trait StatSource: Send + Sync {
    /// Season-aggregated player stats for the given years
    async fn fetch_seasonal(&self, years: &[Season]) -> Result<StatTable>;

    /// Week-level player stats for the given years
    async fn fetch_weekly(&self, years: &[Season]) -> Result<StatTable>;
}

/// Fetch season stats for `years` and upsert them keyed on (player_id, season).
///
/// Returns the number of rows written. Rows without a usable `player_id` or
/// `season` are dropped without being counted or reported.
pub async fn ingest_seasonal<S>(db: &mut StatsDatabase, source: &S, years: &[Season]) -> Result<usize>
where
    S: StatSource + ?Sized,
{
    info!(?years, "fetching seasonal stats");
    let table = source.fetch_seasonal(years).await?;
    if table.is_empty() {
        info!("seasonal fetch returned no rows");
        return Ok(0);
    }
    store_seasonal_rows(db, table)
}

/// Fetch week stats for `years` and upsert them keyed on (player_id, season, week).
pub async fn ingest_weekly<S>(db: &mut StatsDatabase, source: &S, years: &[Season]) -> Result<usize>
where
    S: StatSource + ?Sized,
{
    info!(?years, "fetching weekly stats");
    let table = source.fetch_weekly(years).await?;
    if table.is_empty() {
        info!("weekly fetch returned no rows");
        return Ok(0);
    }
    store_weekly_rows(db, table)
}

/// Normalize and upsert already-fetched season rows
pub fn store_seasonal_rows(db: &mut StatsDatabase, table: StatTable) -> Result<usize> {
    let total = table.len();
    let mut docs = Vec::with_capacity(total);

    for mut row in table {
        row.replace_nan_with_null();
        let (Some(player_id), Some(season)) = (row.player_key(), row.number_key("season")) else {
            continue;
        };

        let mut doc = row.to_document();
        doc.insert("player_id".to_string(), player_id.as_str().into());
        doc.insert("season".to_string(), season.into());
        docs.push(SeasonalStatDocument {
            player_id,
            season: Season::new(season),
            doc,
        });
    }

    let written = db.upsert_seasonal_documents(&docs)?;
    debug!(skipped = total - written, "rows without player_id/season");
    info!(written, "ingested seasonal stats");
    Ok(written)
}

/// Normalize and upsert already-fetched week rows
pub fn store_weekly_rows(db: &mut StatsDatabase, table: StatTable) -> Result<usize> {
    let total = table.len();
    let mut docs = Vec::with_capacity(total);

    for mut row in table {
        row.replace_nan_with_null();
        let (Some(player_id), Some(season), Some(week)) = (
            row.player_key(),
            row.number_key("season"),
            row.number_key("week"),
        ) else {
            continue;
        };

        let mut doc = row.to_document();
        doc.insert("player_id".to_string(), player_id.as_str().into());
        doc.insert("season".to_string(), season.into());
        doc.insert("week".to_string(), week.into());
        docs.push(WeeklyStatDocument {
            player_id,
            season: Season::new(season),
            week: Week::new(week),
            doc,
        });
    }

    let written = db.upsert_weekly_documents(&docs)?;
    debug!(skipped = total - written, "rows without player_id/season/week");
    info!(written, "ingested weekly stats");
    Ok(written)
}
