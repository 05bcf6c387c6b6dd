//! nflverse player stats, downloaded as one parquet release asset per season

use async_trait::async_trait;
use parquet::file::reader::{ChunkReader, FileReader, SerializedFileReader};
use parquet::record::Field;
use rayon::prelude::*;
use reqwest::Client;
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use super::pipeline::StatSource;
use super::table::{Cell, StatRow, StatTable};
use crate::{
    cli::types::{PlayerId, Season},
    config::AppConfig,
    core::build_client,
    error::Result,
};

/// Weekly columns that have no meaning once weeks are summed
const WEEK_ONLY_COLUMNS: [&str; 3] = ["week", "opponent_team", "season_type"];

/// Only regular-season weeks roll up into season totals
const REGULAR_SEASON: &str = "REG";

pub struct NflverseSource {
    client: Client,
    url_template: String,
}

impl NflverseSource {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config.http_timeout)?,
            url_template: config.stats_url_template.clone(),
        })
    }

    /// Release asset URL for one season
    pub fn url_for(&self, season: Season) -> String {
        self.url_template
            .replace("{year}", &season.as_u16().to_string())
    }

    /// Download every requested season, then decode the files in parallel
    async fn fetch_weekly_rows(&self, years: &[Season]) -> Result<StatTable> {
        let years: BTreeSet<Season> = years.iter().copied().collect();

        let mut bodies = Vec::with_capacity(years.len());
        for season in years {
            let url = self.url_for(season);
            info!(%season, %url, "downloading player stats");
            let body = self
                .client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?;
            bodies.push(body);
        }

        let tables = bodies
            .into_par_iter()
            .map(decode_parquet)
            .collect::<Result<Vec<StatTable>>>()?;

        let rows: StatTable = tables.into_iter().flatten().collect();
        info!(rows = rows.len(), "decoded player stats");
        Ok(rows)
    }
}

#[async_trait]
impl StatSource for NflverseSource {
    async fn fetch_seasonal(&self, years: &[Season]) -> Result<StatTable> {
        let weekly = self.fetch_weekly_rows(years).await?;
        Ok(summarize_seasons(&weekly))
    }

    async fn fetch_weekly(&self, years: &[Season]) -> Result<StatTable> {
        self.fetch_weekly_rows(years).await
    }
}

/// Decode every row of a parquet file into stat rows
pub fn decode_parquet<R: ChunkReader + 'static>(reader: R) -> Result<StatTable> {
    let reader = SerializedFileReader::new(reader)?;
    let mut rows: StatTable = Vec::new();
    for row in reader.get_row_iter(None)? {
        let row = row?;
        rows.push(
            row.get_column_iter()
                .map(|(column, field)| (column.clone(), field_to_cell(field)))
                .collect(),
        );
    }
    Ok(rows)
}

fn field_to_cell(field: &Field) -> Cell {
    match field {
        Field::Null => Cell::Null,
        Field::Bool(b) => Cell::Bool(*b),
        Field::Byte(v) => Cell::Int(i64::from(*v)),
        Field::Short(v) => Cell::Int(i64::from(*v)),
        Field::Int(v) => Cell::Int(i64::from(*v)),
        Field::Long(v) => Cell::Int(*v),
        Field::UByte(v) => Cell::Int(i64::from(*v)),
        Field::UShort(v) => Cell::Int(i64::from(*v)),
        Field::UInt(v) => Cell::Int(i64::from(*v)),
        Field::ULong(v) => i64::try_from(*v).map(Cell::Int).unwrap_or(Cell::Float(*v as f64)),
        Field::Float(v) => Cell::Float(f64::from(*v)),
        Field::Double(v) => Cell::Float(*v),
        Field::Str(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

/// Roll weekly rows up into one row per (player_id, season).
///
/// Regular-season weeks only. Numeric columns are summed skipping NaN and
/// null, `games` counts the weeks, and text columns take the value from the
/// player's latest week.
pub fn summarize_seasons(weekly: &[StatRow]) -> StatTable {
    let mut groups: BTreeMap<(PlayerId, u16), Vec<&StatRow>> = BTreeMap::new();
    for row in weekly {
        let regular = match row.get("season_type") {
            Some(Cell::Text(kind)) => kind == REGULAR_SEASON,
            _ => true,
        };
        if !regular {
            continue;
        }
        if let (Some(player_id), Some(season)) = (row.player_key(), row.number_key("season")) {
            groups.entry((player_id, season)).or_default().push(row);
        }
    }

    groups
        .into_iter()
        .map(|((player_id, season), mut rows)| {
            rows.sort_by_key(|row| row.get("week").and_then(Cell::as_f64).unwrap_or(0.0) as i64);
            summarize_player(player_id, season, &rows)
        })
        .collect()
}

fn summarize_player(player_id: PlayerId, season: u16, weeks: &[&StatRow]) -> StatRow {
    let mut totals: BTreeMap<String, Cell> = BTreeMap::new();
    let mut latest: BTreeMap<String, Cell> = BTreeMap::new();

    for row in weeks {
        for (column, cell) in row.iter() {
            if column == "player_id" || column == "season" || WEEK_ONLY_COLUMNS.contains(&column.as_str()) {
                continue;
            }
            match cell {
                Cell::Int(_) | Cell::Float(_) => {
                    let total = totals.entry(column.clone()).or_insert(Cell::Int(0));
                    *total = add_cells(total, cell);
                }
                Cell::Null => {}
                other => {
                    latest.insert(column.clone(), other.clone());
                }
            }
        }
    }

    let mut summary: StatRow = latest.into_iter().chain(totals).collect();
    summary.insert("player_id", Cell::Text(player_id.0));
    summary.insert("season", Cell::Int(i64::from(season)));
    summary.insert("games", Cell::Int(weeks.len() as i64));
    summary
}

fn add_cells(total: &Cell, value: &Cell) -> Cell {
    match (total, value) {
        (_, Cell::Float(f)) if f.is_nan() => total.clone(),
        (Cell::Int(a), Cell::Int(b)) => Cell::Int(a + b),
        _ => Cell::Float(total.as_f64().unwrap_or(0.0) + value.as_f64().unwrap_or(0.0)),
    }
}
