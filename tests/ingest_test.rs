//! Integration tests for the ingestion pipeline against an in-memory store

use async_trait::async_trait;
use ffl_companion::{
    ingest::{ingest_seasonal, ingest_weekly, Cell, StatRow, StatSource, StatTable},
    storage::StatsDatabase,
    CompanionError, PlayerId, Result, Season, Week,
};
use serde_json::{json, Value};

/// In-memory stat source returning canned tables
#[derive(Default)]
struct FakeSource {
    seasonal: StatTable,
    weekly: StatTable,
    fail: bool,
}

#[async_trait]
impl StatSource for FakeSource {
    async fn fetch_seasonal(&self, years: &[Season]) -> Result<StatTable> {
        if self.fail {
            return Err(CompanionError::Config {
                message: "upstream unavailable".into(),
            });
        }
        Ok(self
            .seasonal
            .iter()
            .filter(|row| matches!(row.get("season"), Some(Cell::Int(s)) if years.iter().any(|y| i64::from(y.as_u16()) == *s)))
            .cloned()
            .collect())
    }

    async fn fetch_weekly(&self, _years: &[Season]) -> Result<StatTable> {
        if self.fail {
            return Err(CompanionError::Config {
                message: "upstream unavailable".into(),
            });
        }
        Ok(self.weekly.clone())
    }
}

fn season_row(player_id: &str, name: &str, position: &str, points: f64) -> StatRow {
    StatRow::new()
        .with("player_id", player_id)
        .with("player_name", name)
        .with("position", position)
        .with("season", 2024i64)
        .with("fantasy_points_ppr", points)
}

fn week_row(player_id: &str, week: i64, points: f64) -> StatRow {
    StatRow::new()
        .with("player_id", player_id)
        .with("player_name", "Travis Kelce")
        .with("position", "TE")
        .with("season", 2024i64)
        .with("week", week)
        .with("fantasy_points_ppr", points)
}

#[tokio::test]
async fn test_ingest_seasonal_is_idempotent() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let source = FakeSource {
        seasonal: vec![
            season_row("p1", "Patrick Mahomes", "QB", 350.0),
            season_row("p2", "Josh Allen", "QB", 330.0),
        ],
        ..Default::default()
    };
    let years = [Season::new(2024)];

    assert_eq!(ingest_seasonal(&mut db, &source, &years).await.unwrap(), 2);
    assert_eq!(ingest_seasonal(&mut db, &source, &years).await.unwrap(), 2);
    assert_eq!(db.count_seasonal_documents(None).unwrap(), 2);
}

#[tokio::test]
async fn test_ingest_seasonal_replaces_changed_rows() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let years = [Season::new(2024)];

    let first = FakeSource {
        seasonal: vec![season_row("p1", "Patrick Mahomes", "QB", 350.0).with("passing_tds", 30i64)],
        ..Default::default()
    };
    ingest_seasonal(&mut db, &first, &years).await.unwrap();

    let second = FakeSource {
        seasonal: vec![season_row("p1", "Patrick Mahomes", "QB", 361.5)],
        ..Default::default()
    };
    ingest_seasonal(&mut db, &second, &years).await.unwrap();

    let doc = db
        .get_seasonal_document(&PlayerId::new("p1"), Season::new(2024))
        .unwrap()
        .unwrap();
    assert_eq!(doc["fantasy_points_ppr"], json!(361.5));
    assert!(!doc.contains_key("passing_tds"));
    assert_eq!(db.count_seasonal_documents(None).unwrap(), 1);
}

#[tokio::test]
async fn test_ingest_skips_rows_missing_keys() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let source = FakeSource {
        weekly: vec![
            week_row("p5", 1, 12.0),
            week_row("", 2, 9.0),
            week_row("p5", 0, 9.0),
            week_row("p5", 3, 15.0).with("season", Cell::Null),
            StatRow::new().with("player_name", "No Keys"),
        ],
        ..Default::default()
    };

    let written = ingest_weekly(&mut db, &source, &[Season::new(2024)]).await.unwrap();
    assert_eq!(written, 1);
    assert_eq!(db.count_weekly_documents(None).unwrap(), 1);
}

#[tokio::test]
async fn test_ingest_weekly_converts_nan_to_null() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let source = FakeSource {
        weekly: vec![week_row("p5", 1, 12.0).with("target_share", f64::NAN)],
        ..Default::default()
    };
    ingest_weekly(&mut db, &source, &[Season::new(2024)]).await.unwrap();

    let doc = db
        .get_weekly_document(&PlayerId::new("p5"), Season::new(2024), Week::new(1))
        .unwrap()
        .unwrap();
    assert_eq!(doc.get("target_share"), Some(&Value::Null));
    assert_eq!(doc["player_id"], json!("p5"));
    assert_eq!(doc["week"], json!(1));
}

#[tokio::test]
async fn test_ingest_accepts_float_keys() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let source = FakeSource {
        weekly: vec![week_row("p5", 1, 12.0).with("season", 2024.0).with("week", 2.0)],
        ..Default::default()
    };
    assert_eq!(ingest_weekly(&mut db, &source, &[Season::new(2024)]).await.unwrap(), 1);

    let doc = db
        .get_weekly_document(&PlayerId::new("p5"), Season::new(2024), Week::new(2))
        .unwrap()
        .unwrap();
    assert_eq!(doc["season"], json!(2024));
    assert_eq!(doc["week"], json!(2));
}

#[tokio::test]
async fn test_ingest_empty_fetch_writes_nothing() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let source = FakeSource::default();

    assert_eq!(ingest_seasonal(&mut db, &source, &[Season::new(2019)]).await.unwrap(), 0);
    assert_eq!(ingest_weekly(&mut db, &source, &[Season::new(2019)]).await.unwrap(), 0);
    assert_eq!(db.count_seasonal_documents(None).unwrap(), 0);
    assert_eq!(db.count_weekly_documents(None).unwrap(), 0);
}

#[tokio::test]
async fn test_ingest_propagates_fetch_errors() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let source = FakeSource {
        fail: true,
        ..Default::default()
    };

    let result = ingest_weekly(&mut db, &source, &[Season::new(2024)]).await;
    assert!(matches!(result, Err(CompanionError::Config { .. })));
    assert_eq!(db.count_weekly_documents(None).unwrap(), 0);
}

#[tokio::test]
async fn test_ingest_through_trait_object() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let source: Box<dyn StatSource> = Box::new(FakeSource {
        seasonal: vec![season_row("p3", "Derrick Henry", "RB", 280.0)],
        ..Default::default()
    });

    let written = ingest_seasonal(&mut db, source.as_ref(), &[Season::new(2024)])
        .await
        .unwrap();
    assert_eq!(written, 1);
    assert_eq!(db.count_seasonal_documents(Some(Season::new(2024))).unwrap(), 1);
    assert_eq!(db.count_seasonal_documents(Some(Season::new(2023))).unwrap(), 0);
}
