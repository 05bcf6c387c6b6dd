//! Ingest command implementation

use tracing::info;

use crate::{
    config::AppConfig,
    ingest::{ingest_seasonal, ingest_weekly, NflverseSource},
    storage::StatsDatabase,
    Result, Season,
};

/// Handle `ingest seasonal`
pub async fn handle_ingest_seasonal(
    config: &AppConfig,
    db: &mut StatsDatabase,
    years: &[Season],
) -> Result<()> {
    let source = NflverseSource::new(config)?;
    println!("Fetching seasonal stats for {}...", join_years(years));

    let written = ingest_seasonal(db, &source, years).await?;
    info!(written, "seasonal ingest complete");
    println!("✓ Stored {} seasonal records", written);
    Ok(())
}

/// Handle `ingest weekly`
pub async fn handle_ingest_weekly(
    config: &AppConfig,
    db: &mut StatsDatabase,
    years: &[Season],
) -> Result<()> {
    let source = NflverseSource::new(config)?;
    println!("Fetching weekly stats for {}...", join_years(years));

    let written = ingest_weekly(db, &source, years).await?;
    info!(written, "weekly ingest complete");
    println!("✓ Stored {} weekly records", written);
    Ok(())
}

fn join_years(years: &[Season]) -> String {
    years
        .iter()
        .map(Season::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
