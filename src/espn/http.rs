//! ESPN league requests for private leagues

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::types::LeagueSnapshot;
use crate::core::league_cookie_headers;
use crate::storage::League;
use crate::{CompanionError, Result};

/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views requested for a league snapshot.
pub const LEAGUE_VIEWS: [&str; 3] = ["mTeam", "mRoster", "mSettings"];

pub fn league_url(espn_league_id: u32, espn_year: u16) -> String {
    format!(
        "{FFL_BASE_URL}/seasons/{}/segments/0/leagues/{}",
        espn_year, espn_league_id
    )
}

/// Fetch teams, records and rosters for a registered league.
pub async fn fetch_league(client: &Client, league: &League) -> Result<LeagueSnapshot> {
    fetch_snapshot(
        client,
        league.espn_league_id,
        league.espn_year,
        &league.espn_swid,
        &league.espn_s2,
    )
    .await
}

/// Fetch a league snapshot from raw ESPN coordinates and cookies.
pub async fn fetch_snapshot(
    client: &Client,
    espn_league_id: u32,
    espn_year: u16,
    swid: &str,
    espn_s2: &str,
) -> Result<LeagueSnapshot> {
    let url = league_url(espn_league_id, espn_year);
    let headers = league_cookie_headers(swid, espn_s2)?;
    let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|v| ("view", *v)).collect();

    debug!(league_id = espn_league_id, year = espn_year, "fetching ESPN league");

    let res = client.get(&url).headers(headers).query(&params).send().await?;
    check_auth(res.status())?;

    let value = res.error_for_status()?.json::<Value>().await?;
    Ok(serde_json::from_value(value)?)
}

/// ESPN answers private leagues with 401 or 403 when the cookies are wrong.
fn check_auth(status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(CompanionError::EspnAuth {
            status: status.as_u16(),
        });
    }
    Ok(())
}
