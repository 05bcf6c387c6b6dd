//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Client;
use std::time::Duration;

/// Build the cookie headers ESPN expects for a private league.
///
/// The SWID is sent with its surrounding braces; they are added when missing.
pub fn league_cookie_headers(swid: &str, espn_s2: &str) -> Result<HeaderMap> {
    let swid = swid.trim();
    let swid = if swid.starts_with('{') {
        swid.to_string()
    } else {
        format!("{{{}}}", swid)
    };

    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let cookie = format!("SWID={}; espn_s2={}", swid, espn_s2.trim());
    h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    Ok(h)
}

/// Shared HTTP client for ESPN requests
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("ffl-companion/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;
    Ok(client)
}
