//! ESPN Fantasy Football league access
//!
//! - `http`: league snapshot requests with private-league cookies
//! - `types`: serde models of the league payload
//! - `roster`: standings and lineup views

pub mod http;
pub mod roster;
pub mod types;

pub use http::{fetch_league, fetch_snapshot};
pub use roster::{split_roster, standings, RosterPlayer, RosterView};
pub use types::{LeagueSnapshot, Team};
