//! Type-safe wrappers for seasons, weeks, positions and identifiers.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId};
pub use position::Position;
pub use time::{Season, Week};
