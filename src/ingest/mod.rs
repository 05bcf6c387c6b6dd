//! Player stat ingestion
//!
//! - `table`: loosely-typed rows as the upstream source delivers them
//! - `pipeline`: NaN normalization and keyed upserts into the store
//! - `nflverse`: the production stat source

pub mod nflverse;
pub mod pipeline;
pub mod table;

pub use nflverse::NflverseSource;
pub use pipeline::{ingest_seasonal, ingest_weekly, store_seasonal_rows, store_weekly_rows, StatSource};
pub use table::{Cell, StatRow, StatTable};
