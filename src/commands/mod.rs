//! Command implementations for the ffl-companion CLI

pub mod ingest;
pub mod league;
pub mod stats;
pub mod user;

use serde::Serialize;

use crate::Result;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an optional point total for a text table.
pub(crate) fn fmt_points(points: Option<f64>) -> String {
    match points {
        Some(p) => format!("{:.1}", p),
        None => "-".to_string(),
    }
}

pub(crate) fn fmt_text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_points() {
        assert_eq!(fmt_points(Some(12.345)), "12.3");
        assert_eq!(fmt_points(Some(0.0)), "0.0");
        assert_eq!(fmt_points(None), "-");
    }

    #[test]
    fn test_fmt_text() {
        assert_eq!(fmt_text(Some("KC")), "KC");
        assert_eq!(fmt_text(None), "-");
    }
}
