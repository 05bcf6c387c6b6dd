//! Fantasy football position types and utilities.

use crate::error::CompanionError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// The string form matches what the stat collections store in their
/// `position` attribute (`QB`, `RB`, ... and `D/ST` for team defenses).
///
/// # Examples
///
/// ```rust
/// use ffl_companion::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Positions covered by positional rankings, in display order.
    pub const RANKED: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    /// Convert an ESPN `defaultPositionId` to a Position.
    pub fn try_from_espn_id(id: i64) -> Result<Self, CompanionError> {
        match id {
            0 | 1 => Ok(Position::QB), // ESPN uses both 0 and 1 for QB
            2 => Ok(Position::RB),
            3 => Ok(Position::WR),
            4 | 6 => Ok(Position::TE),
            5 | 17 => Ok(Position::K),
            16 => Ok(Position::DEF),
            _ => Err(CompanionError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "D/ST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            _ => Err(CompanionError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_espn_position_id_mappings() {
        assert_eq!(Position::try_from_espn_id(0).unwrap(), Position::QB);
        assert_eq!(Position::try_from_espn_id(1).unwrap(), Position::QB);
        assert_eq!(Position::try_from_espn_id(2).unwrap(), Position::RB);
        assert_eq!(Position::try_from_espn_id(3).unwrap(), Position::WR);
        assert_eq!(Position::try_from_espn_id(4).unwrap(), Position::TE);
        assert_eq!(Position::try_from_espn_id(5).unwrap(), Position::K);
        assert_eq!(Position::try_from_espn_id(6).unwrap(), Position::TE);
        assert_eq!(Position::try_from_espn_id(16).unwrap(), Position::DEF);
        assert_eq!(Position::try_from_espn_id(17).unwrap(), Position::K);

        assert!(Position::try_from_espn_id(99).is_err());
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::DEF.to_string(), "D/ST");
        assert_eq!("dst".parse::<Position>().unwrap(), Position::DEF);
        assert_eq!(" te ".parse::<Position>().unwrap(), Position::TE);

        match "FLEX".parse::<Position>() {
            Err(CompanionError::InvalidPosition { position }) => assert_eq!(position, "FLEX"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_ranked_positions_are_sorted() {
        let mut sorted = Position::RANKED.to_vec();
        sorted.sort();
        assert_eq!(sorted, Position::RANKED.to_vec());
    }

    #[test]
    fn test_position_serializes_as_label() {
        let json = serde_json::to_string(&Position::DEF).unwrap();
        assert_eq!(json, "\"D/ST\"");
    }
}
