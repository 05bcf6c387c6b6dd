//! Time-related types for NFL seasons and weeks.

use crate::error::{CompanionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Week numbers (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = CompanionError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "2024".parse().unwrap();
        assert_eq!(season, Season::new(2024));
        assert_eq!(season.to_string(), "2024");
        assert!(" 2023 ".parse::<Season>().is_ok());
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_week_ordering() {
        let mut weeks = vec![Week::new(3), Week::new(1), Week::new(2)];
        weeks.sort();
        assert_eq!(weeks, vec![Week::new(1), Week::new(2), Week::new(3)]);
        assert_eq!("17".parse::<Week>().unwrap().as_u16(), 17);
    }
}
