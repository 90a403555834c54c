//! Fantasy football position types.

use crate::error::RosterError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Positions that survive the roster filter.
///
/// Sleeper reports positions as upper-case symbols. Only these six are
/// fantasy-relevant; everything else (LS, P, OL, DL, ...) is dropped.
///
/// # Examples
///
/// ```rust
/// use sleeper_roster::Position;
///
/// let qb: Position = "QB".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::DEF.to_string(), "DEF");
/// assert!("qb".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
}

impl Position {
    /// Every valid position, in display order.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DEF,
    ];

    /// The symbol Sleeper uses for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
        }
    }

    /// True for the team-defense pseudo-position.
    pub fn is_team_defense(&self) -> bool {
        matches!(self, Position::DEF)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the Sleeper symbols.
impl FromStr for Position {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| RosterError::InvalidPosition {
                position: s.to_string(),
            })
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_symbol_round_trip() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>().unwrap(), position);
        }
    }

    #[test]
    fn test_position_parse_is_case_sensitive() {
        assert!("qb".parse::<Position>().is_err());
        assert!("Def".parse::<Position>().is_err());
        assert!(" QB".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_rejects_non_fantasy_symbols() {
        for symbol in ["LS", "P", "OL", "DL", "LB", "DB", "FLEX", "D/ST", ""] {
            match symbol.parse::<Position>() {
                Err(RosterError::InvalidPosition { position }) => assert_eq!(position, symbol),
                other => panic!("Expected InvalidPosition for {symbol:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_position_serializes_as_symbol() {
        let json = serde_json::to_string(&Position::DEF).unwrap();
        assert_eq!(json, r#""DEF""#);
    }

    #[test]
    fn test_only_def_is_team_defense() {
        let defenses: Vec<_> = Position::ALL
            .into_iter()
            .filter(Position::is_team_defense)
            .collect();
        assert_eq!(defenses, vec![Position::DEF]);
    }
}
