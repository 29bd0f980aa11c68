use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Facing direction of the robot. Declaration order is the clockwise turning cycle.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not one of NORTH, EAST, SOUTH, WEST")]
pub struct InvalidCardinal(pub String);

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn rotate(self, quarter_turns: usize) -> Cardinal {
        Cardinal::ALL[(self.index() + quarter_turns) % Cardinal::ALL.len()]
    }

    /// 90° counter-clockwise.
    pub fn left(self) -> Cardinal {
        self.rotate(3)
    }

    /// 90° clockwise.
    pub fn right(self) -> Cardinal {
        self.rotate(1)
    }

    /// 180°.
    pub fn reverse(self) -> Cardinal {
        self.rotate(2)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinal::North => "NORTH",
            Cardinal::East => "EAST",
            Cardinal::South => "SOUTH",
            Cardinal::West => "WEST",
        }
    }
}

impl FromStr for Cardinal {
    type Err = InvalidCardinal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Cardinal::ALL
            .into_iter()
            .find(|cardinal| cardinal.as_str() == upper)
            .ok_or_else(|| InvalidCardinal(s.to_string()))
    }
}

impl Display for Cardinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_cardinal() -> impl Strategy<Value = Cardinal> {
        prop::sample::select(Cardinal::ALL.to_vec())
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Ok(Cardinal::North), "north".parse());
        assert_eq!(Ok(Cardinal::East), "East".parse());
        assert_eq!(Ok(Cardinal::South), " SOUTH ".parse());
        assert_eq!(Ok(Cardinal::West), "wEsT".parse());
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            Err(InvalidCardinal("UP".to_string())),
            "UP".parse::<Cardinal>()
        );
        assert!("".parse::<Cardinal>().is_err());
        assert!("NORTHEAST".parse::<Cardinal>().is_err());
    }

    #[test]
    fn turns_follow_the_compass() {
        assert_eq!(Cardinal::East, Cardinal::North.right());
        assert_eq!(Cardinal::North, Cardinal::West.right());
        assert_eq!(Cardinal::West, Cardinal::North.left());
        assert_eq!(Cardinal::South, Cardinal::West.left());
        assert_eq!(Cardinal::South, Cardinal::North.reverse());
        assert_eq!(Cardinal::West, Cardinal::East.reverse());
    }

    #[test]
    fn serializes_as_uppercase_name() {
        assert_eq!("\"WEST\"", serde_json::to_string(&Cardinal::West).unwrap());
    }

    proptest! {
        #[test]
        fn left_and_right_are_inverse(cardinal in any_cardinal()) {
            prop_assert_eq!(cardinal, cardinal.left().right());
            prop_assert_eq!(cardinal, cardinal.right().left());
        }

        #[test]
        fn four_quarter_turns_return_home(cardinal in any_cardinal()) {
            prop_assert_eq!(cardinal, cardinal.left().left().left().left());
            prop_assert_eq!(cardinal, cardinal.right().right().right().right());
        }

        #[test]
        fn reverse_is_two_right_turns(cardinal in any_cardinal()) {
            prop_assert_eq!(cardinal.right().right(), cardinal.reverse());
            prop_assert_eq!(cardinal, cardinal.reverse().reverse());
        }

        #[test]
        fn display_round_trips_through_parse(cardinal in any_cardinal()) {
            prop_assert_eq!(Ok(cardinal), cardinal.to_string().parse::<Cardinal>());
        }
    }
}
