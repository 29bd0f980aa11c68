use serde::{Deserialize, Serialize};

use crate::cardinal::Cardinal;

pub type Coord = i32;

/// A cell on the tabletop. Range checks are the board's job, not this type's.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: Coord,
    y: Coord,
}

impl Position {
    pub fn new(x: Coord, y: Coord) -> Self {
        Position { x, y }
    }

    pub fn x(&self) -> Coord {
        self.x
    }

    pub fn y(&self) -> Coord {
        self.y
    }

    /// The adjacent cell one unit away in the given direction.
    pub fn neighbour(&self, cardinal: Cardinal) -> Position {
        let Position { x, y } = *self;
        match cardinal {
            Cardinal::North => Position::new(x, y + 1),
            Cardinal::East => Position::new(x + 1, y),
            Cardinal::South => Position::new(x, y - 1),
            Cardinal::West => Position::new(x - 1, y),
        }
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((x, y): (Coord, Coord)) -> Self {
        Position::new(x, y)
    }
}
