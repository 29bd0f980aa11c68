use serde::{Deserialize, Serialize};

use crate::coord::Position;

/// An obstacle dropped by the robot. Its position never changes.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    position: Position,
}

impl Block {
    pub fn new(position: Position) -> Self {
        Block { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
