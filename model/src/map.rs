use std::fmt::Display;

use fxhash::FxHashMap;

use crate::{
    block::Block,
    cardinal::Cardinal,
    coord::{Coord, Position},
};

pub const EMPTY_GLYPH: char = '.';
pub const BLOCK_GLYPH: char = 'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Robot(Cardinal),
    Block,
}

impl From<&MapCell> for char {
    fn from(cell: &MapCell) -> char {
        match cell {
            MapCell::Robot(cardinal) => robot_glyph(*cardinal),
            MapCell::Block => BLOCK_GLYPH,
        }
    }
}

pub fn robot_glyph(cardinal: Cardinal) -> char {
    match cardinal {
        Cardinal::North => '^',
        Cardinal::East => '>',
        Cardinal::South => 'v',
        Cardinal::West => '<',
    }
}

/// A snapshot of the tabletop, drawn with the north edge on top.
#[derive(Debug, Clone)]
pub struct Map {
    size: Coord,
    cells: FxHashMap<Position, MapCell>,
}

impl Map {
    pub fn new<'a>(
        size: Coord,
        robot: Option<(Position, Cardinal)>,
        blocks: impl IntoIterator<Item = &'a Block>,
    ) -> Self {
        let mut cells: FxHashMap<Position, MapCell> = blocks
            .into_iter()
            .map(|block| (block.position(), MapCell::Block))
            .collect();

        if let Some((position, cardinal)) = robot {
            cells.insert(position, MapCell::Robot(cardinal));
        }

        Map { size, cells }
    }

    pub fn get_cell(&self, position: Position) -> Option<&MapCell> {
        self.cells.get(&position)
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.size).rev() {
            for x in 0..self.size {
                if x > 0 {
                    f.write_str(" ")?;
                }
                let c = self
                    .get_cell(Position::new(x, y))
                    .map(|cell| cell.into())
                    .unwrap_or(EMPTY_GLYPH);
                f.write_fmt(format_args!("{}", c))?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}
