use fxhash::FxHashSet;

use crate::coord::{Coord, Position};

pub const DEFAULT_SIZE: Coord = 5;

/// Anything a robot can stand on.
pub trait Tabletop {
    /// Edge length of the square table.
    fn size(&self) -> Coord;

    fn within_boundaries(&self, position: Position) -> bool {
        let size = self.size();
        (0..size).contains(&position.x()) && (0..size).contains(&position.y())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: Coord,
}

impl Board {
    pub fn new(size: Coord) -> Self {
        Board { size }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_SIZE)
    }
}

impl Tabletop for Board {
    fn size(&self) -> Coord {
        self.size
    }
}

/// A board that also remembers which cells hold a block.
///
/// Boundaries are not checked here; callers test `within_boundaries` before occupying.
#[derive(Debug, Clone, Default)]
pub struct ExtendedBoard {
    board: Board,
    occupied: FxHashSet<Position>,
}

impl ExtendedBoard {
    pub fn new(size: Coord) -> Self {
        ExtendedBoard {
            board: Board::new(size),
            occupied: FxHashSet::default(),
        }
    }

    pub fn occupy(&mut self, position: Position) {
        self.occupied.insert(position);
    }

    pub fn release(&mut self, position: Position) {
        self.occupied.remove(&position);
    }

    pub fn space_empty(&self, position: Position) -> bool {
        !self.occupied.contains(&position)
    }

    pub fn occupied_spaces(&self) -> impl Iterator<Item = &Position> {
        self.occupied.iter()
    }
}

impl Tabletop for ExtendedBoard {
    fn size(&self) -> Coord {
        self.board.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_board_is_five_by_five() {
        let board = Board::default();
        assert_eq!(5, board.size());
        assert!(board.within_boundaries(Position::new(0, 0)));
        assert!(board.within_boundaries(Position::new(4, 4)));
        assert!(!board.within_boundaries(Position::new(5, 4)));
        assert!(!board.within_boundaries(Position::new(4, 5)));
        assert!(!board.within_boundaries(Position::new(-1, 0)));
        assert!(!board.within_boundaries(Position::new(0, -1)));
    }

    #[test]
    fn extended_board_starts_empty() {
        let board = ExtendedBoard::default();
        assert_eq!(DEFAULT_SIZE, board.size());
        assert_eq!(0, board.occupied_spaces().count());
    }

    #[test]
    fn occupy_marks_a_space() {
        let mut board = ExtendedBoard::default();
        let position = Position::new(1, 1);
        board.occupy(position);

        assert!(!board.space_empty(position));
        assert!(board.space_empty(Position::new(2, 1)));
        assert_eq!(vec![&position], board.occupied_spaces().collect::<Vec<_>>());
    }

    #[test]
    fn occupy_is_idempotent() {
        let mut board = ExtendedBoard::default();
        board.occupy(Position::new(1, 1));
        board.occupy(Position::new(1, 1));
        assert_eq!(1, board.occupied_spaces().count());
    }

    #[test]
    fn release_frees_a_space() {
        let mut board = ExtendedBoard::default();
        let position = Position::new(1, 1);
        board.occupy(position);
        board.release(position);
        assert!(board.space_empty(position));

        // releasing an empty space changes nothing
        board.release(Position::new(3, 3));
        assert_eq!(0, board.occupied_spaces().count());
    }

    proptest! {
        #[test]
        fn boundaries_match_the_square(size in 1..20i32, x in -30..30i32, y in -30..30i32) {
            let expected = 0 <= x && x < size && 0 <= y && y < size;
            let position = Position::new(x, y);
            prop_assert_eq!(expected, Board::new(size).within_boundaries(position));
            prop_assert_eq!(expected, ExtendedBoard::new(size).within_boundaries(position));
        }
    }
}
