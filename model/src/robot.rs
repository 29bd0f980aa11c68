use crate::{
    block::Block,
    board::{Board, ExtendedBoard, Tabletop},
    cardinal::Cardinal,
    coord::{Coord, Position},
    map::Map,
    report::Report,
};

/// Where the robot stands and which way it faces. Only exists once the robot is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub cardinal: Cardinal,
}

impl Placement {
    fn forward_position(&self) -> Position {
        self.position.neighbour(self.cardinal)
    }
}

/// A toy robot that moves around a board without falling off it.
///
/// Every command except [`Robot::place`] is silently ignored until the robot
/// has been placed. Commands that would move it off the table or onto a block
/// are ignored as well.
#[derive(Debug, Clone)]
pub struct Robot<B: Tabletop = Board> {
    board: B,
    placement: Option<Placement>,
    blocks: Vec<Block>,
}

impl<B: Tabletop> Robot<B> {
    pub fn new(board: B) -> Self {
        Robot {
            board,
            placement: None,
            blocks: Vec::new(),
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn position(&self) -> Option<Position> {
        self.placement.map(|placement| placement.position)
    }

    pub fn cardinal(&self) -> Option<Cardinal> {
        self.placement.map(|placement| placement.cardinal)
    }

    /// Puts the robot on the table, replacing any earlier placement.
    ///
    /// Ignored if the cell is off the table, holds a block, or `cardinal` is
    /// not a compass direction.
    pub fn place(&mut self, x: Coord, y: Coord, cardinal: &str) {
        let Ok(cardinal) = cardinal.parse::<Cardinal>() else {
            return;
        };
        let position = Position::new(x, y);
        if self.placeable(position) {
            self.placement = Some(Placement { position, cardinal });
        }
    }

    pub fn move_forward(&mut self) {
        let Some(placement) = self.placed() else {
            return;
        };
        let position = placement.forward_position();
        if self.placeable(position) {
            self.placement = Some(Placement {
                position,
                ..placement
            });
        }
    }

    pub fn left(&mut self) {
        self.turn(Cardinal::left);
    }

    pub fn right(&mut self) {
        self.turn(Cardinal::right);
    }

    pub fn report(&self) -> Option<Report> {
        let placement = self.placed()?;
        Some(Report {
            name: None,
            x: placement.position.x(),
            y: placement.position.y(),
            cardinal_direction: placement.cardinal,
            map: self.render().to_string(),
        })
    }

    /// The cell one step ahead, if the robot is placed.
    pub fn forward_position(&self) -> Option<Position> {
        self.placed().map(|placement| placement.forward_position())
    }

    /// On the table and not under a block.
    pub fn placeable(&self, position: Position) -> bool {
        self.board.within_boundaries(position)
            && !self.blocks.iter().any(|block| block.position() == position)
    }

    /// The gate in front of every command but `place`.
    fn placed(&self) -> Option<Placement> {
        self.placement
    }

    pub(crate) fn turn(&mut self, rotate: fn(Cardinal) -> Cardinal) {
        let Some(placement) = self.placed() else {
            return;
        };
        self.placement = Some(Placement {
            cardinal: rotate(placement.cardinal),
            ..placement
        });
    }

    /// Drops a block on the forward cell and returns where it landed.
    pub(crate) fn drop_block(&mut self) -> Option<Position> {
        let position = self.forward_position()?;
        if !self.placeable(position) {
            return None;
        }
        self.blocks.push(Block::new(position));
        Some(position)
    }

    pub(crate) fn render(&self) -> Map {
        let robot = self
            .placement
            .map(|placement| (placement.position, placement.cardinal));
        Map::new(self.board.size(), robot, &self.blocks)
    }
}

/// A named robot that can also drop blocks, spin around and draw a map.
#[derive(Debug, Clone)]
pub struct ExtendedRobot {
    name: String,
    robot: Robot<ExtendedBoard>,
}

impl ExtendedRobot {
    pub fn new(board: ExtendedBoard, name: impl Into<String>) -> Self {
        ExtendedRobot {
            name: name.into(),
            robot: Robot::new(board),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn robot(&self) -> &Robot<ExtendedBoard> {
        &self.robot
    }

    pub fn place(&mut self, x: Coord, y: Coord, cardinal: &str) {
        self.robot.place(x, y, cardinal);
    }

    pub fn move_forward(&mut self) {
        self.robot.move_forward();
    }

    pub fn left(&mut self) {
        self.robot.left();
    }

    pub fn right(&mut self) {
        self.robot.right();
    }

    pub fn spin(&mut self) {
        self.robot.turn(Cardinal::reverse);
    }

    /// Drops a block on the cell ahead, unless that cell is off the table or already blocked.
    pub fn block(&mut self) {
        if let Some(position) = self.robot.drop_block() {
            self.robot.board_mut().occupy(position);
        }
    }

    pub fn map(&self) -> Option<Map> {
        self.robot.placed().map(|_| self.robot.render())
    }

    pub fn report(&self) -> Option<Report> {
        self.robot.report().map(|report| Report {
            name: Some(self.name.clone()),
            ..report
        })
    }
}
