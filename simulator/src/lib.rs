mod colorize;
pub mod input;

use std::io::{BufRead, Write};

use common::{debug, warn};
use model::{
    board::{Board, ExtendedBoard},
    command::Command,
    coord::Coord,
    report::Report,
    robot::{ExtendedRobot, Robot},
};

pub use colorize::decorate;

const PROMPT: &str = "> ";

const USAGE: &str = "\
Toy Robot Simulator

Commands:
  PLACE X,Y,F  put the robot at X,Y facing F (NORTH, EAST, SOUTH or WEST)
  MOVE         move one unit forward
  LEFT         turn 90 degrees to the left
  RIGHT        turn 90 degrees to the right
  REPORT       print the robot's position and direction
  HELP         show this message
  EXIT         quit
";

const EXTENDED_USAGE: &str = "\
Toy Robot Simulator (extended)

Commands:
  PLACE X,Y,F  put the robot at X,Y facing F (NORTH, EAST, SOUTH or WEST)
  MOVE         move one unit forward
  LEFT         turn 90 degrees to the left
  RIGHT        turn 90 degrees to the right
  SPIN         turn 180 degrees
  BLOCK        drop a block on the space in front of the robot
  MAP          draw the table
  REPORT       print the robot's name, position, direction and the map
  HELP         show this message
  EXIT         quit
";

#[derive(Debug)]
pub enum Mode {
    Standard(Robot),
    Extended(ExtendedRobot),
}

/// What the front end should do after a line was executed.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print. Ignored and malformed commands end up here too.
    Silent,
    Output(String),
    Help(&'static str),
    Exit,
}

/// One robot and the way its answers are printed.
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    color: bool,
    json: bool,
}

impl Session {
    pub fn standard(size: Coord) -> Self {
        Session::new(Mode::Standard(Robot::new(Board::new(size))))
    }

    pub fn extended(size: Coord, name: &str) -> Self {
        Session::new(Mode::Extended(ExtendedRobot::new(
            ExtendedBoard::new(size),
            name,
        )))
    }

    fn new(mode: Mode) -> Self {
        Session {
            mode,
            color: false,
            json: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_extended(&self) -> bool {
        matches!(self.mode, Mode::Extended(_))
    }

    pub fn usage(&self) -> &'static str {
        if self.is_extended() {
            EXTENDED_USAGE
        } else {
            USAGE
        }
    }

    pub fn execute(&mut self, line: &str) -> Outcome {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("ignoring '{}': {}", line.trim(), e);
                return Outcome::Silent;
            }
        };

        if command.is_extended() && !self.is_extended() {
            debug!("ignoring '{}': only available in extended mode", line.trim());
            return Outcome::Silent;
        }

        match command {
            Command::Help => return Outcome::Help(self.usage()),
            Command::Exit => return Outcome::Exit,
            _ => {}
        }

        match &mut self.mode {
            Mode::Standard(robot) => match command {
                Command::Place { x, y, cardinal } => robot.place(x, y, &cardinal),
                Command::Move => robot.move_forward(),
                Command::Left => robot.left(),
                Command::Right => robot.right(),
                Command::Report => {
                    return robot
                        .report()
                        .map(|report| self.format_report(&report, false))
                        .unwrap_or(Outcome::Silent)
                }
                _ => {}
            },
            Mode::Extended(robot) => match command {
                Command::Place { x, y, cardinal } => robot.place(x, y, &cardinal),
                Command::Move => robot.move_forward(),
                Command::Left => robot.left(),
                Command::Right => robot.right(),
                Command::Spin => robot.spin(),
                Command::Block => robot.block(),
                Command::Map => {
                    return robot
                        .map()
                        .map(|map| Outcome::Output(self.format_map(&map.to_string())))
                        .unwrap_or(Outcome::Silent)
                }
                Command::Report => {
                    return robot
                        .report()
                        .map(|report| self.format_report(&report, true))
                        .unwrap_or(Outcome::Silent)
                }
                _ => {}
            },
        }

        Outcome::Silent
    }

    fn format_report(&self, report: &Report, with_map: bool) -> Outcome {
        if self.json {
            return match report.to_json_string() {
                Ok(json) => Outcome::Output(json),
                Err(e) => {
                    warn!("could not serialize report: {}", e);
                    Outcome::Silent
                }
            };
        }

        if with_map {
            Outcome::Output(format!("{}\n{}", report, self.format_map(&report.map)))
        } else {
            Outcome::Output(report.to_string())
        }
    }

    fn format_map(&self, map: &str) -> String {
        let map = map.trim_end();
        if self.color {
            decorate(map)
        } else {
            map.to_string()
        }
    }
}

/// Executes every command in order and prints what they answer.
pub fn run_script(
    session: &mut Session,
    commands: &[String],
    mut output: impl Write,
) -> std::io::Result<()> {
    for line in commands {
        match session.execute(line) {
            Outcome::Silent => {}
            Outcome::Output(text) => writeln!(output, "{}", text)?,
            Outcome::Help(usage) => write!(output, "{}", usage)?,
            Outcome::Exit => break,
        }
    }

    output.flush()
}

/// Prompts for commands until `EXIT` or the end of input.
pub fn run_interactive(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    write!(output, "{}{}", session.usage(), PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        match session.execute(&line?) {
            Outcome::Silent => {}
            Outcome::Output(text) => writeln!(output, "{}", text)?,
            Outcome::Help(usage) => write!(output, "{}", usage)?,
            Outcome::Exit => return output.flush(),
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    output.flush()
}
