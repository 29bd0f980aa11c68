use std::str::FromStr;

use thiserror::Error;

use crate::coord::Coord;

/// One line of robot input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The direction stays raw text; the robot decides whether it is valid.
    Place { x: Coord, y: Coord, cardinal: String },
    Move,
    Left,
    Right,
    Report,
    Block,
    Spin,
    Map,
    Help,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("PLACE expects X,Y,F")]
    MissingArguments,
    #[error("'{0}' is not a valid coordinate")]
    InvalidCoordinate(String),
}

impl Command {
    /// Only understood by the extended robot.
    pub fn is_extended(&self) -> bool {
        matches!(self, Command::Block | Command::Spin | Command::Map)
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, arguments) = match line.split_once(char::is_whitespace) {
            Some((keyword, arguments)) => (keyword, Some(arguments.trim())),
            None => (line, None),
        };

        let command = match keyword.to_uppercase().as_str() {
            "" => return Err(ParseError::Empty),
            "PLACE" => return parse_place(arguments.unwrap_or_default()),
            "MOVE" => Command::Move,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "REPORT" => Command::Report,
            "BLOCK" => Command::Block,
            "SPIN" => Command::Spin,
            "MAP" => Command::Map,
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(ParseError::Unknown(line.to_string())),
        };

        // bare keywords take no arguments
        match arguments {
            Some(rest) if !rest.is_empty() => Err(ParseError::Unknown(line.to_string())),
            _ => Ok(command),
        }
    }
}

fn parse_place(arguments: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = arguments.split(',').map(str::trim).collect();
    let [x, y, cardinal] = parts.as_slice() else {
        return Err(ParseError::MissingArguments);
    };

    Ok(Command::Place {
        x: parse_coord(x)?,
        y: parse_coord(y)?,
        cardinal: cardinal.to_string(),
    })
}

fn parse_coord(value: &str) -> Result<Coord, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(x: Coord, y: Coord, cardinal: &str) -> Command {
        Command::Place {
            x,
            y,
            cardinal: cardinal.to_string(),
        }
    }

    #[test]
    fn parses_bare_keywords() {
        assert_eq!(Ok(Command::Move), "MOVE".parse());
        assert_eq!(Ok(Command::Left), "left".parse());
        assert_eq!(Ok(Command::Right), " Right ".parse());
        assert_eq!(Ok(Command::Report), "REPORT".parse());
        assert_eq!(Ok(Command::Block), "BLOCK".parse());
        assert_eq!(Ok(Command::Spin), "spin".parse());
        assert_eq!(Ok(Command::Map), "MAP".parse());
        assert_eq!(Ok(Command::Help), "HELP".parse());
        assert_eq!(Ok(Command::Exit), "exit".parse());
    }

    #[test]
    fn parses_place() {
        assert_eq!(Ok(place(0, 0, "NORTH")), "PLACE 0,0,NORTH".parse());
        assert_eq!(Ok(place(1, 2, "north")), "place 1, 2, north".parse());
        assert_eq!(Ok(place(-1, 9, "EAST")), "PLACE   -1,9,EAST".parse());
    }

    #[test]
    fn place_keeps_unknown_directions() {
        assert_eq!(Ok(place(1, 1, "UP")), "PLACE 1,1,UP".parse());
    }

    #[test]
    fn place_needs_three_arguments() {
        assert_eq!(Err(ParseError::MissingArguments), "PLACE".parse::<Command>());
        assert_eq!(Err(ParseError::MissingArguments), "PLACE 1,2".parse::<Command>());
        assert_eq!(
            Err(ParseError::MissingArguments),
            "PLACE 1,2,NORTH,4".parse::<Command>()
        );
    }

    #[test]
    fn place_needs_integer_coordinates() {
        assert_eq!(
            Err(ParseError::InvalidCoordinate("a".to_string())),
            "PLACE a,2,NORTH".parse::<Command>()
        );
        assert_eq!(
            Err(ParseError::InvalidCoordinate("1.5".to_string())),
            "PLACE 2,1.5,NORTH".parse::<Command>()
        );
    }

    #[test]
    fn rejects_unknown_and_empty_lines() {
        assert_eq!(Err(ParseError::Empty), "".parse::<Command>());
        assert_eq!(Err(ParseError::Empty), "   ".parse::<Command>());
        assert_eq!(
            Err(ParseError::Unknown("JUMP".to_string())),
            "JUMP".parse::<Command>()
        );
        assert_eq!(
            Err(ParseError::Unknown("MOVE 3".to_string())),
            "MOVE 3".parse::<Command>()
        );
    }

    #[test]
    fn only_block_spin_and_map_are_extended() {
        assert!(Command::Block.is_extended());
        assert!(Command::Spin.is_extended());
        assert!(Command::Map.is_extended());
        assert!(!Command::Move.is_extended());
        assert!(!place(0, 0, "NORTH").is_extended());
        assert!(!Command::Report.is_extended());
    }

    #[test]
    fn errors_read_well() {
        assert_eq!("unknown command 'JUMP'", ParseError::Unknown("JUMP".into()).to_string());
        assert_eq!("PLACE expects X,Y,F", ParseError::MissingArguments.to_string());
    }
}
