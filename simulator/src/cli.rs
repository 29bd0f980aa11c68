use std::path::PathBuf;

use clap::Parser;

use model::{board::DEFAULT_SIZE, coord::Coord};
use simulator::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    #[arg(short, long, help = "Path to a file with one command per line")]
    pub file: Option<PathBuf>,

    #[arg(short, long, help = "Enable the BLOCK, SPIN and MAP commands")]
    pub extended: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(i32).range(1..),
        help = "Edge length of the square table"
    )]
    pub size: Coord,

    #[arg(long, default_value = "R1", help = "Name of the robot in extended mode")]
    pub name: String,

    #[arg(long, help = "Print the map without colors")]
    pub no_color: bool,

    #[arg(long, help = "Print reports as json")]
    pub json: bool,
}

impl Args {
    pub fn session(&self) -> Session {
        let session = if self.extended {
            Session::extended(self.size, &self.name)
        } else {
            Session::standard(self.size)
        };

        session.with_color(!self.no_color).with_json(self.json)
    }
}
