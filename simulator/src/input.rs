use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Filename not specified or does not exist.")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read commands: {0}")]
    Read(#[from] std::io::Error),
}

pub fn read_commands_from_file(path: &Path) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })?;

    read_commands(BufReader::new(file))
}

/// One trimmed command per line. Blank lines are kept; the session ignores them.
pub fn read_commands(reader: impl BufRead) -> Result<Vec<String>, InputError> {
    reader
        .lines()
        .map(|line| {
            line.map(|line| line.trim().to_string())
                .map_err(InputError::from)
        })
        .collect()
}
