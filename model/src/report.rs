use std::fmt::Display;

use serde::Serialize;

use crate::{cardinal::Cardinal, coord::Coord};

/// What `REPORT` answers with.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Coord,
    pub y: Coord,
    pub cardinal_direction: Cardinal,
    pub map: String,
}

impl Report {
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Only the position line; the map is printed separately.
impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}: ", name)?;
        }
        write!(f, "{},{},{}", self.x, self.y, self.cardinal_direction)
    }
}
