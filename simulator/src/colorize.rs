use owo_colors::OwoColorize;

use model::{
    cardinal::Cardinal,
    map::{robot_glyph, BLOCK_GLYPH},
};

/// Colors the glyphs of an already rendered map: the robot green, blocks red.
pub fn decorate(map: &str) -> String {
    map.chars()
        .map(|c| {
            if c == BLOCK_GLYPH {
                c.red().to_string()
            } else if Cardinal::ALL.into_iter().map(robot_glyph).any(|glyph| glyph == c) {
                c.green().bold().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}
