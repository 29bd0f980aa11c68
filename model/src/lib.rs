pub mod block;
pub mod board;
pub mod cardinal;
pub mod command;
pub mod coord;
pub mod map;
pub mod report;
pub mod robot;
