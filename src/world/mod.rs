//! World module
//!
//! Grids, tiles, rooms and procedural generation.

pub mod arena;
pub mod generation;
pub mod grid;
pub mod room;
pub mod tile;

pub use generation::{generate_dungeon, Dungeon, GenerationMode};
pub use grid::{Grid, Position};
pub use room::{Room, RoomSet};
pub use tile::Tile;
