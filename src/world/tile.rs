//! Tile definitions
//!
//! The cell symbols shared by the dungeon, the walker arena and the
//! platformer stage.

use serde::{Deserialize, Serialize};

/// A single cell of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
    Corridor,
    Door,
}

impl Tile {
    /// Character used when printing the map
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Corridor => ' ',
            Tile::Door => '+',
        }
    }

    /// Parse a glyph back into a tile
    pub fn from_glyph(glyph: char) -> Option<Tile> {
        match glyph {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            ' ' => Some(Tile::Corridor),
            '+' => Some(Tile::Door),
            _ => None,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Walls are the only opaque tile
    pub fn blocks_sight(&self) -> bool {
        self.is_wall()
    }

    /// Solid for movement and platformer collision
    pub fn is_solid(&self) -> bool {
        self.is_wall()
    }

    /// Human-readable name used by the dungeon legend
    pub fn name(&self) -> &'static str {
        match self {
            Tile::Wall => "Wall",
            Tile::Floor => "Room floor",
            Tile::Corridor => "Corridor",
            Tile::Door => "Door",
        }
    }
}
