//! Delve - procedural dungeons and line of sight in the terminal
//!
//! A room-and-corridor dungeon generator, a field-of-view walker and a
//! small platformer, each built as a headless core with a thin terminal
//! front end.

pub mod config;
pub mod game;
pub mod render;
pub mod sight;
pub mod term;
pub mod world;

// Re-export commonly used types
pub use config::{ConfigError, DungeonConfig, GameConfig, PlatformerConfig, WalkerConfig};
pub use sight::{Pose, VisibilityGrid};
pub use world::{generate_dungeon, Dungeon, GenerationMode, Grid, Position, Room, RoomSet, Tile};
