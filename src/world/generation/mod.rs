//! Procedural dungeon generation
//!
//! Rooms are placed at random, linked by L-shaped corridors in the order
//! they were accepted, and given doors where a corridor meets a room edge.
//! Each stage takes the grid and the room set explicitly.

pub mod corridors;
pub mod doors;
pub mod placement;

pub use corridors::connect_rooms;
pub use doors::{place_doors, room_doors};
pub use placement::{can_place, carve_room, propose_room};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::DungeonConfig;
use super::{Grid, RoomSet, Tile};

/// When corridors and doors are laid down relative to room placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Place every room first, then connect once and place doors once
    #[default]
    Deferred,
    /// Reconnect all rooms and redo doors after every placement attempt,
    /// including rejected ones. Later passes add extra corridors.
    Incremental,
}

/// A finished dungeon floor
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub grid: Grid<Tile>,
    pub rooms: RoomSet,
    /// Room count drawn for this run
    pub target_rooms: usize,
    /// Placement attempts spent
    pub attempts: u32,
}

impl Dungeon {
    /// Whether placement stopped short of the drawn room count
    pub fn is_degraded(&self) -> bool {
        self.rooms.len() < self.target_rooms
    }
}

/// Generate a dungeon from the given constants
///
/// Running out of placement attempts yields fewer rooms than requested,
/// never an error. The first candidate always fits, so there is at least
/// one room.
///
/// # Panics
///
/// Panics when `config` fails [`DungeonConfig::validate`], for example a
/// map too small for the largest room.
pub fn generate_dungeon<R: Rng + ?Sized>(rng: &mut R, config: &DungeonConfig) -> Dungeon {
    debug_assert!(config.validate().is_ok(), "invalid dungeon config: {:?}", config);

    let mut grid = Grid::new(config.width, config.height, Tile::Wall);
    let mut rooms = RoomSet::new();

    let target_rooms = rng.gen_range(config.min_rooms..=config.max_rooms);
    let mut attempts = 0;

    while rooms.len() < target_rooms && attempts < config.max_attempts {
        let candidate = propose_room(rng, config);

        if can_place(&grid, &rooms, &candidate, config.room_margin) {
            carve_room(&mut grid, &candidate);
            log::debug!(
                "Accepted room #{} at ({}, {}) size {}x{} after {} attempts",
                rooms.len() + 1,
                candidate.x,
                candidate.y,
                candidate.width,
                candidate.height,
                attempts + 1
            );
            rooms.push(candidate);
        }
        attempts += 1;

        if config.mode == GenerationMode::Incremental {
            connect_rooms(&mut grid, &rooms, rng);
            place_doors(&mut grid, &rooms);
        }
    }

    if config.mode == GenerationMode::Deferred {
        connect_rooms(&mut grid, &rooms, rng);
        place_doors(&mut grid, &rooms);
    }

    if rooms.len() < target_rooms {
        log::warn!(
            "Placed {} of {} rooms before exhausting {} attempts",
            rooms.len(),
            target_rooms,
            config.max_attempts
        );
    }
    log::info!(
        "Generated {}x{} dungeon with {} rooms ({:?} mode, {} attempts)",
        config.width,
        config.height,
        rooms.len(),
        config.mode,
        attempts
    );

    Dungeon {
        grid,
        rooms,
        target_rooms,
        attempts,
    }
}
