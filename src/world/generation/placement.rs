//! Random room proposal and acceptance

use rand::Rng;

use crate::config::DungeonConfig;
use crate::world::{Grid, Room, RoomSet, Tile};

/// Draw a candidate room whose rectangle keeps clear of the map border
pub fn propose_room<R: Rng + ?Sized>(rng: &mut R, config: &DungeonConfig) -> Room {
    let w = rng.gen_range(config.min_room_size..=config.max_room_size);
    let h = rng.gen_range(config.min_room_size..=config.max_room_size);
    let x = rng.gen_range(1..=config.width - w - 2);
    let y = rng.gen_range(1..=config.height - h - 2);
    Room::new(x, y, w, h)
}

/// Whether `candidate` stays inside the border and away from accepted rooms
pub fn can_place(grid: &Grid<Tile>, rooms: &RoomSet, candidate: &Room, margin: i32) -> bool {
    candidate.fits_within(grid.width(), grid.height()) && !rooms.any_overlap(candidate, margin)
}

/// Stamp the whole room rectangle as floor
pub fn carve_room(grid: &mut Grid<Tile>, room: &Room) {
    for y in room.y..room.bottom() {
        for x in room.x..room.right() {
            grid.set(x, y, Tile::Floor);
        }
    }
}
