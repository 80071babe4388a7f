//! L-shaped corridors between consecutive rooms

use rand::Rng;

use crate::world::{Grid, Position, Room, RoomSet, Tile};

/// Carve a horizontal corridor. Only walls are replaced.
pub fn carve_h_corridor(grid: &mut Grid<Tile>, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        dig(grid, x, y);
    }
}

/// Carve a vertical corridor. Only walls are replaced.
pub fn carve_v_corridor(grid: &mut Grid<Tile>, x: i32, y1: i32, y2: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        dig(grid, x, y);
    }
}

fn dig(grid: &mut Grid<Tile>, x: i32, y: i32) {
    if let Some(tile) = grid.get_mut(x, y) {
        if *tile == Tile::Wall {
            *tile = Tile::Corridor;
        }
    }
}

/// Join two points with an L. The bend sits at `(to.x, from.y)` when
/// `horizontal_first`, otherwise at `(from.x, to.y)`.
pub fn carve_l_corridor(grid: &mut Grid<Tile>, from: Position, to: Position, horizontal_first: bool) {
    if horizontal_first {
        carve_h_corridor(grid, from.x, to.x, from.y);
        carve_v_corridor(grid, to.x, from.y, to.y);
    } else {
        carve_v_corridor(grid, from.x, from.y, to.y);
        carve_h_corridor(grid, from.x, to.x, to.y);
    }
}

/// Connect the centers of two rooms, picking the bend at random
pub fn connect_pair<R: Rng + ?Sized>(grid: &mut Grid<Tile>, a: &Room, b: &Room, rng: &mut R) {
    carve_l_corridor(grid, a.center(), b.center(), rng.gen_bool(0.5));
}

/// Connect every room to the one accepted just before it
pub fn connect_rooms<R: Rng + ?Sized>(grid: &mut Grid<Tile>, rooms: &RoomSet, rng: &mut R) {
    for (prev, next) in rooms.consecutive_pairs() {
        connect_pair(grid, prev, next, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::carve_room;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn count(grid: &Grid<Tile>, tile: Tile) -> usize {
        grid.iter().filter(|(_, t)| **t == tile).count()
    }

    #[test]
    fn test_horizontal_is_inclusive_either_direction() {
        let mut grid = Grid::new(10, 5, Tile::Wall);
        carve_h_corridor(&mut grid, 7, 2, 2);
        assert_eq!(count(&grid, Tile::Corridor), 6);
        assert_eq!(grid.get(2, 2), Some(&Tile::Corridor));
        assert_eq!(grid.get(7, 2), Some(&Tile::Corridor));
        assert_eq!(grid.get(8, 2), Some(&Tile::Wall));
    }

    #[test]
    fn test_vertical_is_inclusive() {
        let mut grid = Grid::new(5, 10, Tile::Wall);
        carve_v_corridor(&mut grid, 1, 1, 8);
        assert_eq!(count(&grid, Tile::Corridor), 8);
    }

    #[test]
    fn test_corridor_preserves_floor_and_doors() {
        let mut grid = Grid::new(10, 3, Tile::Wall);
        grid.set(3, 1, Tile::Floor);
        grid.set(5, 1, Tile::Door);
        carve_h_corridor(&mut grid, 0, 9, 1);
        assert_eq!(grid.get(3, 1), Some(&Tile::Floor));
        assert_eq!(grid.get(5, 1), Some(&Tile::Door));
        assert_eq!(count(&grid, Tile::Corridor), 8);
    }

    #[test]
    fn test_l_corridor_bends() {
        let from = Position::new(2, 2);
        let to = Position::new(8, 6);

        let mut grid = Grid::new(12, 10, Tile::Wall);
        carve_l_corridor(&mut grid, from, to, true);
        assert_eq!(grid.get(8, 2), Some(&Tile::Corridor));
        assert_eq!(grid.get(2, 6), Some(&Tile::Wall));

        let mut grid = Grid::new(12, 10, Tile::Wall);
        carve_l_corridor(&mut grid, from, to, false);
        assert_eq!(grid.get(2, 6), Some(&Tile::Corridor));
        assert_eq!(grid.get(8, 2), Some(&Tile::Wall));

        // Both shapes cover the same number of cells
        assert_eq!(count(&grid, Tile::Corridor), 11);
    }

    #[test]
    fn test_connect_rooms_links_consecutive_pairs() {
        let mut grid = Grid::new(40, 20, Tile::Wall);
        let mut rooms = RoomSet::new();
        for room in [Room::new(2, 2, 6, 6), Room::new(20, 2, 6, 6), Room::new(20, 12, 6, 6)] {
            carve_room(&mut grid, &room);
            rooms.push(room);
        }
        let mut rng = StdRng::seed_from_u64(9);
        connect_rooms(&mut grid, &rooms, &mut rng);

        assert!(count(&grid, Tile::Corridor) > 0);
        // Rooms are never erased
        for room in &rooms {
            assert_eq!(grid.get(room.x, room.y), Some(&Tile::Floor));
        }
    }
}
