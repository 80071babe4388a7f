//! Hand-built maps for the walker and the platformer

use super::grid::Grid;
use super::tile::Tile;

pub const ARENA_WIDTH: i32 = 30;
pub const ARENA_HEIGHT: i32 = 20;

pub const STAGE_WIDTH: i32 = 70;
pub const STAGE_HEIGHT: i32 = 20;

impl Grid<Tile> {
    /// Walled floor of the given size
    pub fn bordered(width: i32, height: i32, inner: Tile) -> Self {
        let mut grid = Grid::new(width, height, Tile::Wall);
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                grid.set(x, y, inner);
            }
        }
        grid
    }

    /// Place a wall at every listed `(x, y)`
    fn wall_at(&mut self, cells: &[(i32, i32)]) {
        for &(x, y) in cells {
            self.set(x, y, Tile::Wall);
        }
    }

    fn hline(&mut self, y: i32, x1: i32, x2: i32) {
        for x in x1..=x2 {
            self.set(x, y, Tile::Wall);
        }
    }

    /// The 30x20 arena explored by the walker
    pub fn walker_arena() -> Self {
        let mut grid = Grid::bordered(ARENA_WIDTH, ARENA_HEIGHT, Tile::Floor);

        // Central column
        for y in 7..=12 {
            grid.set(15, y, Tile::Wall);
        }

        // Left room, open to the east
        grid.hline(8, 5, 10);
        grid.hline(12, 5, 10);
        grid.wall_at(&[(5, 9), (5, 10), (5, 11)]);

        // Right room, open to the west
        grid.hline(8, 20, 25);
        grid.hline(12, 20, 25);
        grid.wall_at(&[(25, 9), (25, 10), (25, 11)]);

        // Scattered obstacles
        grid.wall_at(&[(7, 4), (8, 4), (7, 15), (8, 15)]);
        grid.wall_at(&[(22, 4), (23, 4), (22, 15), (23, 15)]);

        // Pillars
        grid.wall_at(&[(12, 6), (18, 6), (12, 14), (18, 14)]);

        grid
    }

    /// The 70x20 platformer stage. Open air is stored as `Floor`.
    pub fn platform_stage() -> Self {
        let mut grid = Grid::bordered(STAGE_WIDTH, STAGE_HEIGHT, Tile::Floor);
        let h = STAGE_HEIGHT;

        grid.hline(h - 5, 5, 10);
        grid.hline(h - 8, 15, 22);
        grid.hline(h - 12, 30, 36);
        grid.hline(h - 6, 40, 44);

        grid
    }
}
