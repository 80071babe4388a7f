//! Line of sight by sampling the segment between eye and target

use crate::world::{Grid, Tile};

/// Below this distance the target is the eye's own cell
const SAME_CELL_EPSILON: f64 = 0.01;

/// Whether the center of `(target_x, target_y)` can be seen from a
/// continuous eye position
///
/// The segment is sampled at least twice per unit of length and every
/// sample is rounded to its nearest cell. Samples run strictly between the
/// eye and the target; one that rounds onto a wall blocks the view, even
/// when that wall is the target itself.
pub fn has_line_of_sight(
    grid: &Grid<Tile>,
    eye_x: f64,
    eye_y: f64,
    target_x: i32,
    target_y: i32,
) -> bool {
    let dx = target_x as f64 - eye_x;
    let dy = target_y as f64 - eye_y;
    let distance = dx.hypot(dy);

    if distance < SAME_CELL_EPSILON {
        return true;
    }

    let steps = (distance * 2.0) as i32 + 1;
    let step_x = dx / steps as f64;
    let step_y = dy / steps as f64;

    (1..steps).all(|i| {
        let x = (eye_x + step_x * i as f64).round() as i32;
        let y = (eye_y + step_y * i as f64).round() as i32;
        !grid.get(x, y).is_some_and(|tile| tile.blocks_sight())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_room() -> Grid<Tile> {
        Grid::bordered(12, 8, Tile::Floor)
    }

    #[test]
    fn test_clear_path() {
        let grid = open_room();
        assert!(has_line_of_sight(&grid, 2.0, 2.0, 7, 2));
        assert!(has_line_of_sight(&grid, 2.0, 2.0, 7, 5));
    }

    #[test]
    fn test_wall_in_between_occludes() {
        let mut grid = open_room();
        grid.set(4, 2, Tile::Wall);
        assert!(!has_line_of_sight(&grid, 2.0, 2.0, 7, 2));
        // Cells off the blocked row are still visible
        assert!(has_line_of_sight(&grid, 2.0, 2.0, 7, 5));
    }

    #[test]
    fn test_axis_wall_target_blocks_itself() {
        let mut grid = open_room();
        grid.set(3, 2, Tile::Wall);
        // The last sample lands within half a cell of the target
        assert!(!has_line_of_sight(&grid, 2.0, 2.0, 3, 2));
        assert!(!has_line_of_sight(&grid, 2.0, 2.0, 6, 2));
        // The floor beside it is unaffected
        assert!(has_line_of_sight(&grid, 2.0, 2.0, 3, 3));
    }

    #[test]
    fn test_own_cell_is_visible() {
        let grid = Grid::new(5, 5, Tile::Wall);
        assert!(has_line_of_sight(&grid, 2.0, 2.0, 2, 2));
        assert!(has_line_of_sight(&grid, 2.005, 2.0, 2, 2));
    }

    #[test]
    fn test_samples_outside_grid_are_ignored() {
        let grid = Grid::new(3, 3, Tile::Floor);
        assert!(has_line_of_sight(&grid, -3.0, 1.0, 2, 1));
    }
}
