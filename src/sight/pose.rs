//! Observer position and heading

use super::fov::{heading_glyph, normalize_degrees};
use crate::world::{Grid, Position, Tile};

/// A continuous position with a heading in degrees, `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    heading: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading: normalize_degrees(heading),
        }
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Nearest grid cell
    pub fn cell(&self) -> Position {
        Position::new(self.x.round() as i32, self.y.round() as i32)
    }

    pub fn glyph(&self) -> char {
        heading_glyph(self.heading)
    }

    /// Turn by `delta` degrees; positive turns clockwise on screen
    pub fn rotate(&mut self, delta: f64) {
        self.heading = normalize_degrees(self.heading + delta);
    }

    /// Step `distance` along the heading (negative steps back)
    ///
    /// The step is taken only when the destination's nearest cell is inside
    /// the grid and not a wall. Returns whether the pose moved.
    pub fn advance(&mut self, distance: f64, grid: &Grid<Tile>) -> bool {
        let radians = self.heading.to_radians();
        let new_x = self.x + radians.cos() * distance;
        let new_y = self.y + radians.sin() * distance;

        let cell_x = new_x.round() as i32;
        let cell_y = new_y.round() as i32;
        match grid.get(cell_x, cell_y) {
            Some(tile) if !tile.is_solid() => {
                self.x = new_x;
                self.y = new_y;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotation_wraps() {
        let mut pose = Pose::new(1.0, 1.0, 0.0);
        pose.rotate(-15.0);
        assert!((pose.heading() - 345.0).abs() < EPS);
        pose.rotate(30.0);
        assert!((pose.heading() - 15.0).abs() < EPS);
        let turned = Pose::new(0.0, 0.0, 720.0 + 90.0);
        assert!((turned.heading() - 90.0).abs() < EPS);
    }

    #[test]
    fn test_full_turn_returns_home() {
        let mut pose = Pose::new(1.0, 1.0, 0.0);
        for _ in 0..24 {
            pose.rotate(15.0);
        }
        let h = pose.heading();
        assert!(h < 1e-6 || h > 360.0 - 1e-6, "heading {}", h);
    }

    #[test]
    fn test_advance_forward_and_back() {
        let grid = Grid::bordered(10, 10, Tile::Floor);
        let mut pose = Pose::new(3.0, 3.0, 0.0);
        assert!(pose.advance(1.0, &grid));
        assert!((pose.x - 4.0).abs() < EPS);
        assert!((pose.y - 3.0).abs() < EPS);

        pose.rotate(90.0);
        assert!(pose.advance(-1.0, &grid));
        assert!((pose.x - 4.0).abs() < 1e-6);
        assert!((pose.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_advance_into_wall_is_rejected() {
        let mut grid = Grid::bordered(10, 10, Tile::Floor);
        grid.set(4, 3, Tile::Wall);
        let mut pose = Pose::new(3.0, 3.0, 0.0);
        let before = pose;

        assert!(!pose.advance(1.0, &grid));
        assert!((pose.x - before.x).abs() < EPS);
        assert!((pose.y - before.y).abs() < EPS);
    }

    #[test]
    fn test_advance_out_of_bounds_is_rejected() {
        let grid = Grid::new(5, 5, Tile::Floor);
        let mut pose = Pose::new(4.0, 2.0, 0.0);
        assert!(!pose.advance(1.0, &grid));
        assert_eq!(pose.cell(), Position::new(4, 2));
    }

    #[test]
    fn test_cell_rounds_to_nearest() {
        let pose = Pose::new(2.6, 3.4, 0.0);
        assert_eq!(pose.cell(), Position::new(3, 3));
    }
}
