//! Per-frame visibility map

use super::fov::in_field_of_view;
use super::los::has_line_of_sight;
use super::pose::Pose;
use crate::world::{Grid, Tile};

/// Which cells of a map the observer can currently see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityGrid {
    cells: Grid<bool>,
}

impl VisibilityGrid {
    /// Nothing visible
    pub fn empty(width: i32, height: i32) -> Self {
        Self {
            cells: Grid::new(width, height, false),
        }
    }

    /// Compute visibility from scratch for a pose
    ///
    /// A cell is visible when its center is inside the view cone and the
    /// straight line to it is not blocked.
    pub fn compute(map: &Grid<Tile>, pose: &Pose, fov_degrees: f64) -> Self {
        let mut visibility = Self::empty(map.width(), map.height());
        visibility.recompute(map, pose, fov_degrees);
        visibility
    }

    /// Recompute in place, discarding the previous frame
    pub fn recompute(&mut self, map: &Grid<Tile>, pose: &Pose, fov_degrees: f64) {
        if self.cells.width() != map.width() || self.cells.height() != map.height() {
            self.cells = Grid::new(map.width(), map.height(), false);
        } else {
            self.cells.fill(false);
        }

        for pos in map.positions() {
            let seen = in_field_of_view(pose.x, pose.y, pose.heading(), pos.x, pos.y, fov_degrees)
                && has_line_of_sight(map, pose.x, pose.y, pos.x, pos.y);
            if seen {
                self.cells.set(pos.x, pos.y, true);
            }
        }
    }

    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.cells.get(x, y).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|(_, seen)| **seen).count()
    }

    /// Whether any of the 8 neighbours of a cell is visible
    pub fn touches_visible(&self, x: i32, y: i32) -> bool {
        self.cells
            .neighbors8(x, y)
            .any(|pos| self.is_visible(pos.x, pos.y))
    }

    /// What to draw at a cell
    ///
    /// Visible cells show their tile. Hidden walls next to a visible cell
    /// stay drawn so room outlines remain readable; everything else hidden
    /// is blank.
    pub fn glyph_at(&self, map: &Grid<Tile>, x: i32, y: i32) -> char {
        let Some(tile) = map.get(x, y) else {
            return ' ';
        };
        if self.is_visible(x, y) {
            tile.glyph()
        } else if tile.is_wall() && self.touches_visible(x, y) {
            Tile::Wall.glyph()
        } else {
            ' '
        }
    }
}
