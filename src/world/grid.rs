//! Grid data structure
//!
//! An owned 2D array of cells addressed by column `x` and row `y`.

use serde::{Deserialize, Serialize};

/// Integer cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance (allows diagonal)
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// A fixed-size map of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }

    /// Reset every cell to `value`
    pub fn fill(&mut self, value: T) {
        for cell in &mut self.cells {
            *cell = value.clone();
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Convert 1D index to 2D coordinates
    #[inline]
    fn idx_to_xy(&self, idx: usize) -> Position {
        let idx = idx as i32;
        Position::new(idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get cell at position
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Get mutable cell at position
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Set cell at position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = value;
        }
    }

    /// Iterate one row from left to right
    pub fn row(&self, y: i32) -> impl Iterator<Item = &T> {
        let range = if y >= 0 && y < self.height {
            let start = self.xy_to_idx(0, y);
            start..start + self.width as usize
        } else {
            0..0
        };
        self.cells[range].iter()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |idx| self.idx_to_xy(idx))
    }

    /// Cells with their positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (self.idx_to_xy(idx), cell))
    }

    /// In-bounds neighbours of a cell, diagonals included
    pub fn neighbors8(&self, x: i32, y: i32) -> impl Iterator<Item = Position> + '_ {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| Position::new(x + dx, y + dy))
            .filter(move |pos| self.in_bounds(pos.x, pos.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_filled() {
        let grid = Grid::new(4, 3, 7u8);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.iter().all(|(_, v)| *v == 7));
        assert_eq!(grid.positions().count(), 12);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(4, 3, 0u8);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);

        // Writes outside the grid are dropped
        grid.set(10, 10, 1);
        assert!(grid.iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(5, 5, false);
        grid.set(2, 3, true);
        assert_eq!(grid.get(2, 3), Some(&true));
        assert_eq!(grid.get(3, 2), Some(&false));
    }

    #[test]
    fn test_row_iteration() {
        let mut grid = Grid::new(3, 2, 'a');
        grid.set(1, 1, 'b');
        let row: String = grid.row(1).collect();
        assert_eq!(row, "aba");
        assert_eq!(grid.row(5).count(), 0);
    }

    #[test]
    fn test_neighbors_at_corner() {
        let grid = Grid::new(5, 5, 0u8);
        assert_eq!(grid.neighbors8(0, 0).count(), 3);
        assert_eq!(grid.neighbors8(2, 2).count(), 8);
        assert_eq!(grid.neighbors8(4, 2).count(), 5);
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = Position::new(1, 1);
        assert_eq!(a.chebyshev_distance(&Position::new(4, 2)), 3);
        assert_eq!(a.chebyshev_distance(&a), 0);
    }
}
