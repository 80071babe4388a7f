//! Text rendering
//!
//! Every screen is built as a list of lines so the same output can go to a
//! terminal, stdout or a test.

pub mod dungeon;
pub mod platformer;
pub mod walker;

pub use dungeon::{dungeon_rows, legend, render_dungeon};
pub use platformer::platformer_frame;
pub use walker::walker_frame;

use crate::world::{Grid, Tile};

/// One string per grid row using each tile's glyph
pub fn grid_rows(grid: &Grid<Tile>) -> Vec<String> {
    (0..grid.height())
        .map(|y| grid.row(y).map(|tile| tile.glyph()).collect())
        .collect()
}
