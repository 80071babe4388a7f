//! Dungeon map printout

use super::grid_rows;
use crate::world::{Grid, Tile};

/// Map rows, top to bottom
pub fn dungeon_rows(grid: &Grid<Tile>) -> Vec<String> {
    grid_rows(grid)
}

/// Explanation of each symbol
pub fn legend() -> Vec<String> {
    [Tile::Wall, Tile::Floor, Tile::Corridor, Tile::Door]
        .iter()
        .map(|tile| format!("  {} = {}", tile.glyph(), tile.name()))
        .collect()
}

/// The whole printout: map rows followed by the legend
pub fn render_dungeon(grid: &Grid<Tile>) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize + 80);
    for line in dungeon_rows(grid).into_iter().chain(legend()) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DungeonConfig;
    use crate::world::generation::{carve_room, generate_dungeon};
    use crate::world::Room;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rows_match_grid() {
        let mut grid = Grid::new(6, 4, Tile::Wall);
        carve_room(&mut grid, &Room::new(1, 1, 3, 2));
        grid.set(4, 1, Tile::Corridor);
        grid.set(3, 2, Tile::Door);

        let rows = dungeon_rows(&grid);
        assert_eq!(rows, vec!["######", "#... #", "#..+##", "######"]);
    }

    #[test]
    fn test_legend_follows_map() {
        let grid = Grid::new(3, 2, Tile::Wall);
        let text = render_dungeon(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 4);
        assert_eq!(lines[0], "###");
        assert_eq!(lines[2], "  # = Wall");
        assert_eq!(lines[4], "    = Corridor");
        assert_eq!(lines[5], "  + = Door");
    }

    #[test]
    fn test_printout_parses_back_to_grid() {
        let dungeon = generate_dungeon(&mut StdRng::seed_from_u64(21), &DungeonConfig::default());
        let rows = dungeon_rows(&dungeon.grid);

        let mut parsed = Grid::new(dungeon.grid.width(), dungeon.grid.height(), Tile::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).expect("every glyph maps to a tile");
                parsed.set(x as i32, y as i32, tile);
            }
        }
        assert_eq!(parsed, dungeon.grid);
    }
}
