//! Door placement on room edges
//!
//! A room edge cell qualifies for a door when it is still floor and the
//! cell just outside the room is corridor. Along each edge only the first
//! cell of a contiguous qualifying run becomes a door; the rest of the run
//! is walled off so doorways stay one cell wide.

use crate::world::{Grid, Position, Room, RoomSet, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

const EDGES: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

/// `(edge cell, outside neighbour)` pairs in scan order
fn edge_cells(room: &Room, edge: Edge) -> Vec<(Position, Position)> {
    match edge {
        Edge::Top => (room.x..room.right())
            .map(|x| (Position::new(x, room.y), Position::new(x, room.y - 1)))
            .collect(),
        Edge::Bottom => (room.x..room.right())
            .map(|x| (Position::new(x, room.bottom() - 1), Position::new(x, room.bottom())))
            .collect(),
        Edge::Left => (room.y..room.bottom())
            .map(|y| (Position::new(room.x, y), Position::new(room.x - 1, y)))
            .collect(),
        Edge::Right => (room.y..room.bottom())
            .map(|y| (Position::new(room.right() - 1, y), Position::new(room.right(), y)))
            .collect(),
    }
}

fn qualifies(grid: &Grid<Tile>, cell: Position, outside: Position) -> bool {
    grid.get(cell.x, cell.y) == Some(&Tile::Floor)
        && grid.get(outside.x, outside.y) == Some(&Tile::Corridor)
}

fn place_edge_doors(grid: &mut Grid<Tile>, room: &Room, edge: Edge) {
    let mut in_run = false;
    for (cell, outside) in edge_cells(room, edge) {
        if qualifies(grid, cell, outside) {
            let tile = if in_run { Tile::Wall } else { Tile::Door };
            grid.set(cell.x, cell.y, tile);
            in_run = true;
        } else {
            in_run = false;
        }
    }
}

/// Place doors on all four edges of every room. Safe to run repeatedly.
pub fn place_doors(grid: &mut Grid<Tile>, rooms: &RoomSet) {
    for room in rooms {
        for edge in EDGES {
            place_edge_doors(grid, room, edge);
        }
    }
}

/// Door cells on the edges of a room
pub fn room_doors(grid: &Grid<Tile>, room: &Room) -> Vec<Position> {
    let mut doors: Vec<Position> = EDGES
        .iter()
        .flat_map(|&edge| edge_cells(room, edge))
        .map(|(cell, _)| cell)
        .filter(|cell| grid.get(cell.x, cell.y) == Some(&Tile::Door))
        .collect();
    // Corner cells belong to two edges
    doors.sort_by_key(|p| (p.y, p.x));
    doors.dedup();
    doors
}
