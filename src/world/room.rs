//! Rooms and the ordered set of accepted rooms

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// A rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// One past the last column
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the last row
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Rooms overlap unless some axis separates them by more than `margin`
    pub fn overlaps(&self, other: &Room, margin: i32) -> bool {
        !(self.right() + margin < other.x
            || other.right() + margin < self.x
            || self.bottom() + margin < other.y
            || other.bottom() + margin < self.y)
    }

    /// Whether the room keeps clear of the outer 1-cell border of a map
    pub fn fits_within(&self, map_width: i32, map_height: i32) -> bool {
        self.x >= 1
            && self.y >= 1
            && self.right() < map_width - 1
            && self.bottom() < map_height - 1
    }
}

/// Accepted rooms in the order they were generated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSet {
    rooms: Vec<Room>,
}

impl RoomSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }

    /// `(previous, next)` pairs in acceptance order
    pub fn consecutive_pairs(&self) -> impl Iterator<Item = (&Room, &Room)> {
        self.rooms.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Whether any accepted room overlaps `candidate` within `margin`
    pub fn any_overlap(&self, candidate: &Room, margin: i32) -> bool {
        self.rooms.iter().any(|room| room.overlaps(candidate, margin))
    }
}

impl<'a> IntoIterator for &'a RoomSet {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}
