//! Room identification and grid geometry.
//!
//! Rooms are addressed by their index in the engine's ordered room list.
//! A room's grid position is never stored: it is derived from the index and
//! the grid width.
//!
//! ```
//! use dungeon_crawl::core::{GridPosition, RoomId};
//!
//! let room = RoomId::new(7);
//! assert_eq!(room.position(5), GridPosition::new(2, 1));
//! assert!(room.is_adjacent(RoomId::new(12), 5));
//! assert!(!room.is_adjacent(RoomId::new(0), 5));
//! ```

use serde::{Deserialize, Serialize};

/// Index of a room in the dungeon's ordered room list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl RoomId {
    /// The entry room. Every run starts here.
    pub const ENTRY: RoomId = RoomId(0);

    /// Create a new room ID.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Grid position of this room in a grid `width` rooms wide.
    #[must_use]
    pub const fn position(self, width: usize) -> GridPosition {
        GridPosition::new(self.0 % width, self.0 / width)
    }

    /// Check whether two rooms are one Manhattan step apart.
    #[must_use]
    pub fn is_adjacent(self, other: RoomId, width: usize) -> bool {
        self.position(width).manhattan(other.position(width)) == 1
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room {}", self.0)
    }
}

/// Column/row coordinates in the virtual grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: usize,
    pub y: usize,
}

impl GridPosition {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan(self, other: GridPosition) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Direction hint passed to a move.
///
/// Movement is random over all adjacent rooms; the hint is carried for
/// logging only and never filters the choice.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Pick one of the four directions uniformly.
    pub fn random(rng: &mut impl super::RandomSource) -> Self {
        match rng.roll(0, 3) {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }
}
