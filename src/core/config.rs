//! Dungeon configuration.

use serde::{Deserialize, Serialize};

/// Lowest score a player can hold. Every adjustment is clamped to this.
pub const MIN_SCORE: i64 = 0;

/// Nominal score ceiling. Advisory only: scores are never clamped to it.
pub const MAX_SCORE: i64 = 100;

/// Row width of the virtual room grid.
pub const GRID_WIDTH: usize = 5;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Rooms per grid row. Positions are `(index % width, index / width)`.
    ///
    /// Must be at least 1; the engine rejects 0 at construction.
    pub grid_width: usize,

    /// Mark each room visited right after the player interacts with it.
    ///
    /// With this off no room is ever marked and the backward path walk
    /// finds no previous room.
    pub mark_visited: bool,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            mark_visited: true,
        }
    }
}

impl DungeonConfig {
    /// Set the grid width.
    #[must_use]
    pub fn with_grid_width(mut self, width: usize) -> Self {
        self.grid_width = width;
        self
    }

    /// Enable or disable visited marking.
    #[must_use]
    pub fn with_mark_visited(mut self, mark: bool) -> Self {
        self.mark_visited = mark;
        self
    }
}
