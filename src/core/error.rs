//! Error types for dungeon construction and traversal.

use thiserror::Error;

use super::grid::RoomId;

/// Which tier table a raw value was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum TierKind {
    #[strum(serialize = "treasure rarity")]
    TreasureRarity,
    #[strum(serialize = "monster type")]
    MonsterType,
}

/// Errors raised while building or running a dungeon.
#[derive(Error, Debug)]
pub enum DungeonError {
    #[error("invalid {kind} {value}")]
    InvalidTier { kind: TierKind, value: u8 },

    #[error("room {index} is missing its {kind}")]
    MissingTier { index: usize, kind: TierKind },

    #[error("room {index} has unknown type {value}")]
    InvalidRoomKind { index: usize, value: u8 },

    #[error("grid width must be at least 1, got {0}")]
    InvalidGridWidth(usize),

    #[error("dungeon layout has no rooms")]
    EmptyLayout,

    #[error("could not parse dungeon layout: {0}")]
    Layout(#[from] serde_json::Error),

    #[error("{0} is not part of this dungeon")]
    RoomNotFound(RoomId),

    #[error("{0} has no adjacent rooms")]
    NoAdjacentRoom(RoomId),

    #[error("no visited room precedes {0}")]
    NoPreviousRoom(RoomId),

    #[error("game has not been started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, DungeonError>;
