//! Core building blocks: room ids and grid geometry, random sources,
//! configuration, errors.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{DungeonConfig, GRID_WIDTH, MAX_SCORE, MIN_SCORE};
pub use error::{DungeonError, Result, TierKind};
pub use grid::{Direction, GridPosition, RoomId};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRolls};
