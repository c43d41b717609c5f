//! The dungeon engine and its end-of-run report.
//!
//! `DungeonEngine` owns the rooms and the player and drives the random
//! walk: interact with the current room, stop if it is the last room,
//! otherwise move to a random adjacent room.

pub mod game;
pub mod report;

pub use game::{DungeonEngine, Neighbours, StepOutcome};
pub use report::{RunReport, RunStats};
