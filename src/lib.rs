//! # dungeon-crawl
//!
//! A single-player text dungeon crawl simulation.
//!
//! Rooms sit on a virtual grid five rooms wide, each holding a treasure, a
//! monster, or nothing. The player starts in room 0 and walks at random
//! between adjacent rooms, collecting treasure and fighting monsters, until
//! reaching the last room. The run ends with the final score and a
//! reconstructed path.
//!
//! ## Randomness
//!
//! Every draw goes through an injected [`RandomSource`]. Use [`GameRng`] for
//! seeded runs and [`ScriptedRolls`](core::ScriptedRolls) to script exact
//! rolls in tests.
//!
//! ## Modules
//!
//! - `core`: room ids, grid geometry, random sources, configuration, errors
//! - `dungeon`: treasures, monsters, rooms, player and combat
//! - `layout`: structured layout data and JSON loading
//! - `engine`: the random-walk engine and the run report
//!
//! ```
//! use dungeon_crawl::{DungeonConfig, DungeonEngine, DungeonLayout, GameRng};
//!
//! let layout = DungeonLayout::from_json(
//!     r#"{ "rooms": [ { "type": 1, "treasureRarity": 1 }, { "type": 3 } ] }"#,
//! ).unwrap();
//! let mut engine = DungeonEngine::from_layout(&layout, DungeonConfig::default(), GameRng::new(42)).unwrap();
//!
//! let report = engine.run().unwrap();
//! assert!((1..=10).contains(&report.score));
//! ```

pub mod core;
pub mod dungeon;
pub mod engine;
pub mod layout;

// Re-export commonly used types
pub use crate::core::{
    Direction, DungeonConfig, DungeonError, GameRng, GameRngState, GridPosition, RandomSource,
    Result, RoomId,
};

pub use crate::dungeon::{
    FightOutcome, Interaction, Monster, MonsterType, Player, Rarity, Room, RoomContent, Treasure,
};

pub use crate::engine::{DungeonEngine, RunReport, RunStats, StepOutcome};

pub use crate::layout::{DungeonLayout, RoomDescriptor};
