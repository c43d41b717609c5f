//! Dungeon entities: treasures, monsters, rooms, and the player.

pub mod monster;
pub mod player;
pub mod room;
pub mod treasure;

pub use monster::{Monster, MonsterType};
pub use player::{FightOutcome, Player};
pub use room::{Interaction, Room, RoomContent};
pub use treasure::{Rarity, Treasure};
