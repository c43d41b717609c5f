//! Rooms and their contents.

use serde::Serialize;
use tracing::debug;

use super::monster::Monster;
use super::player::{FightOutcome, Player};
use super::treasure::Treasure;
use crate::core::RandomSource;

/// What a room holds. Set once at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RoomContent {
    Treasure(Treasure),
    Monster(Monster),
    Empty,
}

/// What happened when the player entered a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Interaction {
    Collected { reward: i64 },
    Fought(FightOutcome),
    Nothing,
}

/// A node of the dungeon grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    content: RoomContent,
    visited: bool,
}

impl Room {
    #[must_use]
    pub fn new(content: RoomContent) -> Self {
        Self {
            content,
            visited: false,
        }
    }

    #[must_use]
    pub fn treasure(treasure: Treasure) -> Self {
        Self::new(RoomContent::Treasure(treasure))
    }

    #[must_use]
    pub fn monster(monster: Monster) -> Self {
        Self::new(RoomContent::Monster(monster))
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(RoomContent::Empty)
    }

    #[must_use]
    pub fn content(&self) -> &RoomContent {
        &self.content
    }

    /// Let the player act on this room's content.
    ///
    /// Treasure pays its reward on every entry; a monster is fought again
    /// on every entry, starting from whatever strength it was left with.
    /// Does not touch the visited flag.
    pub fn interact(&mut self, player: &mut Player, rng: &mut impl RandomSource) -> Interaction {
        match &mut self.content {
            RoomContent::Treasure(treasure) => {
                let reward = treasure.reward();
                player.add_score(reward);
                debug!(rarity = %treasure.rarity(), reward, "collected treasure");
                Interaction::Collected { reward }
            }
            RoomContent::Monster(monster) => {
                let kind = monster.kind();
                let outcome = player.fight(monster, rng);
                debug!(%kind, rounds = outcome.rounds, reward = outcome.reward, "fought monster");
                Interaction::Fought(outcome)
            }
            RoomContent::Empty => {
                debug!("empty room");
                Interaction::Nothing
            }
        }
    }

    #[must_use]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self) {
        self.visited = true;
    }
}
