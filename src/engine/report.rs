//! End-of-run report and counters.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::RoomId;
use crate::dungeon::Interaction;

/// Counters gathered during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub moves: u32,
    pub fights: u32,
    pub combat_rounds: u32,
    /// Sum of treasure rewards picked up, before score clamping.
    pub treasure_collected: i64,
    /// How many times each room was entered.
    pub entries: FxHashMap<RoomId, u32>,
}

impl RunStats {
    pub(crate) fn record(&mut self, room: RoomId, interaction: &Interaction) {
        *self.entries.entry(room).or_insert(0) += 1;
        match interaction {
            Interaction::Collected { reward } => self.treasure_collected += reward,
            Interaction::Fought(outcome) => {
                self.fights += 1;
                self.combat_rounds += outcome.rounds;
            }
            Interaction::Nothing => {}
        }
    }

    /// Times `room` was entered.
    #[must_use]
    pub fn entries_for(&self, room: RoomId) -> u32 {
        self.entries.get(&room).copied().unwrap_or(0)
    }
}

/// Final report of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub score: i64,
    /// Path from the backward visited-room walk, entry room first.
    ///
    /// This is not a shortest path and not necessarily the route taken;
    /// see `trail` for that.
    pub path: Vec<RoomId>,
    /// Every room the player stood in, in order.
    pub trail: Vector<RoomId>,
    pub stats: RunStats,
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game over! Your final score is {}.", self.score)?;
        write!(f, "Shortest path: ")?;
        for (i, room) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", room)?;
        }
        writeln!(f, ".")
    }
}
