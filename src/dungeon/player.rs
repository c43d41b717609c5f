//! The player: a clamped score accumulator, current-room pointer, and the
//! combat procedure.

use serde::Serialize;
use tracing::trace;

use super::monster::Monster;
use crate::core::{RandomSource, RoomId, MIN_SCORE};

/// Faces on the combat die.
pub const COMBAT_DIE: i64 = 20;

/// Result of a finished fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FightOutcome {
    /// Rolls made, including the winning one.
    pub rounds: u32,
    /// Monster strength at the winning roll; this is what was added to the score.
    pub reward: i64,
}

/// The single player of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    score: i64,
    current_room: Option<RoomId>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player with score 0 and no current room.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            current_room: None,
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Add `amount` (possibly negative) and clamp at `MIN_SCORE`.
    pub fn add_score(&mut self, amount: i64) {
        self.score = (self.score + amount).max(MIN_SCORE);
    }

    #[must_use]
    pub fn current_room(&self) -> Option<RoomId> {
        self.current_room
    }

    pub fn set_current_room(&mut self, room: RoomId) {
        self.current_room = Some(room);
    }

    /// Fight `monster` until a roll beats its strength.
    ///
    /// Each round rolls a d20. A roll above the monster's current strength
    /// wins and adds that strength to the score. Otherwise the monster loses
    /// 1-3 strength and the fight goes on. There is no round cap: once
    /// strength reaches zero any roll wins.
    pub fn fight(&mut self, monster: &mut Monster, rng: &mut impl RandomSource) -> FightOutcome {
        let mut rounds = 0;
        loop {
            rounds += 1;
            let roll = rng.roll(1, COMBAT_DIE);
            if roll > monster.strength() {
                let reward = monster.strength();
                self.add_score(reward);
                trace!(rounds, roll, reward, "player wins fight");
                return FightOutcome { rounds, reward };
            }
            let hit = monster.reduce_strength(rng);
            trace!(rounds, roll, hit, strength = monster.strength(), "monster holds");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRolls};
    use crate::dungeon::MonsterType;
    use proptest::prelude::*;

    #[test]
    fn test_new_player() {
        let player = Player::new();
        assert_eq!(player.score(), 0);
        assert_eq!(player.current_room(), None);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let mut player = Player::new();
        player.add_score(5);
        player.add_score(-12);
        assert_eq!(player.score(), 0);
        player.add_score(3);
        assert_eq!(player.score(), 3);
    }

    #[test]
    fn test_large_loss_from_zero_stays_zero() {
        let mut player = Player::new();
        player.add_score(-5);
        assert_eq!(player.score(), 0);
        player.add_score(i64::from(i32::MIN));
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_no_upper_clamp() {
        let mut player = Player::new();
        player.add_score(250);
        assert_eq!(player.score(), 250);
    }

    #[test]
    fn test_current_room() {
        let mut player = Player::new();
        player.set_current_room(RoomId::new(4));
        assert_eq!(player.current_room(), Some(RoomId::new(4)));
    }

    #[test]
    fn test_fight_immediate_win() {
        // strength 4, then roll 5 wins
        let mut rolls = ScriptedRolls::new([4, 5]);
        let mut monster = Monster::new(MonsterType::Weak, &mut rolls);
        let mut player = Player::new();

        let outcome = player.fight(&mut monster, &mut rolls);
        assert_eq!(outcome, FightOutcome { rounds: 1, reward: 4 });
        assert_eq!(player.score(), 4);
    }

    #[test]
    fn test_fight_reduced_strength_reward() {
        // strength 15; roll 15 fails, hit 3 -> 12; roll 12 fails, hit 2 -> 10; roll 11 wins
        let mut rolls = ScriptedRolls::new([15, 15, 3, 12, 2, 11]);
        let mut monster = Monster::new(MonsterType::Strong, &mut rolls);
        let mut player = Player::new();

        let outcome = player.fight(&mut monster, &mut rolls);
        assert_eq!(outcome.rounds, 3);
        assert_eq!(outcome.reward, 10);
        assert_eq!(player.score(), 10);
        assert_eq!(monster.strength(), 10);
    }

    #[test]
    fn test_fight_negative_strength_clamps_score() {
        // strength 1; roll 1 fails, hit 3 -> -2; roll 1 wins with reward -2
        let mut rolls = ScriptedRolls::new([1, 1, 3, 1]);
        let mut monster = Monster::new(MonsterType::Weak, &mut rolls);
        let mut player = Player::new();

        let outcome = player.fight(&mut monster, &mut rolls);
        assert_eq!(outcome.reward, -2);
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_fight_terminates_against_worst_luck() {
        // Exhausted script: every roll is the range minimum (d20 -> 1, hit -> 1).
        let mut rolls = ScriptedRolls::new([15]);
        let mut monster = Monster::new(MonsterType::Strong, &mut rolls);
        let mut player = Player::new();

        let outcome = player.fight(&mut monster, &mut rolls);
        // 15 -> 0 takes 15 hits, then a roll of 1 beats 0
        assert_eq!(outcome.rounds, 16);
        assert_eq!(outcome.reward, 0);
        assert!(outcome.rounds <= 50);
    }

    proptest! {
        #[test]
        fn prop_score_never_negative(adjustments in proptest::collection::vec(-50i64..50, 0..40)) {
            let mut player = Player::new();
            for amount in adjustments {
                player.add_score(amount);
                prop_assert!(player.score() >= 0);
            }
        }

        #[test]
        fn prop_fight_bounded_and_exact(seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let mut monster = Monster::new(MonsterType::Strong, &mut rng);
            let mut player = Player::new();
            player.add_score(100);

            let outcome = player.fight(&mut monster, &mut rng);
            prop_assert!(outcome.rounds <= 50);
            prop_assert_eq!(outcome.reward, monster.strength());
            prop_assert_eq!(player.score(), (100 + outcome.reward).max(0));
        }
    }
}
