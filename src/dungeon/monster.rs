//! Monsters: combat entities whose strength wears down as they are hit.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core::{DungeonError, RandomSource, TierKind};

/// Strength lost per hit, rolled uniformly.
pub const HIT_DAMAGE: RangeInclusive<i64> = 1..=3;

/// Monster type tier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum MonsterType {
    Weak,
    Medium,
    Strong,
}

impl MonsterType {
    /// Closed starting-strength range for this tier.
    #[must_use]
    pub const fn strength_range(self) -> RangeInclusive<i64> {
        match self {
            MonsterType::Weak => 1..=5,
            MonsterType::Medium => 6..=10,
            MonsterType::Strong => 11..=15,
        }
    }
}

impl TryFrom<u8> for MonsterType {
    type Error = DungeonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MonsterType::Weak),
            2 => Ok(MonsterType::Medium),
            3 => Ok(MonsterType::Strong),
            _ => Err(DungeonError::InvalidTier {
                kind: TierKind::MonsterType,
                value,
            }),
        }
    }
}

/// A monster. Strength has no floor and may drop to zero or below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Monster {
    kind: MonsterType,
    strength: i64,
}

impl Monster {
    /// Roll a new monster of the given type.
    pub fn new(kind: MonsterType, rng: &mut impl RandomSource) -> Self {
        let range = kind.strength_range();
        let strength = rng.roll(*range.start(), *range.end());
        Self { kind, strength }
    }

    #[must_use]
    pub fn kind(&self) -> MonsterType {
        self.kind
    }

    #[must_use]
    pub fn strength(&self) -> i64 {
        self.strength
    }

    /// Knock 1-3 points off the monster's strength. Returns the amount lost.
    pub fn reduce_strength(&mut self, rng: &mut impl RandomSource) -> i64 {
        let hit = rng.roll(*HIT_DAMAGE.start(), *HIT_DAMAGE.end());
        self.strength -= hit;
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRolls};
    use strum::IntoEnumIterator;

    #[test]
    fn test_strength_within_tier() {
        let mut rng = GameRng::new(7);
        for kind in MonsterType::iter() {
            for _ in 0..10 {
                let monster = Monster::new(kind, &mut rng);
                assert!(kind.strength_range().contains(&monster.strength()));
                assert_eq!(monster.kind(), kind);
            }
        }
    }

    #[test]
    fn test_reduce_strength() {
        let mut rolls = ScriptedRolls::new([3, 1]);
        let mut monster = Monster::new(MonsterType::Weak, &mut rolls);
        assert_eq!(monster.strength(), 3);

        assert_eq!(monster.reduce_strength(&mut rolls), 1);
        assert_eq!(monster.strength(), 2);
    }

    #[test]
    fn test_strength_goes_negative() {
        let mut rolls = ScriptedRolls::new([1, 3, 3]);
        let mut monster = Monster::new(MonsterType::Weak, &mut rolls);
        monster.reduce_strength(&mut rolls);
        monster.reduce_strength(&mut rolls);
        assert_eq!(monster.strength(), -5);
    }

    #[test]
    fn test_reduce_bounded() {
        let mut rng = GameRng::new(11);
        let mut monster = Monster::new(MonsterType::Strong, &mut rng);
        for _ in 0..20 {
            let before = monster.strength();
            let hit = monster.reduce_strength(&mut rng);
            assert!(HIT_DAMAGE.contains(&hit));
            assert_eq!(monster.strength(), before - hit);
        }
    }

    #[test]
    fn test_from_raw_type() {
        assert_eq!(MonsterType::try_from(3).unwrap(), MonsterType::Strong);
        assert!(matches!(
            MonsterType::try_from(7),
            Err(DungeonError::InvalidTier {
                kind: TierKind::MonsterType,
                value: 7
            })
        ));
    }
}
