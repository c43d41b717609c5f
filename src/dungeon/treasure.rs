//! Treasure: a fixed reward rolled once from its rarity tier.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::core::{DungeonError, RandomSource, TierKind};

/// Treasure rarity tier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    /// Closed reward range for this tier.
    #[must_use]
    pub const fn reward_range(self) -> RangeInclusive<i64> {
        match self {
            Rarity::Common => 1..=10,
            Rarity::Uncommon => 11..=20,
            Rarity::Rare => 21..=30,
        }
    }
}

impl TryFrom<u8> for Rarity {
    type Error = DungeonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rarity::Common),
            2 => Ok(Rarity::Uncommon),
            3 => Ok(Rarity::Rare),
            _ => Err(DungeonError::InvalidTier {
                kind: TierKind::TreasureRarity,
                value,
            }),
        }
    }
}

/// A treasure with its reward fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Treasure {
    rarity: Rarity,
    reward: i64,
}

impl Treasure {
    /// Roll a new treasure of the given rarity.
    pub fn new(rarity: Rarity, rng: &mut impl RandomSource) -> Self {
        let range = rarity.reward_range();
        let reward = rng.roll(*range.start(), *range.end());
        Self { rarity, reward }
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub fn reward(&self) -> i64 {
        self.reward
    }
}
