//! Structured dungeon layouts.
//!
//! A layout is an ordered list of room descriptors, usually read from JSON:
//!
//! ```json
//! {
//!     "rooms": [
//!         { "type": 1, "treasureRarity": 1 },
//!         { "type": 2, "monsterType": 1 },
//!         { "type": 3 }
//!     ]
//! }
//! ```
//!
//! Room types: 1 = treasure, 2 = monster, 3 = empty. Tiers run 1-3.
//! Building rooms validates every descriptor and stops at the first bad one.

use serde::{Deserialize, Serialize};

use crate::core::{DungeonError, RandomSource, Result, TierKind};
use crate::dungeon::{Monster, MonsterType, Rarity, Room, Treasure};

pub const ROOM_TYPE_TREASURE: u8 = 1;
pub const ROOM_TYPE_MONSTER: u8 = 2;
pub const ROOM_TYPE_EMPTY: u8 = 3;

/// One room as described by the layout data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDescriptor {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treasure_rarity: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster_type: Option<u8>,
}

impl RoomDescriptor {
    #[must_use]
    pub fn treasure(rarity: u8) -> Self {
        Self {
            kind: ROOM_TYPE_TREASURE,
            treasure_rarity: Some(rarity),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn monster(monster_type: u8) -> Self {
        Self {
            kind: ROOM_TYPE_MONSTER,
            monster_type: Some(monster_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            kind: ROOM_TYPE_EMPTY,
            ..Self::default()
        }
    }

    /// Build the room, rolling its treasure or monster.
    pub fn build(&self, index: usize, rng: &mut impl RandomSource) -> Result<Room> {
        match self.kind {
            ROOM_TYPE_TREASURE => {
                let raw = self.treasure_rarity.ok_or(DungeonError::MissingTier {
                    index,
                    kind: TierKind::TreasureRarity,
                })?;
                let rarity = Rarity::try_from(raw)?;
                Ok(Room::treasure(Treasure::new(rarity, rng)))
            }
            ROOM_TYPE_MONSTER => {
                let raw = self.monster_type.ok_or(DungeonError::MissingTier {
                    index,
                    kind: TierKind::MonsterType,
                })?;
                let kind = MonsterType::try_from(raw)?;
                Ok(Room::monster(Monster::new(kind, rng)))
            }
            ROOM_TYPE_EMPTY => Ok(Room::empty()),
            value => Err(DungeonError::InvalidRoomKind { index, value }),
        }
    }
}

/// An ordered list of room descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonLayout {
    pub rooms: Vec<RoomDescriptor>,
}

impl DungeonLayout {
    #[must_use]
    pub fn new(rooms: Vec<RoomDescriptor>) -> Self {
        Self { rooms }
    }

    /// Parse a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Build every room in order.
    pub fn build_rooms(&self, rng: &mut impl RandomSource) -> Result<Vec<Room>> {
        if self.rooms.is_empty() {
            return Err(DungeonError::EmptyLayout);
        }
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, descriptor)| descriptor.build(index, &mut *rng))
            .collect()
    }
}
