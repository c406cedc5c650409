//! Equipment slot definitions

use super::stats::{StatKey, WeightedStat, CIRCLET_MAIN_POOL, GOBLET_MAIN_POOL, SANDS_MAIN_POOL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filterable slot. Flower and plume share one profile since their main stats
/// are fixed (HP and ATK).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKey {
    FlowerPlume,
    Sands,
    Goblet,
    Circlet,
}

impl SlotKey {
    pub const ALL: [SlotKey; 4] = [
        SlotKey::FlowerPlume,
        SlotKey::Sands,
        SlotKey::Goblet,
        SlotKey::Circlet,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SlotKey::FlowerPlume => "flowerPlume",
            SlotKey::Sands => "sands",
            SlotKey::Goblet => "goblet",
            SlotKey::Circlet => "circlet",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SlotKey::FlowerPlume => "Flower/Plume",
            SlotKey::Sands => "Sands",
            SlotKey::Goblet => "Goblet",
            SlotKey::Circlet => "Circlet",
        }
    }

    /// Main stats fixed by the game (flower is always HP, plume always ATK)
    pub fn fixed_main_stats(&self) -> &'static [StatKey] {
        match self {
            SlotKey::FlowerPlume => &[StatKey::Hp, StatKey::Atk],
            _ => &[],
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SlotKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flowerplume" | "flower" | "plume" => Ok(SlotKey::FlowerPlume),
            "sands" => Ok(SlotKey::Sands),
            "goblet" => Ok(SlotKey::Goblet),
            "circlet" => Ok(SlotKey::Circlet),
            other => Err(format!("unknown slot '{}'", other)),
        }
    }
}

/// Weighted main stat pool for a slot (empty for flower/plume)
pub fn main_stat_pool(slot: SlotKey) -> &'static [WeightedStat] {
    match slot {
        SlotKey::FlowerPlume => &[],
        SlotKey::Sands => SANDS_MAIN_POOL,
        SlotKey::Goblet => GOBLET_MAIN_POOL,
        SlotKey::Circlet => CIRCLET_MAIN_POOL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_parse() {
        assert_eq!("sands".parse::<SlotKey>(), Ok(SlotKey::Sands));
        assert_eq!("flowerPlume".parse::<SlotKey>(), Ok(SlotKey::FlowerPlume));
        assert_eq!("Plume".parse::<SlotKey>(), Ok(SlotKey::FlowerPlume));
        assert!("boots".parse::<SlotKey>().is_err());
    }

    #[test]
    fn test_main_stat_pools() {
        assert!(main_stat_pool(SlotKey::FlowerPlume).is_empty());
        assert!(main_stat_pool(SlotKey::Goblet)
            .iter()
            .any(|w| w.stat == StatKey::PyroDamage));
        assert!(!main_stat_pool(SlotKey::Sands)
            .iter()
            .any(|w| w.stat == StatKey::CritRate));
        assert_eq!(
            SlotKey::FlowerPlume.fixed_main_stats(),
            &[StatKey::Hp, StatKey::Atk]
        );
    }
}
