//! Stat identifiers and roll weights

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stat identifier, keyed the way GOOD exports name them.
///
/// Declaration order is the canonical display order for main stats. The
/// `AnyElementalDamage` placeholder sits right before the elemental block and
/// `AnyCrit` right before the crit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatKey {
    #[serde(rename = "hp")]
    Hp,
    #[serde(rename = "atk")]
    Atk,
    #[serde(rename = "def")]
    Def,
    #[serde(rename = "hp_")]
    HpPercent,
    #[serde(rename = "atk_")]
    AtkPercent,
    #[serde(rename = "def_")]
    DefPercent,
    #[serde(rename = "eleMas")]
    ElementalMastery,
    #[serde(rename = "enerRech_")]
    EnergyRecharge,
    #[serde(rename = "heal_")]
    HealingBonus,
    #[serde(rename = "anyCrit_")]
    AnyCrit,
    #[serde(rename = "critRate_")]
    CritRate,
    #[serde(rename = "critDMG_")]
    CritDamage,
    #[serde(rename = "anyElemental_dmg_")]
    AnyElementalDamage,
    #[serde(rename = "physical_dmg_")]
    PhysicalDamage,
    #[serde(rename = "anemo_dmg_")]
    AnemoDamage,
    #[serde(rename = "geo_dmg_")]
    GeoDamage,
    #[serde(rename = "electro_dmg_")]
    ElectroDamage,
    #[serde(rename = "hydro_dmg_")]
    HydroDamage,
    #[serde(rename = "pyro_dmg_")]
    PyroDamage,
    #[serde(rename = "cryo_dmg_")]
    CryoDamage,
    #[serde(rename = "dendro_dmg_")]
    DendroDamage,
    /// Anything we don't recognize. Carries no weight in any pool.
    #[serde(rename = "unknown", other)]
    Unknown,
}

/// The eight damage-bonus goblet main stats
pub const ELEMENTAL_DAMAGE_STATS: &[StatKey] = &[
    StatKey::PhysicalDamage,
    StatKey::AnemoDamage,
    StatKey::GeoDamage,
    StatKey::ElectroDamage,
    StatKey::HydroDamage,
    StatKey::PyroDamage,
    StatKey::CryoDamage,
    StatKey::DendroDamage,
];

/// Every concrete stat, in canonical order (placeholders and `Unknown` excluded)
pub const ALL_STATS: &[StatKey] = &[
    StatKey::Hp,
    StatKey::Atk,
    StatKey::Def,
    StatKey::HpPercent,
    StatKey::AtkPercent,
    StatKey::DefPercent,
    StatKey::ElementalMastery,
    StatKey::EnergyRecharge,
    StatKey::HealingBonus,
    StatKey::CritRate,
    StatKey::CritDamage,
    StatKey::PhysicalDamage,
    StatKey::AnemoDamage,
    StatKey::GeoDamage,
    StatKey::ElectroDamage,
    StatKey::HydroDamage,
    StatKey::PyroDamage,
    StatKey::CryoDamage,
    StatKey::DendroDamage,
];

/// A stat together with its relative roll weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedStat {
    pub stat: StatKey,
    pub weight: f64,
}

const fn weighted(stat: StatKey, weight: f64) -> WeightedStat {
    WeightedStat { stat, weight }
}

/// Secondary stat pool. A piece never rolls a secondary equal to its main stat.
pub const SUBSTAT_POOL: &[WeightedStat] = &[
    weighted(StatKey::Hp, 6.0),
    weighted(StatKey::Atk, 6.0),
    weighted(StatKey::Def, 6.0),
    weighted(StatKey::HpPercent, 4.0),
    weighted(StatKey::AtkPercent, 4.0),
    weighted(StatKey::DefPercent, 4.0),
    weighted(StatKey::EnergyRecharge, 4.0),
    weighted(StatKey::ElementalMastery, 4.0),
    weighted(StatKey::CritRate, 3.0),
    weighted(StatKey::CritDamage, 3.0),
];

/// Sands main stat pool
pub const SANDS_MAIN_POOL: &[WeightedStat] = &[
    weighted(StatKey::HpPercent, 1334.0),
    weighted(StatKey::AtkPercent, 1333.0),
    weighted(StatKey::DefPercent, 1333.0),
    weighted(StatKey::ElementalMastery, 500.0),
    weighted(StatKey::EnergyRecharge, 500.0),
];

/// Goblet main stat pool
pub const GOBLET_MAIN_POOL: &[WeightedStat] = &[
    weighted(StatKey::HpPercent, 770.0),
    weighted(StatKey::AtkPercent, 770.0),
    weighted(StatKey::DefPercent, 760.0),
    weighted(StatKey::PyroDamage, 200.0),
    weighted(StatKey::ElectroDamage, 200.0),
    weighted(StatKey::CryoDamage, 200.0),
    weighted(StatKey::HydroDamage, 200.0),
    weighted(StatKey::DendroDamage, 200.0),
    weighted(StatKey::AnemoDamage, 200.0),
    weighted(StatKey::GeoDamage, 200.0),
    weighted(StatKey::PhysicalDamage, 200.0),
    weighted(StatKey::ElementalMastery, 100.0),
];

/// Circlet main stat pool
pub const CIRCLET_MAIN_POOL: &[WeightedStat] = &[
    weighted(StatKey::HpPercent, 1100.0),
    weighted(StatKey::AtkPercent, 1100.0),
    weighted(StatKey::DefPercent, 1100.0),
    weighted(StatKey::CritRate, 500.0),
    weighted(StatKey::CritDamage, 500.0),
    weighted(StatKey::HealingBonus, 500.0),
    weighted(StatKey::ElementalMastery, 200.0),
];

impl StatKey {
    /// Wire key (e.g. `critRate_`)
    pub fn key(&self) -> &'static str {
        match self {
            StatKey::Hp => "hp",
            StatKey::Atk => "atk",
            StatKey::Def => "def",
            StatKey::HpPercent => "hp_",
            StatKey::AtkPercent => "atk_",
            StatKey::DefPercent => "def_",
            StatKey::ElementalMastery => "eleMas",
            StatKey::EnergyRecharge => "enerRech_",
            StatKey::HealingBonus => "heal_",
            StatKey::AnyCrit => "anyCrit_",
            StatKey::CritRate => "critRate_",
            StatKey::CritDamage => "critDMG_",
            StatKey::AnyElementalDamage => "anyElemental_dmg_",
            StatKey::PhysicalDamage => "physical_dmg_",
            StatKey::AnemoDamage => "anemo_dmg_",
            StatKey::GeoDamage => "geo_dmg_",
            StatKey::ElectroDamage => "electro_dmg_",
            StatKey::HydroDamage => "hydro_dmg_",
            StatKey::PyroDamage => "pyro_dmg_",
            StatKey::CryoDamage => "cryo_dmg_",
            StatKey::DendroDamage => "dendro_dmg_",
            StatKey::Unknown => "unknown",
        }
    }

    /// Short human-readable label
    pub fn name(&self) -> &'static str {
        match self {
            StatKey::Hp => "HP",
            StatKey::Atk => "ATK",
            StatKey::Def => "DEF",
            StatKey::HpPercent => "HP%",
            StatKey::AtkPercent => "ATK%",
            StatKey::DefPercent => "DEF%",
            StatKey::ElementalMastery => "EM",
            StatKey::EnergyRecharge => "ER%",
            StatKey::HealingBonus => "Healing%",
            StatKey::AnyCrit => "Any Crit",
            StatKey::CritRate => "CR%",
            StatKey::CritDamage => "CD%",
            StatKey::AnyElementalDamage => "Any Elemental%",
            StatKey::PhysicalDamage => "Physical%",
            StatKey::AnemoDamage => "Anemo%",
            StatKey::GeoDamage => "Geo%",
            StatKey::ElectroDamage => "Electro%",
            StatKey::HydroDamage => "Hydro%",
            StatKey::PyroDamage => "Pyro%",
            StatKey::CryoDamage => "Cryo%",
            StatKey::DendroDamage => "Dendro%",
            StatKey::Unknown => "?",
        }
    }

    pub fn is_elemental_damage(&self) -> bool {
        ELEMENTAL_DAMAGE_STATS.contains(self)
    }

    pub fn is_crit(&self) -> bool {
        matches!(self, StatKey::CritRate | StatKey::CritDamage)
    }

    /// Whether this stat can appear as a secondary stat at all
    pub fn is_substat(&self) -> bool {
        SUBSTAT_POOL.iter().any(|w| w.stat == *self)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatKey {
    type Err = std::convert::Infallible;

    /// Unrecognized keys become `StatKey::Unknown` rather than an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(stat_by_key(s).unwrap_or(StatKey::Unknown))
    }
}

/// Look up a stat by its wire key, including the two placeholders
pub fn stat_by_key(key: &str) -> Option<StatKey> {
    ALL_STATS
        .iter()
        .chain([StatKey::AnyCrit, StatKey::AnyElementalDamage].iter())
        .find(|s| s.key() == key)
        .copied()
}

/// Relative weight of a stat in the secondary pool (0 when absent)
pub fn substat_weight(stat: StatKey) -> f64 {
    SUBSTAT_POOL
        .iter()
        .find(|w| w.stat == stat)
        .map(|w| w.weight)
        .unwrap_or(0.0)
}
