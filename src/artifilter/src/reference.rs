//! Reference data for artifact filtering
//!
//! Hardcoded game data: stat identifiers and their roll weights, slot main
//! stat pools, and the artifact set catalog with its two-piece lookup. All of
//! it is read-only; lookups return `None` or an empty slice for unknown keys.

mod sets;
mod slots;
mod stats;

pub use sets::{full_sets_for_half, set_by_key, set_display_name, ArtifactSet, ARTIFACT_SETS};
pub use slots::{main_stat_pool, SlotKey};
pub use stats::{
    stat_by_key, substat_weight, StatKey, WeightedStat, ALL_STATS, CIRCLET_MAIN_POOL,
    ELEMENTAL_DAMAGE_STATS, GOBLET_MAIN_POOL, SANDS_MAIN_POOL, SUBSTAT_POOL,
};
