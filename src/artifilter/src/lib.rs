//! # artifilter
//!
//! Artifact filter planning - turn per-character build wishes into the
//! smallest set of in-game keep/discard filters, and price each one.
//!
//! This library provides functionality to:
//! - Translate a character build into per-slot substat requirements
//! - Merge requirements sharing an artifact set into a minimal list of
//!   configurations without tightening anyone's requirement
//! - Compute the exact probability that a freshly rolled piece passes a
//!   configuration
//!
//! ## Example
//!
//! ```no_run
//! use artifilter::{compute_artifact_filters, load_build_groups, slot_match_probability, ComputeOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let groups = load_build_groups("builds.yaml".as_ref())?;
//! let results = compute_artifact_filters(&groups, &ComputeOptions::default());
//!
//! for result in &results {
//!     for config in &result.configurations {
//!         for (slot, requirement) in config.slots() {
//!             let p = slot_match_probability(slot, requirement);
//!             println!("{} {}: {:.2}%", result.set_id, slot, p * 100.0);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod builds;
pub mod filters;
pub mod load;
pub mod merge;
pub mod probability;
pub mod reference;
pub mod requirement;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use builder::build_requirement;
#[doc(inline)]
pub use builds::{Build, BuildGroup, Composition, ComputeOptions, MainStatChoices};
#[doc(inline)]
pub use filters::{compute_artifact_filters, finalize_requirement};
#[doc(inline)]
pub use load::{load_build_groups, parse_build_groups, InputFormat, LoadError};
#[doc(inline)]
pub use merge::merge;
#[doc(inline)]
pub use probability::{slot_match_probability, slot_odds, substat_success, SlotOdds};
#[doc(inline)]
pub use requirement::{
    EquipmentSetFilterResult, ServedCharacter, SetRequirement, SlotRequirement, SlotShape,
};

// Reference data (stats, slots, sets)
#[doc(inline)]
pub use reference::{
    full_sets_for_half, main_stat_pool, set_by_key, set_display_name, stat_by_key, ArtifactSet,
    SlotKey, StatKey, ARTIFACT_SETS, ELEMENTAL_DAMAGE_STATS, SUBSTAT_POOL,
};
