//! Character build input model
//!
//! These types are what the build-editing layer hands us. Nothing here is
//! validated beyond what serde enforces; unknown stat keys quietly become
//! [`StatKey::Unknown`].

use crate::reference::{full_sets_for_half, StatKey};
use serde::{Deserialize, Serialize};

/// How a build reaches its set bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "composition", rename_all = "camelCase")]
pub enum Composition {
    /// Four pieces of one set
    #[serde(rename = "full-set")]
    FullSet {
        #[serde(default)]
        set: Option<String>,
    },
    /// Two two-piece effects, each possibly shared by several sets
    #[serde(rename = "half+half")]
    HalfHalf {
        #[serde(default)]
        first: Option<String>,
        #[serde(default)]
        second: Option<String>,
    },
}

impl Composition {
    pub fn is_full_set(&self) -> bool {
        matches!(self, Composition::FullSet { .. })
    }

    /// Full-set ids this composition contributes to, first-seen order, no repeats
    pub fn relevant_sets(&self) -> Vec<String> {
        match self {
            Composition::FullSet { set } => set.iter().cloned().collect(),
            Composition::HalfHalf { first, second } => {
                let mut sets: Vec<String> = Vec::new();
                for half in [first, second].into_iter().flatten() {
                    for full in full_sets_for_half(half) {
                        if !sets.iter().any(|s| s == full) {
                            sets.push((*full).to_string());
                        }
                    }
                }
                sets
            }
        }
    }
}

/// Main stats chosen for the three variable slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainStatChoices {
    pub sands: Vec<StatKey>,
    pub goblet: Vec<StatKey>,
    pub circlet: Vec<StatKey>,
}

/// One build of one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    #[serde(flatten)]
    pub composition: Composition,
    #[serde(default)]
    pub main_stats: MainStatChoices,
    #[serde(default)]
    pub substats: Vec<StatKey>,
    /// Overrides the default "every chosen substat" count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stat_count: Option<usize>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// All builds of one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildGroup {
    pub character_id: String,
    #[serde(default)]
    pub builds: Vec<Build>,
}

impl BuildGroup {
    pub fn visible_builds(&self) -> impl Iterator<Item = &Build> {
        self.builds.iter().filter(|b| b.visible)
    }
}

/// Knobs for a filter computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ComputeOptions {
    /// Drop builds pinned to crit rate + crit damage (covered by the in-game auto-lock)
    pub skip_crit_builds: bool,
    /// Collapse elemental goblet picks into "any elemental"
    pub expand_elemental_goblet: bool,
    /// Collapse crit circlet picks into "any crit" on full-set builds
    pub expand_crit_circlet: bool,
    /// Merge "mustPresent + one free pick" variants
    pub merge_single_flex_variants: bool,
    /// Promote near-identical rigid requirements into pick-one ones
    pub find_rigid_common_subset: bool,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self {
            skip_crit_builds: false,
            expand_elemental_goblet: true,
            expand_crit_circlet: true,
            merge_single_flex_variants: true,
            find_rigid_common_subset: true,
        }
    }
}
