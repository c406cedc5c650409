//! Filter computation across every character and equipment set
//!
//! Add phase: every visible build becomes one requirement per relevant set.
//! Merge phase: each set's requirements are merged, finalized and ranked.

use crate::builder::build_requirement;
use crate::builds::{BuildGroup, ComputeOptions};
use crate::merge::merge;
use crate::reference::{SlotKey, StatKey};
use crate::requirement::{push_unique, same_set, EquipmentSetFilterResult, SetRequirement};
use indexmap::IndexMap;
use tracing::debug;

/// Compute the filter configurations for every set any visible build touches.
///
/// Sets appear in the order builds first reach them.
pub fn compute_artifact_filters(
    build_groups: &[BuildGroup],
    options: &ComputeOptions,
) -> Vec<EquipmentSetFilterResult> {
    let per_set = collect_requirements(build_groups, options);

    per_set
        .into_iter()
        .map(|(set_id, requirements)| {
            let mut configurations: Vec<SetRequirement> = merge(&requirements, options)
                .into_iter()
                .map(finalize_requirement)
                .collect();
            sort_by_priority(&mut configurations);
            debug!(
                set = %set_id,
                contributed = requirements.len(),
                configurations = configurations.len(),
                "set merged"
            );
            EquipmentSetFilterResult {
                set_id,
                configurations,
            }
        })
        .collect()
}

/// Add phase: requirements per set id, in first-seen order
fn collect_requirements(
    build_groups: &[BuildGroup],
    options: &ComputeOptions,
) -> IndexMap<String, Vec<SetRequirement>> {
    let mut per_set: IndexMap<String, Vec<SetRequirement>> = IndexMap::new();

    for group in build_groups {
        for build in group.visible_builds() {
            let is_full_set = build.composition.is_full_set();
            for set_id in build.composition.relevant_sets() {
                let requirement = build_requirement(build, &group.character_id, is_full_set, options);
                if options.skip_crit_builds && is_crit_build(&requirement) {
                    debug!(character = %group.character_id, set = %set_id, "skipped crit build");
                    continue;
                }
                per_set.entry(set_id).or_default().push(requirement);
            }
        }
    }

    per_set
}

/// Pinned to exactly crit rate + crit damage (the in-game auto-lock covers these)
fn is_crit_build(requirement: &SetRequirement) -> bool {
    same_set(
        &requirement.flower_plume.must_present,
        &[StatKey::CritRate, StatKey::CritDamage],
    )
}

/// Expand the "any crit" placeholder and sort main stats into canonical order
pub fn finalize_requirement(mut requirement: SetRequirement) -> SetRequirement {
    for key in SlotKey::ALL {
        let slot = requirement.slot_mut(key);
        let mut main_stats = Vec::with_capacity(slot.main_stats.len() + 1);
        for stat in &slot.main_stats {
            if *stat == StatKey::AnyCrit {
                push_unique(&mut main_stats, StatKey::CritRate);
                push_unique(&mut main_stats, StatKey::CritDamage);
            } else {
                push_unique(&mut main_stats, *stat);
            }
        }
        main_stats.sort();
        slot.main_stats = main_stats;
    }
    requirement
}

/// Most four-piece characters first, then most characters overall
fn sort_by_priority(configurations: &mut [SetRequirement]) {
    configurations.sort_by(|a, b| {
        b.count_4pc()
            .cmp(&a.count_4pc())
            .then_with(|| b.served_characters.len().cmp(&a.served_characters.len()))
    });
}
