//! Step 2: pick-one unification

use crate::requirement::{union_into, SetRequirement, SlotRequirement, SlotShape};

use super::{identical_slot, merge_to_fixed_point, merged_main_stats};

/// Merge configurations whose slots are all "`must_present` + one free pick"
/// over the same pinned stats, pooling the free-pick candidates. Runs to a
/// fixed point and returns the number of merges.
pub fn unify_pick_one(configs: &mut Vec<SetRequirement>) -> usize {
    merge_to_fixed_point(configs, "pick-one", unify_slot)
}

/// Slot rule for pick-one unification
pub fn unify_slot(a: &SlotRequirement, b: &SlotRequirement) -> Option<SlotRequirement> {
    if let Some(same) = identical_slot(a, b) {
        return Some(same);
    }

    let both_pick = a.shape() == SlotShape::Pick && b.shape() == SlotShape::Pick;
    if !both_pick || a.min_stat_count != b.min_stat_count || !a.same_must_present(b) {
        return None;
    }

    let mut substats = a.substats.clone();
    union_into(&mut substats, &b.substats);
    Some(SlotRequirement {
        main_stats: merged_main_stats(&a.main_stats, &b.main_stats),
        substats,
        must_present: a.must_present.clone(),
        min_stat_count: a.min_stat_count,
    })
}
