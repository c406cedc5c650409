//! Step 3: rigid-pair promotion

use crate::reference::StatKey;
use crate::requirement::{push_unique, union_into, SetRequirement, SlotRequirement, SlotShape};

use super::{identical_slot, merge_to_fixed_point, merged_main_stats};

/// Merge rigid configurations that differ in a single pinned stat (or a rigid
/// one into a compatible pick-one one). Runs to a fixed point and returns the
/// number of merges.
pub fn promote_rigid_pairs(configs: &mut Vec<SetRequirement>) -> usize {
    merge_to_fixed_point(configs, "rigid promotion", promote_slot)
}

/// Slot rule for rigid promotion. Two pick slots are left to pick-one unification.
pub fn promote_slot(a: &SlotRequirement, b: &SlotRequirement) -> Option<SlotRequirement> {
    if let Some(same) = identical_slot(a, b) {
        return Some(same);
    }

    match (a.shape(), b.shape()) {
        (SlotShape::Rigid, SlotShape::Rigid) => rigid_pair(a, b),
        (SlotShape::Rigid, SlotShape::Pick) => rigid_into_pick(a, b, true),
        (SlotShape::Pick, SlotShape::Rigid) => rigid_into_pick(b, a, false),
        _ => None,
    }
}

fn rigid_pair(a: &SlotRequirement, b: &SlotRequirement) -> Option<SlotRequirement> {
    let k = a.min_stat_count;
    if b.min_stat_count != k {
        return None;
    }

    let mut substats = a.substats.clone();
    union_into(&mut substats, &a.must_present);
    union_into(&mut substats, &b.substats);
    union_into(&mut substats, &b.must_present);

    let common: Vec<StatKey> = a
        .must_present
        .iter()
        .filter(|s| b.must_present.contains(s))
        .copied()
        .collect();
    let keep = k.saturating_sub(1);
    if common.len() < keep {
        return None;
    }

    let mut ordered: Vec<StatKey> = Vec::with_capacity(common.len());
    for stat in a.must_present.iter().chain(&b.must_present).chain(&common) {
        if common.contains(stat) {
            push_unique(&mut ordered, *stat);
        }
    }
    ordered.truncate(keep);

    Some(SlotRequirement {
        main_stats: merged_main_stats(&a.main_stats, &b.main_stats),
        substats,
        must_present: ordered,
        min_stat_count: k,
    })
}

/// The rigid side's extra pinned stats become free-pick candidates.
/// `rigid_first` tracks which config came first, for pool ordering.
fn rigid_into_pick(
    rigid: &SlotRequirement,
    pick: &SlotRequirement,
    rigid_first: bool,
) -> Option<SlotRequirement> {
    let pins_covered = pick
        .must_present
        .iter()
        .all(|s| rigid.must_present.contains(s));
    if !pins_covered || pick.min_stat_count > rigid.min_stat_count {
        return None;
    }

    let substats = if rigid_first {
        let mut pool = rigid.must_present.clone();
        union_into(&mut pool, &pick.substats);
        pool
    } else {
        let mut pool = pick.substats.clone();
        union_into(&mut pool, &rigid.must_present);
        pool
    };

    let main_stats = if rigid_first {
        merged_main_stats(&rigid.main_stats, &pick.main_stats)
    } else {
        merged_main_stats(&pick.main_stats, &rigid.main_stats)
    };

    Some(SlotRequirement {
        main_stats,
        substats,
        must_present: pick.must_present.clone(),
        min_stat_count: pick.min_stat_count,
    })
}
