//! Collapsing per-character requirements into as few configurations as possible
//!
//! Three steps, in order:
//!
//! 1. [`dedup`]: group configurations with identical slot signatures. Lossless.
//! 2. [`pick_one`]: unify configurations that are "all of `must_present` plus
//!    one free pick" by pooling their free picks.
//! 3. [`promote`]: turn pairs of near-identical rigid configurations into one
//!    pick-one configuration.
//!
//! Steps 2 and 3 scan every unordered pair, merge the first pair whose four
//! slots all qualify, and restart until a pass merges nothing. After step 3,
//! step 2 runs once more since promotion can produce new pick-one shapes. That
//! is a single extra pass, not an alternating fixed point.
//!
//! A merge never tightens anyone's requirement. When it loosens a side, every
//! character on that side loses `has_perfect_merge`.

mod dedup;
mod pick_one;
mod promote;

use crate::builds::ComputeOptions;
use crate::reference::{SlotKey, StatKey};
use crate::requirement::{union_into, SetRequirement, SlotRequirement};
use tracing::debug;

pub use dedup::dedup_exact;
pub use pick_one::{unify_pick_one, unify_slot};
pub use promote::{promote_rigid_pairs, promote_slot};

/// Per-slot merge rule: `None` when the two slots can't share a configuration
pub type SlotMerge = fn(&SlotRequirement, &SlotRequirement) -> Option<SlotRequirement>;

/// Merge the requirements contributed to one equipment set.
///
/// Inputs are cloned; the caller's data is never touched.
pub fn merge(requirements: &[SetRequirement], options: &ComputeOptions) -> Vec<SetRequirement> {
    let mut configs = dedup_exact(requirements);
    debug!(
        inputs = requirements.len(),
        after_dedup = configs.len(),
        "exact dedup"
    );

    if options.merge_single_flex_variants {
        unify_pick_one(&mut configs);
    }

    if options.find_rigid_common_subset {
        promote_rigid_pairs(&mut configs);
        if options.merge_single_flex_variants {
            unify_pick_one(&mut configs);
        }
    }

    configs
}

/// Scan all unordered pairs, merge the first qualifying pair in place, restart.
/// Returns the number of merges performed.
pub(crate) fn merge_to_fixed_point(
    configs: &mut Vec<SetRequirement>,
    step: &'static str,
    merge_slot: SlotMerge,
) -> usize {
    let mut merges = 0;
    'scan: loop {
        for i in 0..configs.len() {
            for j in (i + 1)..configs.len() {
                if let Some(merged) = merge_pair(&configs[i], &configs[j], merge_slot) {
                    debug!(step, first = i, second = j, "merged configurations");
                    configs[i] = merged;
                    configs.remove(j);
                    merges += 1;
                    continue 'scan;
                }
            }
        }
        break;
    }
    if merges > 0 {
        debug!(step, merges, remaining = configs.len(), "fixed point reached");
    }
    merges
}

/// Merge two configurations slot by slot; all four slots have to qualify.
pub(crate) fn merge_pair(
    a: &SetRequirement,
    b: &SetRequirement,
    merge_slot: SlotMerge,
) -> Option<SetRequirement> {
    let mut merged = SetRequirement::default();
    for key in SlotKey::ALL {
        *merged.slot_mut(key) = merge_slot(a.slot(key), b.slot(key))?;
    }

    let mut left = a.clone();
    if broadens(a, &merged) {
        left.mark_broadened();
    }
    let mut right = b.clone();
    if broadens(b, &merged) {
        right.mark_broadened();
    }

    merged.served_characters = left.served_characters;
    merged.absorb_characters(&right.served_characters);
    Some(merged)
}

/// Whether `merged` accepts more than `original` in any slot, main stats aside
fn broadens(original: &SetRequirement, merged: &SetRequirement) -> bool {
    SlotKey::ALL
        .iter()
        .any(|&key| !original.slot(key).accepts_same_as(merged.slot(key)))
}

/// Union of two main stat lists. Empty means "anything", so it wins.
pub(crate) fn merged_main_stats(a: &[StatKey], b: &[StatKey]) -> Vec<StatKey> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = a.to_vec();
    union_into(&mut out, b);
    out
}

/// Signature-identical slots: keep the first, pool the main stats
pub(crate) fn identical_slot(a: &SlotRequirement, b: &SlotRequirement) -> Option<SlotRequirement> {
    (a.signature() == b.signature()).then(|| SlotRequirement {
        main_stats: merged_main_stats(&a.main_stats, &b.main_stats),
        ..a.clone()
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::reference::StatKey::*;

    fn all_options() -> ComputeOptions {
        ComputeOptions::default()
    }

    #[test]
    fn test_identical_builds_collapse() {
        let a = config("Xiangling", &[CritRate, CritDamage], &[CritRate, CritDamage], 2);
        let b = config("Bennett", &[CritRate, CritDamage], &[CritRate, CritDamage], 2);
        let out = merge(&[a, b], &all_options());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].served_characters.len(), 2);
        assert!(perfect(&out[0], "Xiangling"));
        assert!(perfect(&out[0], "Bennett"));
    }

    #[test]
    fn test_rigid_pair_promoted() {
        let a = config("Bennett", &[AtkPercent, EnergyRecharge], &[AtkPercent, EnergyRecharge], 2);
        let b = config("Xiangling", &[AtkPercent, CritRate], &[AtkPercent, CritRate], 2);
        let out = merge(&[a, b], &all_options());
        assert_eq!(out.len(), 1);
        let sands = &out[0].sands;
        assert_eq!(sands.must_present, vec![AtkPercent]);
        assert_eq!(sands.min_stat_count, 2);
        assert!(sands.substats.contains(&EnergyRecharge));
        assert!(sands.substats.contains(&CritRate));
        assert!(!perfect(&out[0], "Bennett"));
        assert!(!perfect(&out[0], "Xiangling"));
    }

    #[test]
    fn test_flags_disable_steps() {
        let a = config("Bennett", &[AtkPercent, EnergyRecharge], &[AtkPercent, EnergyRecharge], 2);
        let b = config("Xiangling", &[AtkPercent, CritRate], &[AtkPercent, CritRate], 2);
        let opts = ComputeOptions {
            merge_single_flex_variants: false,
            find_rigid_common_subset: false,
            ..Default::default()
        };
        let out = merge(&[a.clone(), b.clone()], &opts);
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn test_inputs_untouched() {
        let a = config("Bennett", &[AtkPercent, EnergyRecharge], &[AtkPercent, EnergyRecharge], 2);
        let b = config("Xiangling", &[AtkPercent, CritRate], &[AtkPercent, CritRate], 2);
        let inputs = vec![a.clone(), b.clone()];
        let _ = merge(&inputs, &all_options());
        assert_eq!(inputs, vec![a, b]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let inputs = vec![
            config("A", &[AtkPercent, EnergyRecharge], &[AtkPercent, EnergyRecharge], 2),
            config("B", &[AtkPercent, CritRate], &[AtkPercent, CritRate], 2),
            config("C", &[AtkPercent, CritDamage, Hp], &[AtkPercent], 2),
            config("D", &[ElementalMastery, EnergyRecharge, HpPercent], &[], 2),
            config("E", &[CritRate, CritDamage], &[CritRate, CritDamage], 2),
            config("F", &[CritRate, CritDamage], &[CritRate, CritDamage], 2),
        ];
        let once = merge(&inputs, &all_options());
        let twice = merge(&once, &all_options());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_single_extra_pick_one_pass_after_promotion() {
        // C and D only become unifiable once A/B promote into a pick-one shape;
        // the trailing pick-one pass then folds everything together.
        let inputs = vec![
            config("A", &[AtkPercent, EnergyRecharge], &[AtkPercent, EnergyRecharge], 2),
            config("B", &[AtkPercent, CritRate], &[AtkPercent, CritRate], 2),
            config("C", &[AtkPercent, CritDamage], &[AtkPercent], 2),
        ];
        let out = merge(&inputs, &all_options());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].served_characters.len(), 3);
        assert_eq!(out[0].circlet.must_present, vec![AtkPercent]);
    }

    #[test]
    fn test_unconstrained_pool_growth_keeps_perfect_merge() {
        let mut a = config("Zhongli", &[CritRate, CritDamage], &[CritRate, CritDamage], 2);
        let mut b = config("Diona", &[CritRate, CritDamage], &[CritRate, CritDamage], 2);
        a.flower_plume = slot(&[HpPercent], &[], 0);
        b.flower_plume = slot(&[EnergyRecharge], &[], 0);
        let merged = merge_pair(&a, &b, promote::promote_slot).unwrap();
        assert_eq!(merged.flower_plume.substats, vec![HpPercent, EnergyRecharge]);
        assert!(perfect(&merged, "Zhongli"));
        assert!(perfect(&merged, "Diona"));
    }

    #[test]
    fn test_extra_pick_one_pass_runs_once() {
        let with_sands = |id: &str, others: &[StatKey], sands: SlotRequirement| {
            let mut c = config(id, others, others, 2);
            c.sands = sands;
            c
        };
        let crit = [CritRate, CritDamage];
        let inputs = vec![
            with_sands("Hutao", &crit, slot(&[AtkPercent, EnergyRecharge], &[AtkPercent, EnergyRecharge], 2)),
            with_sands("Yoimiya", &crit, slot(&[AtkPercent, HpPercent], &[AtkPercent, HpPercent], 2)),
            with_sands("Lyney", &crit, slot(&[AtkPercent, ElementalMastery], &[AtkPercent], 2)),
            with_sands(
                "Nilou",
                &[CritRate, HpPercent],
                slot(&[AtkPercent, EnergyRecharge, HpPercent, ElementalMastery], &[AtkPercent], 2),
            ),
        ];

        let once = merge(&inputs, &all_options());
        assert_eq!(once.len(), 2);
        let ids: Vec<&str> = once[0]
            .served_characters
            .iter()
            .map(|c| c.character_id.as_str())
            .collect();
        assert_eq!(ids, vec!["Hutao", "Yoimiya", "Lyney"]);
        assert_eq!(once[1].served_characters.len(), 1);
        assert_eq!(once[1].served_characters[0].character_id, "Nilou");
        assert_eq!(once[1].flower_plume.must_present, vec![CritRate, HpPercent]);

        // promotion would now pair the crit slots, but only on a later run
        assert_eq!(merge(&once, &all_options()).len(), 1);
    }

    #[test]
    fn test_empty_main_stats_absorb() {
        assert!(merged_main_stats(&[], &[AtkPercent]).is_empty());
        assert_eq!(
            merged_main_stats(&[AtkPercent], &[HpPercent, AtkPercent]),
            vec![AtkPercent, HpPercent]
        );
    }
}
