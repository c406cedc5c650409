//! Build → requirement translation
//!
//! Every slot of a build shares the same substat profile; only the main stats
//! differ per slot.

use crate::builds::{Build, ComputeOptions};
use crate::reference::StatKey;
use crate::requirement::{push_unique, ServedCharacter, SetRequirement, SlotRequirement};

/// Most substats a maxed piece carries
pub const MAX_SUBSTATS: usize = 4;

/// A `must_present` heuristic: returns the pinned stats when it applies
type MustPresentRule = fn(substats: &[StatKey], min_stat_count: usize) -> Option<Vec<StatKey>>;

/// Evaluated top to bottom, first match wins. The last rule always matches.
const MUST_PRESENT_RULES: &[(&str, MustPresentRule)] = &[
    ("crit pair", crit_pair_rule),
    ("fully rigid", fully_rigid_rule),
    ("free pick", free_pick_rule),
];

fn crit_pair_rule(substats: &[StatKey], _: usize) -> Option<Vec<StatKey>> {
    (substats.contains(&StatKey::CritRate) && substats.contains(&StatKey::CritDamage))
        .then(|| vec![StatKey::CritRate, StatKey::CritDamage])
}

fn fully_rigid_rule(substats: &[StatKey], min_stat_count: usize) -> Option<Vec<StatKey>> {
    (min_stat_count == substats.len()).then(|| substats.to_vec())
}

fn free_pick_rule(_: &[StatKey], _: usize) -> Option<Vec<StatKey>> {
    Some(Vec::new())
}

/// Pick the pinned stats for a substat profile
pub fn detect_must_present(substats: &[StatKey], min_stat_count: usize) -> Vec<StatKey> {
    MUST_PRESENT_RULES
        .iter()
        .find_map(|(_, rule)| rule(substats, min_stat_count))
        .unwrap_or_default()
}

/// Effective count for a build: the override if any, else every chosen substat,
/// kept within what a piece can actually show.
pub fn effective_min_stat_count(substats: &[StatKey], requested: Option<usize>) -> usize {
    requested
        .unwrap_or(substats.len())
        .min(substats.len())
        .min(MAX_SUBSTATS)
}

/// Collapse elemental goblet picks into the "any elemental" placeholder
fn goblet_main_stats(chosen: &[StatKey], options: &ComputeOptions) -> Vec<StatKey> {
    if !options.expand_elemental_goblet || !chosen.iter().any(|s| s.is_elemental_damage()) {
        return chosen.to_vec();
    }
    let mut out = Vec::with_capacity(chosen.len());
    for stat in chosen {
        if stat.is_elemental_damage() {
            push_unique(&mut out, StatKey::AnyElementalDamage);
        } else {
            push_unique(&mut out, *stat);
        }
    }
    out
}

/// Collapse crit circlet picks into the "any crit" placeholder (full sets only)
fn circlet_main_stats(chosen: &[StatKey], is_full_set: bool, options: &ComputeOptions) -> Vec<StatKey> {
    if !options.expand_crit_circlet || !is_full_set || !chosen.iter().any(|s| s.is_crit()) {
        return chosen.to_vec();
    }
    let mut out = Vec::with_capacity(chosen.len());
    for stat in chosen {
        if stat.is_crit() {
            push_unique(&mut out, StatKey::AnyCrit);
        } else {
            push_unique(&mut out, *stat);
        }
    }
    out
}

/// Translate one build of one character into a requirement for every slot
pub fn build_requirement(
    build: &Build,
    character_id: &str,
    is_full_set: bool,
    options: &ComputeOptions,
) -> SetRequirement {
    let substats = build.substats.clone();
    let min_stat_count = effective_min_stat_count(&substats, build.min_stat_count);
    let must_present = detect_must_present(&substats, min_stat_count);

    let slot = |main_stats: Vec<StatKey>| SlotRequirement {
        main_stats,
        substats: substats.clone(),
        must_present: must_present.clone(),
        min_stat_count,
    };

    SetRequirement {
        flower_plume: slot(Vec::new()),
        sands: slot(build.main_stats.sands.clone()),
        goblet: slot(goblet_main_stats(&build.main_stats.goblet, options)),
        circlet: slot(circlet_main_stats(
            &build.main_stats.circlet,
            is_full_set,
            options,
        )),
        served_characters: vec![ServedCharacter {
            character_id: character_id.to_string(),
            has_perfect_merge: true,
            has_4pc_build: is_full_set,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builds::{Composition, MainStatChoices};
    use StatKey::*;

    fn build(substats: &[StatKey], min: Option<usize>) -> Build {
        Build {
            composition: Composition::FullSet {
                set: Some("EmblemOfSeveredFate".into()),
            },
            main_stats: MainStatChoices::default(),
            substats: substats.to_vec(),
            min_stat_count: min,
            visible: true,
        }
    }

    #[test]
    fn test_crit_pair_rule_wins() {
        let b = build(&[AtkPercent, CritRate, CritDamage, EnergyRecharge], Some(2));
        let req = build_requirement(&b, "Raiden", true, &ComputeOptions::default());
        for (_, slot) in req.slots() {
            assert_eq!(slot.must_present, vec![CritRate, CritDamage]);
            assert_eq!(slot.min_stat_count, 2);
        }
    }

    #[test]
    fn test_default_is_fully_rigid() {
        let b = build(&[AtkPercent, EnergyRecharge], None);
        let req = build_requirement(&b, "Bennett", true, &ComputeOptions::default());
        assert_eq!(req.sands.must_present, vec![AtkPercent, EnergyRecharge]);
        assert_eq!(req.sands.min_stat_count, 2);
        assert!(req.served_characters[0].has_perfect_merge);
        assert!(req.served_characters[0].has_4pc_build);
    }

    #[test]
    fn test_flexible_pick_n_pins_nothing() {
        let b = build(&[AtkPercent, EnergyRecharge, ElementalMastery], Some(2));
        let req = build_requirement(&b, "Kazuha", false, &ComputeOptions::default());
        assert!(req.circlet.must_present.is_empty());
        assert_eq!(req.circlet.min_stat_count, 2);
        assert!(!req.served_characters[0].has_4pc_build);
    }

    #[test]
    fn test_min_stat_count_clamped() {
        assert_eq!(effective_min_stat_count(&[Hp, Atk], Some(3)), 2);
        assert_eq!(
            effective_min_stat_count(&[Hp, Atk, Def, HpPercent, AtkPercent], None),
            4
        );
        assert_eq!(effective_min_stat_count(&[], None), 0);
    }

    #[test]
    fn test_goblet_elemental_collapse() {
        let mut b = build(&[CritRate], None);
        b.main_stats.goblet = vec![PyroDamage, AtkPercent, HydroDamage];
        let req = build_requirement(&b, "Xiangling", true, &ComputeOptions::default());
        assert_eq!(req.goblet.main_stats, vec![AnyElementalDamage, AtkPercent]);

        let opts = ComputeOptions {
            expand_elemental_goblet: false,
            ..Default::default()
        };
        let req = build_requirement(&b, "Xiangling", true, &opts);
        assert_eq!(req.goblet.main_stats, vec![PyroDamage, AtkPercent, HydroDamage]);
    }

    #[test]
    fn test_circlet_crit_collapse_full_set_only() {
        let mut b = build(&[CritRate], None);
        b.main_stats.circlet = vec![CritDamage, CritRate, HealingBonus];
        let full = build_requirement(&b, "Furina", true, &ComputeOptions::default());
        assert_eq!(full.circlet.main_stats, vec![AnyCrit, HealingBonus]);

        let half = build_requirement(&b, "Furina", false, &ComputeOptions::default());
        assert_eq!(half.circlet.main_stats, vec![CritDamage, CritRate, HealingBonus]);
    }

    #[test]
    fn test_flower_plume_has_no_main_stats() {
        let mut b = build(&[CritRate], None);
        b.main_stats.sands = vec![AtkPercent];
        let req = build_requirement(&b, "Hu Tao", true, &ComputeOptions::default());
        assert!(req.flower_plume.main_stats.is_empty());
        assert_eq!(req.sands.main_stats, vec![AtkPercent]);
    }
}
