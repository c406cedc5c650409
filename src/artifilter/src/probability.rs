//! Exact match probabilities for freshly rolled pieces
//!
//! A maxed piece carries exactly four secondary stats, drawn by weight without
//! replacement from the secondary pool minus the piece's main stat. For a slot
//! requirement we enumerate every 4-subset of that pool, keep the ones that pass
//! the match rule, and sum their exact draw probabilities.

use crate::reference::{main_stat_pool, SlotKey, StatKey, WeightedStat, SUBSTAT_POOL};
use crate::requirement::SlotRequirement;
use serde::{Deserialize, Serialize};

/// Secondary stats on a maxed piece
pub const SUBSTAT_DRAWS: usize = 4;

/// Base probability above which the tightened (`min_stat_count + 1`) odds are shown
pub const TIGHTEN_DISPLAY_THRESHOLD: f64 = 0.10;

/// Probability that a random piece for `slot` satisfies `requirement`
pub fn slot_match_probability(slot: SlotKey, requirement: &SlotRequirement) -> f64 {
    if requirement.is_unconstrained() {
        return 1.0;
    }

    if slot == SlotKey::FlowerPlume {
        // flower (HP) and plume (ATK) weigh the same
        let fixed = slot.fixed_main_stats();
        let sum: f64 = fixed
            .iter()
            .map(|main| substat_success(*main, requirement))
            .sum();
        return sum / fixed.len() as f64;
    }

    let pool = main_stat_pool(slot);
    let total: f64 = pool.iter().map(|w| w.weight).sum();
    if total <= 0.0 {
        return 0.0;
    }

    candidate_main_stats(pool, &requirement.main_stats)
        .iter()
        .map(|c| c.weight / total * substat_success(c.stat, requirement))
        .sum()
}

/// Main stats that pass the slot's main stat choice, with their pool weights.
/// Placeholders expand to every stat they stand for; nothing chosen means the
/// whole pool.
fn candidate_main_stats(pool: &[WeightedStat], chosen: &[StatKey]) -> Vec<WeightedStat> {
    if chosen.is_empty() {
        return pool.to_vec();
    }
    pool.iter()
        .filter(|w| chosen.iter().any(|c| covers(*c, w.stat)))
        .copied()
        .collect()
}

fn covers(choice: StatKey, stat: StatKey) -> bool {
    match choice {
        StatKey::AnyElementalDamage => stat.is_elemental_damage(),
        StatKey::AnyCrit => stat.is_crit(),
        other => other == stat,
    }
}

/// Probability that the four secondary stats of a piece with main stat `main`
/// satisfy `requirement`.
pub fn substat_success(main: StatKey, requirement: &SlotRequirement) -> f64 {
    let pool: Vec<WeightedStat> = SUBSTAT_POOL
        .iter()
        .filter(|w| w.stat != main)
        .copied()
        .collect();
    if pool.len() < SUBSTAT_DRAWS {
        return 0.0;
    }

    // a pinned stat equal to the main stat is already there
    let effective_must: Vec<StatKey> = requirement
        .must_present
        .iter()
        .filter(|s| **s != main)
        .copied()
        .collect();
    if effective_must.len() > SUBSTAT_DRAWS {
        return 0.0;
    }

    let mut must_mask: u32 = 0;
    for stat in &effective_must {
        match pool.iter().position(|w| w.stat == *stat) {
            Some(i) => must_mask |= 1 << i,
            None => return 0.0,
        }
    }

    let weights: Vec<f64> = pool.iter().map(|w| w.weight).collect();
    let mut odds = DrawOdds::new(&weights);
    let mut drawn = Vec::with_capacity(SUBSTAT_DRAWS);
    let mut success = 0.0;

    for mask in combinations(pool.len(), SUBSTAT_DRAWS) {
        if mask & must_mask != must_mask {
            continue;
        }
        drawn.clear();
        drawn.extend(
            pool.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, w)| w.stat),
        );
        if requirement.accepts_substats(main, &drawn) {
            success += odds.probability(mask);
        }
    }

    success
}

/// Every `k`-element subset of `0..n` as a bit mask, ascending
fn combinations(n: usize, k: usize) -> impl Iterator<Item = u32> {
    (0u32..(1u32 << n)).filter(move |m| m.count_ones() as usize == k)
}

/// Memoized probability of drawing exactly a given set of pool entries
/// through weighted draws without replacement.
struct DrawOdds<'a> {
    weights: &'a [f64],
    total: f64,
    memo: Vec<Option<f64>>,
}

impl<'a> DrawOdds<'a> {
    fn new(weights: &'a [f64]) -> Self {
        Self {
            weights,
            total: weights.iter().sum(),
            memo: vec![None; 1 << weights.len()],
        }
    }

    fn mask_weight(&self, mask: u32) -> f64 {
        self.weights
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, w)| w)
            .sum()
    }

    /// P(S) = Σ_{i∈S} w(i) / (total − w(S∖{i})) · P(S∖{i}), with P(∅) = 1
    fn probability(&mut self, mask: u32) -> f64 {
        if mask == 0 {
            return 1.0;
        }
        if let Some(p) = self.memo[mask as usize] {
            return p;
        }

        let mut p = 0.0;
        let mut bits = mask;
        while bits != 0 {
            let i = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            let rest = mask & !(1 << i);
            let remaining = self.total - self.mask_weight(rest);
            if remaining > 0.0 {
                p += self.weights[i] / remaining * self.probability(rest);
            }
        }

        self.memo[mask as usize] = Some(p);
        p
    }
}

/// What the display layer shows for one slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotOdds {
    pub base: f64,
    /// Odds with one more required stat, only when `base` clears the display threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tightened: Option<f64>,
}

/// Base probability plus the tightened variant (`min_stat_count + 1`, capped
/// at what the substat list allows) when the base is above
/// [`TIGHTEN_DISPLAY_THRESHOLD`] and the cap leaves room to tighten.
///
/// A display re-querying with `min(k + 1, cap)` gets the base back once `k`
/// is at the cap; here that case is `tightened: None` instead.
pub fn slot_odds(slot: SlotKey, requirement: &SlotRequirement) -> SlotOdds {
    let base = slot_match_probability(slot, requirement);
    let cap = requirement.substats.len().min(SUBSTAT_DRAWS);
    let tightened = (base > TIGHTEN_DISPLAY_THRESHOLD && requirement.min_stat_count < cap).then(|| {
        let stricter = SlotRequirement {
            min_stat_count: requirement.min_stat_count + 1,
            ..requirement.clone()
        };
        slot_match_probability(slot, &stricter)
    });
    SlotOdds { base, tightened }
}
