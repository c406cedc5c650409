//! Per-slot and per-set filter requirements
//!
//! A [`SetRequirement`] is one filter configuration for one equipment set: a
//! [`SlotRequirement`] for each slot plus the characters it serves. These are
//! rebuilt from scratch on every computation.

use crate::reference::{SlotKey, StatKey};
use serde::{Deserialize, Serialize};

/// What a slot's secondary stats have to look like
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequirement {
    /// Acceptable main stats; empty accepts anything
    pub main_stats: Vec<StatKey>,
    /// Secondary stats the player cares about
    pub substats: Vec<StatKey>,
    /// Subset of `substats` that has to be present regardless of count
    pub must_present: Vec<StatKey>,
    /// Minimum number of distinct `substats` present (main stat counts)
    pub min_stat_count: usize,
}

/// Structural classification used by the merger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotShape {
    /// Every required stat pinned
    Rigid,
    /// All of `must_present` plus exactly one free pick
    Pick,
    Other,
}

/// Order-insensitive identity of a slot, ignoring main stats
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotSignature {
    pub min_stat_count: usize,
    pub must_present: Vec<StatKey>,
    pub substats: Vec<StatKey>,
}

impl SlotRequirement {
    pub fn shape(&self) -> SlotShape {
        let must = self.must_present.len();
        if must == self.min_stat_count {
            SlotShape::Rigid
        } else if must + 1 == self.min_stat_count {
            SlotShape::Pick
        } else {
            SlotShape::Other
        }
    }

    pub fn signature(&self) -> SlotSignature {
        SlotSignature {
            min_stat_count: self.min_stat_count,
            must_present: sorted(&self.must_present),
            substats: sorted(&self.substats),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.min_stat_count == 0 && self.must_present.is_empty()
    }

    /// Same `must_present` as another slot, ignoring order
    pub fn same_must_present(&self, other: &SlotRequirement) -> bool {
        same_set(&self.must_present, &other.must_present)
    }

    /// Same matching behavior as another slot, main stats aside
    pub fn same_shape_as(&self, other: &SlotRequirement) -> bool {
        self.min_stat_count == other.min_stat_count
            && same_set(&self.must_present, &other.must_present)
            && same_set(&self.substats, &other.substats)
    }

    /// Accepts exactly the same pieces as another slot, main stats aside.
    ///
    /// A rigid slot whose pins all sit in its pool passes on the pins alone,
    /// so its other pool entries don't count.
    pub fn accepts_same_as(&self, other: &SlotRequirement) -> bool {
        if self.pins_decide() && other.pins_decide() {
            return self.min_stat_count == other.min_stat_count
                && same_set(&self.must_present, &other.must_present);
        }
        self.same_shape_as(other)
    }

    fn pins_decide(&self) -> bool {
        self.shape() == SlotShape::Rigid
            && self
                .must_present
                .iter()
                .all(|s| self.substats.contains(s))
    }

    /// Whether a concrete piece passes this requirement's secondary-stat rule.
    ///
    /// The main stat counts as present when it is itself a secondary stat type.
    /// Main stat acceptance is not checked here.
    pub fn accepts_substats(&self, main: StatKey, substats: &[StatKey]) -> bool {
        let mut available: Vec<StatKey> = substats.to_vec();
        if main.is_substat() {
            push_unique(&mut available, main);
        }
        if !self.must_present.iter().all(|s| available.contains(s)) {
            return false;
        }
        let count = self
            .substats
            .iter()
            .filter(|s| available.contains(s))
            .count();
        count >= self.min_stat_count
    }

    /// Whether a concrete piece passes both the main stat and substat rules
    pub fn accepts(&self, main: StatKey, substats: &[StatKey]) -> bool {
        let main_ok = self.main_stats.is_empty()
            || self.main_stats.iter().any(|m| match m {
                StatKey::AnyElementalDamage => main.is_elemental_damage(),
                StatKey::AnyCrit => main.is_crit(),
                other => *other == main,
            });
        main_ok && self.accepts_substats(main, substats)
    }
}

/// A character served by a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServedCharacter {
    pub character_id: String,
    /// Still exactly this character's original requirement
    pub has_perfect_merge: bool,
    /// Reached the set through a four-piece build
    pub has_4pc_build: bool,
}

/// One filter configuration for one equipment set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRequirement {
    pub flower_plume: SlotRequirement,
    pub sands: SlotRequirement,
    pub goblet: SlotRequirement,
    pub circlet: SlotRequirement,
    pub served_characters: Vec<ServedCharacter>,
}

impl SetRequirement {
    pub fn slot(&self, key: SlotKey) -> &SlotRequirement {
        match key {
            SlotKey::FlowerPlume => &self.flower_plume,
            SlotKey::Sands => &self.sands,
            SlotKey::Goblet => &self.goblet,
            SlotKey::Circlet => &self.circlet,
        }
    }

    pub fn slot_mut(&mut self, key: SlotKey) -> &mut SlotRequirement {
        match key {
            SlotKey::FlowerPlume => &mut self.flower_plume,
            SlotKey::Sands => &mut self.sands,
            SlotKey::Goblet => &mut self.goblet,
            SlotKey::Circlet => &mut self.circlet,
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = (SlotKey, &SlotRequirement)> {
        SlotKey::ALL.into_iter().map(move |k| (k, self.slot(k)))
    }

    pub fn signature(&self) -> [SlotSignature; 4] {
        SlotKey::ALL.map(|k| self.slot(k).signature())
    }

    pub fn count_4pc(&self) -> usize {
        self.served_characters
            .iter()
            .filter(|c| c.has_4pc_build)
            .count()
    }

    /// Fold another config's characters into this one.
    ///
    /// A character already present keeps a perfect merge only if both sides
    /// had one, and counts as four-piece if either side did.
    pub fn absorb_characters(&mut self, others: &[ServedCharacter]) {
        for other in others {
            match self
                .served_characters
                .iter_mut()
                .find(|c| c.character_id == other.character_id)
            {
                Some(existing) => {
                    existing.has_perfect_merge &= other.has_perfect_merge;
                    existing.has_4pc_build |= other.has_4pc_build;
                }
                None => self.served_characters.push(other.clone()),
            }
        }
    }

    /// Clear the perfect-merge flag of every served character
    pub fn mark_broadened(&mut self) {
        for c in &mut self.served_characters {
            c.has_perfect_merge = false;
        }
    }

    pub fn serves(&self, character_id: &str) -> bool {
        self.served_characters
            .iter()
            .any(|c| c.character_id == character_id)
    }
}

/// Final filter list for one equipment set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSetFilterResult {
    pub set_id: String,
    pub configurations: Vec<SetRequirement>,
}

/// Append unless already present
pub fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Append every element of `extra` not yet in `items`, keeping first-seen order
pub fn union_into<T: PartialEq + Clone>(items: &mut Vec<T>, extra: &[T]) {
    for item in extra {
        if !items.contains(item) {
            items.push(item.clone());
        }
    }
}

pub fn same_set<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
}

fn sorted(stats: &[StatKey]) -> Vec<StatKey> {
    let mut out = stats.to_vec();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use StatKey::*;

    fn slot(subs: &[StatKey], must: &[StatKey], k: usize) -> SlotRequirement {
        SlotRequirement {
            main_stats: vec![],
            substats: subs.to_vec(),
            must_present: must.to_vec(),
            min_stat_count: k,
        }
    }

    #[test]
    fn test_shape() {
        assert_eq!(slot(&[AtkPercent, CritRate], &[AtkPercent, CritRate], 2).shape(), SlotShape::Rigid);
        assert_eq!(slot(&[AtkPercent, CritRate], &[AtkPercent], 2).shape(), SlotShape::Pick);
        assert_eq!(slot(&[AtkPercent, CritRate, CritDamage], &[], 2).shape(), SlotShape::Other);
        assert_eq!(slot(&[], &[], 0).shape(), SlotShape::Rigid);
    }

    #[test]
    fn test_signature_ignores_order_and_main_stats() {
        let mut a = slot(&[CritRate, AtkPercent], &[AtkPercent], 2);
        let b = slot(&[AtkPercent, CritRate], &[AtkPercent], 2);
        a.main_stats = vec![HpPercent];
        assert_eq!(a.signature(), b.signature());
        assert_ne!(a.signature(), slot(&[AtkPercent, CritRate], &[AtkPercent], 1).signature());
    }

    #[test]
    fn test_rigid_pool_extras_accept_the_same() {
        let narrow = slot(&[CritRate, CritDamage], &[CritRate, CritDamage], 2);
        let wide = slot(&[CritRate, CritDamage, AtkPercent], &[CritDamage, CritRate], 2);
        assert!(narrow.accepts_same_as(&wide));
        assert!(!narrow.same_shape_as(&wide));

        let pick = slot(&[CritRate, CritDamage], &[CritRate], 2);
        let wider_pick = slot(&[CritRate, CritDamage, AtkPercent], &[CritRate], 2);
        assert!(!pick.accepts_same_as(&wider_pick));
    }

    #[test]
    fn test_accepts_counts_main_stat() {
        let req = slot(&[AtkPercent, CritRate, CritDamage], &[CritRate], 3);
        assert!(req.accepts_substats(AtkPercent, &[CritRate, CritDamage, Hp, Def]));
        assert!(!req.accepts_substats(HpPercent, &[CritRate, CritDamage, Hp, Def]));
        assert!(!req.accepts_substats(AtkPercent, &[AtkPercent, CritDamage, Hp, Def]));
    }

    #[test]
    fn test_accepts_placeholders() {
        let mut req = slot(&[], &[], 0);
        req.main_stats = vec![AnyElementalDamage];
        assert!(req.accepts(PyroDamage, &[]));
        assert!(!req.accepts(AtkPercent, &[]));
        req.main_stats = vec![AnyCrit];
        assert!(req.accepts(CritDamage, &[]));
    }

    #[test]
    fn test_absorb_characters() {
        let mut a = SetRequirement {
            served_characters: vec![ServedCharacter {
                character_id: "Xiangling".into(),
                has_perfect_merge: true,
                has_4pc_build: false,
            }],
            ..Default::default()
        };
        a.absorb_characters(&[
            ServedCharacter {
                character_id: "Xiangling".into(),
                has_perfect_merge: false,
                has_4pc_build: true,
            },
            ServedCharacter {
                character_id: "Bennett".into(),
                has_perfect_merge: true,
                has_4pc_build: true,
            },
        ]);
        assert_eq!(a.served_characters.len(), 2);
        assert!(!a.served_characters[0].has_perfect_merge);
        assert!(a.served_characters[0].has_4pc_build);
        assert_eq!(a.count_4pc(), 2);
        assert!(a.serves("Bennett"));
    }

    #[test]
    fn test_union_keeps_first_seen_order() {
        let mut items = vec![CritRate, AtkPercent];
        union_into(&mut items, &[EnergyRecharge, CritRate, Hp]);
        assert_eq!(items, vec![CritRate, AtkPercent, EnergyRecharge, Hp]);
        assert!(same_set(&[CritRate, Hp], &[Hp, CritRate]));
        assert!(!same_set(&[CritRate], &[Hp, CritRate]));
    }
}
