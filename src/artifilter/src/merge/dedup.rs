//! Step 1: exact signature dedup

use crate::reference::SlotKey;
use crate::requirement::{SetRequirement, SlotSignature};
use indexmap::IndexMap;

use super::merged_main_stats;

/// Group requirements whose four slot signatures match exactly.
///
/// Main stats and served characters are pooled; nothing else changes, so no
/// character loses its perfect merge here. Groups keep first-seen order.
pub fn dedup_exact(requirements: &[SetRequirement]) -> Vec<SetRequirement> {
    let mut groups: IndexMap<[SlotSignature; 4], SetRequirement> = IndexMap::new();

    for req in requirements {
        match groups.get_mut(&req.signature()) {
            Some(existing) => {
                for key in SlotKey::ALL {
                    let main = merged_main_stats(
                        &existing.slot(key).main_stats,
                        &req.slot(key).main_stats,
                    );
                    existing.slot_mut(key).main_stats = main;
                }
                existing.absorb_characters(&req.served_characters);
            }
            None => {
                groups.insert(req.signature(), req.clone());
            }
        }
    }

    groups.into_values().collect()
}
