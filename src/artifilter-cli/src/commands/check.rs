//! Check command handler
//!
//! Answers "would any of my filters keep this piece?" for a concrete artifact.

use anyhow::{bail, Result};
use artifilter::{set_display_name, EquipmentSetFilterResult, SlotKey, StatKey};
use std::path::Path;

use super::compute_from_file;
use crate::cli::OptionFlags;

/// A configuration that keeps the piece
#[derive(Debug, PartialEq)]
pub struct Keeper {
    pub set_id: String,
    /// 1-based, matching the filters table
    pub configuration: usize,
    pub characters: Vec<String>,
}

/// Every configuration whose slot requirement accepts the piece
pub fn find_keepers(
    results: &[EquipmentSetFilterResult],
    slot: SlotKey,
    set: Option<&str>,
    main: StatKey,
    substats: &[StatKey],
) -> Vec<Keeper> {
    let mut keepers = Vec::new();

    for result in results {
        if set.is_some_and(|s| s != result.set_id) {
            continue;
        }
        for (index, config) in result.configurations.iter().enumerate() {
            let requirement = config.slot(slot);
            let accepted = if slot == SlotKey::FlowerPlume {
                requirement.accepts_substats(main, substats)
            } else {
                requirement.accepts(main, substats)
            };
            if accepted {
                keepers.push(Keeper {
                    set_id: result.set_id.clone(),
                    configuration: index + 1,
                    characters: config
                        .served_characters
                        .iter()
                        .map(|c| c.character_id.clone())
                        .collect(),
                });
            }
        }
    }

    keepers
}

/// Handle the check command
pub fn handle(
    builds: &Path,
    flags: &OptionFlags,
    slot: SlotKey,
    set: Option<&str>,
    main: Option<StatKey>,
    substats: &[StatKey],
) -> Result<()> {
    let main = match (slot, main) {
        (_, Some(main)) => main,
        (SlotKey::FlowerPlume, None) => StatKey::Hp,
        (_, None) => bail!("--main is required for {}", slot.name()),
    };
    if substats.contains(&main) {
        bail!("{} cannot be both the main stat and a substat", main.key());
    }
    if substats.len() > 4 {
        bail!("A piece has at most 4 substats, got {}", substats.len());
    }

    let results = compute_from_file(builds, flags)?;
    let keepers = find_keepers(&results, slot, set, main, substats);

    if keepers.is_empty() {
        println!("Discard: no configuration keeps this piece");
        return Ok(());
    }

    println!("Keep: {} configuration(s) accept this piece", keepers.len());
    for keeper in &keepers {
        println!(
            "  {} #{}: {}",
            set_display_name(&keeper.set_id),
            keeper.configuration,
            keeper.characters.join(", ")
        );
    }

    Ok(())
}
