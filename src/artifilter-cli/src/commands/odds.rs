//! Odds command handler

use anyhow::{bail, Result};
use artifilter::{slot_odds, SlotKey, SlotOdds, SlotRequirement, StatKey};

use super::{percent, stat_list};

/// Build a single-slot requirement from command-line parts
fn requirement_from_args(
    main: Vec<StatKey>,
    substats: Vec<StatKey>,
    must: Vec<StatKey>,
    min: Option<usize>,
) -> Result<SlotRequirement> {
    if let Some(missing) = must.iter().find(|s| !substats.contains(s)) {
        bail!("--must stat {} is not in --substats", missing.key());
    }

    let min_stat_count = min.unwrap_or(substats.len());
    if min_stat_count > substats.len() {
        bail!(
            "--min {} exceeds the {} wanted substats",
            min_stat_count,
            substats.len()
        );
    }

    Ok(SlotRequirement {
        main_stats: main,
        substats,
        must_present: must,
        min_stat_count,
    })
}

/// Handle the odds command
pub fn handle(
    slot: SlotKey,
    main: Vec<StatKey>,
    substats: Vec<StatKey>,
    must: Vec<StatKey>,
    min: Option<usize>,
) -> Result<()> {
    let requirement = requirement_from_args(main, substats, must, min)?;
    let odds = slot_odds(slot, &requirement);

    println!("Slot:     {}", slot.name());
    println!("Main:     {}", stat_list(&requirement.main_stats));
    println!("Substats: {}", stat_list(&requirement.substats));
    println!("Must:     {}", stat_list(&requirement.must_present));
    println!("Min:      {}", requirement.min_stat_count);
    println!();
    print_odds(&odds, requirement.min_stat_count);

    Ok(())
}

fn print_odds(odds: &SlotOdds, min_stat_count: usize) {
    println!("Match chance: {}", percent(odds.base));
    if odds.base > 0.0 {
        println!("  about 1 in {:.1} pieces", 1.0 / odds.base);
    }
    if let Some(tightened) = odds.tightened {
        println!(
            "With {} required: {}",
            min_stat_count + 1,
            percent(tightened)
        );
    }
}
