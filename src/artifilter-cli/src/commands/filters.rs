//! Filters command handler

use anyhow::{Context, Result};
use artifilter::{set_display_name, slot_odds, EquipmentSetFilterResult, SetRequirement, SlotKey, SlotOdds};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

use super::{compute_from_file, percent, stat_list};
use crate::cli::{OptionFlags, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetReport<'a> {
    set_id: &'a str,
    set_name: &'a str,
    configurations: Vec<ConfigurationReport<'a>>,
}

#[derive(Serialize)]
struct ConfigurationReport<'a> {
    #[serde(flatten)]
    requirement: &'a SetRequirement,
    #[serde(skip_serializing_if = "Option::is_none")]
    odds: Option<OddsReport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OddsReport {
    flower_plume: SlotOdds,
    sands: SlotOdds,
    goblet: SlotOdds,
    circlet: SlotOdds,
}

impl OddsReport {
    fn for_requirement(requirement: &SetRequirement) -> Self {
        Self {
            flower_plume: slot_odds(SlotKey::FlowerPlume, &requirement.flower_plume),
            sands: slot_odds(SlotKey::Sands, &requirement.sands),
            goblet: slot_odds(SlotKey::Goblet, &requirement.goblet),
            circlet: slot_odds(SlotKey::Circlet, &requirement.circlet),
        }
    }

    fn get(&self, slot: SlotKey) -> SlotOdds {
        match slot {
            SlotKey::FlowerPlume => self.flower_plume,
            SlotKey::Sands => self.sands,
            SlotKey::Goblet => self.goblet,
            SlotKey::Circlet => self.circlet,
        }
    }
}

fn build_report(results: &[EquipmentSetFilterResult], with_odds: bool) -> Vec<SetReport<'_>> {
    results
        .iter()
        .map(|result| SetReport {
            set_id: &result.set_id,
            set_name: set_display_name(&result.set_id),
            configurations: result
                .configurations
                .iter()
                .map(|requirement| ConfigurationReport {
                    requirement,
                    odds: with_odds.then(|| OddsReport::for_requirement(requirement)),
                })
                .collect(),
        })
        .collect()
}

/// Handle the filters command
pub fn handle(
    builds: &Path,
    flags: &OptionFlags,
    format: OutputFormat,
    with_odds: bool,
    set: Option<&str>,
) -> Result<()> {
    let mut results = compute_from_file(builds, flags)?;
    if let Some(set_id) = set {
        results.retain(|r| r.set_id == set_id);
    }

    let report = build_report(&results, with_odds);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize filters")?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&report).context("Failed to serialize filters")?;
            print!("{}", yaml);
        }
        OutputFormat::Table => {
            if report.is_empty() {
                println!("No visible builds reference any set");
            } else {
                print!("{}", render_table(&report));
            }
        }
    }

    Ok(())
}

/// Characters served, `*` marking perfect merges and `(4pc)` four-piece builds
fn served_line(requirement: &SetRequirement) -> String {
    requirement
        .served_characters
        .iter()
        .map(|c| {
            let mut name = c.character_id.clone();
            if c.has_perfect_merge {
                name.push('*');
            }
            if c.has_4pc_build {
                name.push_str(" (4pc)");
            }
            name
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn odds_cell(odds: SlotOdds) -> String {
    match odds.tightened {
        Some(t) => format!("{} ({} at +1)", percent(odds.base), percent(t)),
        None => percent(odds.base),
    }
}

fn render_table(report: &[SetReport<'_>]) -> String {
    let mut out = String::new();

    for set in report {
        let _ = writeln!(
            out,
            "{} ({}): {} configuration(s)",
            set.set_name,
            set.set_id,
            set.configurations.len()
        );

        for (index, config) in set.configurations.iter().enumerate() {
            let requirement = config.requirement;
            let _ = writeln!(out, "  #{}  {}", index + 1, served_line(requirement));
            let _ = writeln!(
                out,
                "      {:<14} {:<22} {:<14} {:<28} {:>3}",
                "Slot", "Main", "Must", "Substats", "Min"
            );

            for (slot, req) in requirement.slots() {
                let _ = write!(
                    out,
                    "      {:<14} {:<22} {:<14} {:<28} {:>3}",
                    slot.name(),
                    stat_list(&req.main_stats),
                    stat_list(&req.must_present),
                    stat_list(&req.substats),
                    req.min_stat_count
                );
                if let Some(odds) = &config.odds {
                    let _ = write!(out, "  {}", odds_cell(odds.get(slot)));
                }
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifilter::{ServedCharacter, SlotRequirement, StatKey};

    fn sample() -> EquipmentSetFilterResult {
        let slot = SlotRequirement {
            main_stats: vec![],
            substats: vec![StatKey::CritRate, StatKey::CritDamage],
            must_present: vec![StatKey::CritRate, StatKey::CritDamage],
            min_stat_count: 2,
        };
        EquipmentSetFilterResult {
            set_id: "EmblemOfSeveredFate".to_string(),
            configurations: vec![SetRequirement {
                flower_plume: slot.clone(),
                sands: slot.clone(),
                goblet: slot.clone(),
                circlet: slot,
                served_characters: vec![ServedCharacter {
                    character_id: "Raiden".to_string(),
                    has_perfect_merge: true,
                    has_4pc_build: true,
                }],
            }],
        }
    }

    #[test]
    fn test_served_line_markers() {
        let result = sample();
        assert_eq!(served_line(&result.configurations[0]), "Raiden* (4pc)");
    }

    #[test]
    fn test_table_lists_every_slot() {
        let results = vec![sample()];
        let table = render_table(&build_report(&results, false));
        assert!(table.contains("Emblem of Severed Fate"));
        for slot in SlotKey::ALL {
            assert!(table.contains(slot.name()), "missing {}", slot.name());
        }
        assert!(table.contains("CR%, CD%"));
    }

    #[test]
    fn test_json_report_includes_odds_only_when_asked() {
        let results = vec![sample()];
        let plain = serde_json::to_value(build_report(&results, false)).unwrap();
        assert!(plain[0]["configurations"][0].get("odds").is_none());
        assert_eq!(plain[0]["setName"], "Emblem of Severed Fate");

        let priced = serde_json::to_value(build_report(&results, true)).unwrap();
        let base = priced[0]["configurations"][0]["odds"]["sands"]["base"]
            .as_f64()
            .unwrap();
        assert!(base > 0.0 && base < 1.0);
        assert!(priced[0]["configurations"][0]["servedCharacters"].is_array());
    }
}
