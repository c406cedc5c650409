//! Core CLI definitions

use artifilter::{SlotKey, StatKey};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::OutputFormat;

#[derive(Parser)]
#[command(name = "artifilter")]
#[command(about = "Artifact filter planner", long_about = None)]
pub struct Cli {
    /// Log merge and orchestration steps (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Stat key as exported by GOOD (e.g. `critRate_`, `enerRech_`, `atk_`)
pub fn parse_stat(s: &str) -> Result<StatKey, String> {
    artifilter::stat_by_key(s).ok_or_else(|| format!("unknown stat '{}'", s))
}

/// Overrides applied on top of the configured defaults
#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OptionFlags {
    /// Drop builds pinned to crit rate + crit damage
    #[arg(long)]
    pub skip_crit_builds: bool,

    /// Keep individual elemental goblet picks instead of "any elemental"
    #[arg(long)]
    pub no_elemental_goblet: bool,

    /// Keep individual crit circlet picks instead of "any crit"
    #[arg(long)]
    pub no_crit_circlet: bool,

    /// Don't merge pick-one variants
    #[arg(long)]
    pub no_single_flex_merge: bool,

    /// Don't promote rigid pairs into pick-one configurations
    #[arg(long)]
    pub no_rigid_promotion: bool,

    /// Ignore stored defaults from `artifilter configure`
    #[arg(long)]
    pub ignore_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute filter configurations for every artifact set
    #[command(visible_alias = "f")]
    Filters {
        /// Builds file (.json, .yaml or .yml)
        builds: PathBuf,

        #[command(flatten)]
        flags: OptionFlags,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Include per-slot match probabilities
        #[arg(long)]
        odds: bool,

        /// Only show this set
        #[arg(long)]
        set: Option<String>,
    },

    /// Probability that a fresh piece satisfies a single slot requirement
    #[command(visible_alias = "o")]
    Odds {
        /// Slot (flowerPlume, sands, goblet, circlet)
        #[arg(short, long)]
        slot: SlotKey,

        /// Acceptable main stats (comma-separated, empty = any)
        #[arg(long, value_delimiter = ',', value_parser = parse_stat)]
        main: Vec<StatKey>,

        /// Wanted substats (comma-separated)
        #[arg(long, value_delimiter = ',', value_parser = parse_stat, required = true)]
        substats: Vec<StatKey>,

        /// Substats that must be present (comma-separated)
        #[arg(long, value_delimiter = ',', value_parser = parse_stat)]
        must: Vec<StatKey>,

        /// Minimum wanted substats present (defaults to all of them)
        #[arg(long)]
        min: Option<usize>,
    },

    /// Show which configurations would keep a concrete piece
    #[command(visible_alias = "k")]
    Check {
        /// Builds file (.json, .yaml or .yml)
        builds: PathBuf,

        #[command(flatten)]
        flags: OptionFlags,

        /// Slot of the piece
        #[arg(short, long)]
        slot: SlotKey,

        /// Set of the piece (all sets if omitted)
        #[arg(long)]
        set: Option<String>,

        /// Main stat of the piece (flower/plume defaults to hp)
        #[arg(long, value_parser = parse_stat)]
        main: Option<StatKey>,

        /// Secondary stats of the piece (comma-separated)
        #[arg(long, value_delimiter = ',', value_parser = parse_stat, required = true)]
        substats: Vec<StatKey>,
    },

    /// Configure default compute options
    #[command(visible_alias = "c")]
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Restore built-in defaults
        #[arg(long)]
        reset: bool,

        #[arg(long)]
        skip_crit_builds: Option<bool>,

        #[arg(long)]
        expand_elemental_goblet: Option<bool>,

        #[arg(long)]
        expand_crit_circlet: Option<bool>,

        #[arg(long)]
        merge_single_flex_variants: Option<bool>,

        #[arg(long)]
        find_rigid_common_subset: Option<bool>,
    },
}
