//! Configuration command handlers
//!
//! Handles the `configure` subcommand for storing default compute options.

use crate::config::Config;
use anyhow::Result;
use artifilter::ComputeOptions;

/// Option values given on the command line, `None` leaving the stored value alone
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionChanges {
    pub skip_crit_builds: Option<bool>,
    pub expand_elemental_goblet: Option<bool>,
    pub expand_crit_circlet: Option<bool>,
    pub merge_single_flex_variants: Option<bool>,
    pub find_rigid_common_subset: Option<bool>,
}

impl OptionChanges {
    fn is_empty(&self) -> bool {
        self.skip_crit_builds.is_none()
            && self.expand_elemental_goblet.is_none()
            && self.expand_crit_circlet.is_none()
            && self.merge_single_flex_variants.is_none()
            && self.find_rigid_common_subset.is_none()
    }

    fn apply(&self, options: &mut ComputeOptions) {
        if let Some(v) = self.skip_crit_builds {
            options.skip_crit_builds = v;
        }
        if let Some(v) = self.expand_elemental_goblet {
            options.expand_elemental_goblet = v;
        }
        if let Some(v) = self.expand_crit_circlet {
            options.expand_crit_circlet = v;
        }
        if let Some(v) = self.merge_single_flex_variants {
            options.merge_single_flex_variants = v;
        }
        if let Some(v) = self.find_rigid_common_subset {
            options.find_rigid_common_subset = v;
        }
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `show` - If true, show current configuration
/// * `reset` - Restore built-in defaults before applying changes
/// * `changes` - Option values to store
pub fn handle(show: bool, reset: bool, changes: OptionChanges) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if !reset && changes.is_empty() {
        show_usage();
        return Ok(());
    }

    if reset {
        config = Config::default();
    }
    changes.apply(&mut config.options);
    config.save()?;

    show_config(&config);
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    let o = &config.options;
    println!("skip-crit-builds:           {}", o.skip_crit_builds);
    println!("expand-elemental-goblet:    {}", o.expand_elemental_goblet);
    println!("expand-crit-circlet:        {}", o.expand_crit_circlet);
    println!("merge-single-flex-variants: {}", o.merge_single_flex_variants);
    println!("find-rigid-common-subset:   {}", o.find_rigid_common_subset);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: artifilter configure [--show] [--reset] [--<option> true|false]");
    println!();
    println!("Options:");
    println!("  --skip-crit-builds");
    println!("  --expand-elemental-goblet");
    println!("  --expand-crit-circlet");
    println!("  --merge-single-flex-variants");
    println!("  --find-rigid-common-subset");
}
