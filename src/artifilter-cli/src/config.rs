//! Configuration management for artifilter CLI

use crate::cli::OptionFlags;
use anyhow::{Context, Result};
use artifilter::ComputeOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub options: ComputeOptions,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("artifilter");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }
}

/// Stored defaults (unless ignored) with command-line flags layered on top
pub fn resolve_options(flags: &OptionFlags) -> Result<ComputeOptions> {
    let base = if flags.ignore_config {
        ComputeOptions::default()
    } else {
        Config::load()?.options
    };
    Ok(apply_flags(base, flags))
}

fn apply_flags(mut options: ComputeOptions, flags: &OptionFlags) -> ComputeOptions {
    options.skip_crit_builds |= flags.skip_crit_builds;
    options.expand_elemental_goblet &= !flags.no_elemental_goblet;
    options.expand_crit_circlet &= !flags.no_crit_circlet;
    options.merge_single_flex_variants &= !flags.no_single_flex_merge;
    options.find_rigid_common_subset &= !flags.no_rigid_promotion;
    options
}
