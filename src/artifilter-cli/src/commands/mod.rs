//! Command handlers for artifilter CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod check;
pub mod configure;
pub mod filters;
pub mod odds;

use anyhow::{Context, Result};
use artifilter::{compute_artifact_filters, load_build_groups, EquipmentSetFilterResult};
use std::path::Path;

use crate::cli::OptionFlags;
use crate::config::resolve_options;

/// Load a builds file and run the full computation with resolved options
pub fn compute_from_file(
    builds: &Path,
    flags: &OptionFlags,
) -> Result<Vec<EquipmentSetFilterResult>> {
    let options = resolve_options(flags)?;
    let groups = load_build_groups(builds)
        .with_context(|| format!("Failed to load builds from {}", builds.display()))?;
    tracing::debug!(groups = groups.len(), ?options, "loaded builds");
    Ok(compute_artifact_filters(&groups, &options))
}

/// Display a stat list, `-` when empty
pub fn stat_list(stats: &[artifilter::StatKey]) -> String {
    if stats.is_empty() {
        return "-".to_string();
    }
    stats.iter().map(|s| s.name()).collect::<Vec<_>>().join(", ")
}

pub fn percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}
