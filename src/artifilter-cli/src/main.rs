mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "artifilter=debug"
    } else {
        "artifilter=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Filters {
            builds,
            flags,
            format,
            odds,
            set,
        } => {
            commands::filters::handle(&builds, &flags, format, odds, set.as_deref())?;
        }

        Commands::Odds {
            slot,
            main,
            substats,
            must,
            min,
        } => {
            commands::odds::handle(slot, main, substats, must, min)?;
        }

        Commands::Check {
            builds,
            flags,
            slot,
            set,
            main,
            substats,
        } => {
            commands::check::handle(&builds, &flags, slot, set.as_deref(), main, &substats)?;
        }

        Commands::Configure {
            show,
            reset,
            skip_crit_builds,
            expand_elemental_goblet,
            expand_crit_circlet,
            merge_single_flex_variants,
            find_rigid_common_subset,
        } => {
            let changes = commands::configure::OptionChanges {
                skip_crit_builds,
                expand_elemental_goblet,
                expand_crit_circlet,
                merge_single_flex_variants,
                find_rigid_common_subset,
            };
            commands::configure::handle(show, reset, changes)?;
        }
    }

    Ok(())
}
