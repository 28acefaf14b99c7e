use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, warn};

use tabmove_core::TabMoveConfig;
use tabmove_core::events;

mod completions;
mod config;
mod simulate;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("simulate", sub_matches)) => simulate::handle_simulate_command(sub_matches),
        Some(("config", sub_matches)) => config::handle_config_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }
    result
}

/// Load configuration for a command.
///
/// An explicit `--config` file must load. Without one, a broken user config
/// falls back to defaults with a warning on stderr and a
/// `cli.config.load_failed` log event.
pub(crate) fn load_config(
    matches: &ArgMatches,
) -> Result<TabMoveConfig, Box<dyn std::error::Error>> {
    let explicit = matches.get_one::<PathBuf>("config");
    match TabMoveConfig::load_hierarchy(explicit.map(PathBuf::as_path)) {
        Ok(config) => Ok(config),
        Err(e) if explicit.is_some() => Err(e.into()),
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.tabmove/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            Ok(TabMoveConfig::default())
        }
    }
}
