use clap::ArgMatches;
use tracing::info;

use super::load_config;

pub(crate) fn handle_config_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    info!(event = "cli.config.show_started");

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}
