use crate::cli::error::CliError;
use crate::core::config::data::path_display;
use crate::core::config::{Config, ConfigStore};
use crate::ui::Console;
use std::io::{BufRead, Write};
use tracing::info;

const NAME_PROMPT: &str = "Enter your name: ";
const API_KEY_PROMPT: &str = "Enter your API key: ";

/// Ask for both fields and save a fresh record.
///
/// Nothing is written unless both answers are non-empty.
pub fn first_run_setup<R: BufRead, W: Write>(
    store: &ConfigStore,
    console: &mut Console<R, W>,
) -> Result<Config, CliError> {
    console.say("First time setup")?;

    let name = console
        .prompt_line(NAME_PROMPT)
        .map_err(CliError::ReadName)?;
    let api_key = console
        .prompt_line(API_KEY_PROMPT)
        .map_err(CliError::ReadApiKey)?;

    let config = Config::new(name, api_key);
    store.save(&config).map_err(CliError::Save)?;
    info!("first-run setup complete");

    console.say(&format!("Saved config to: {}", path_display(store.path())))?;
    Ok(config)
}
