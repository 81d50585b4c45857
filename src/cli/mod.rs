//! Command-line parsing and routing.
//!
//! One invocation takes exactly one of three paths: overwrite a field
//! (`--set`/`--value`), run first-time setup when there is no usable config,
//! or confirm which user is configured.

pub mod error;
pub mod setup;
pub mod update;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

use crate::cli::error::CliError;
use crate::cli::setup::first_run_setup;
use crate::cli::update::{apply_update, UpdateError, UpdateRequest};
use crate::core::config::{Config, ConfigError, ConfigStore, Field};
use crate::ui::{Console, Style};
use crate::utils::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "oops", version)]
#[command(about = "Keep your name and API key in a per-user config file")]
#[command(
    long_about = "oops stores a display name and an API key in config.json under your \
user config directory. The first run asks for both; later runs confirm who is configured.\n\n\
Environment Variables:\n\
  OOPS_CONFIG_DIR   Use this directory instead of <user config dir>/oops\n\
  OOPS_LOG          Log filter directives (e.g. debug)\n\
  NO_COLOR          Disable styled output"
)]
pub struct Args {
    /// Field to update: "name" or "apiKey" (case-insensitive)
    #[arg(long = "set", value_name = "FIELD")]
    pub set: Option<String>,

    /// New value for the field selected by --set
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Write diagnostics to this file instead of stderr
    #[arg(short = 'l', long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Disable styled output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// The `--set` selector, unless it is missing or blank.
    pub fn field_selector(&self) -> Option<&str> {
        self.set.as_deref().filter(|field| !field.trim().is_empty())
    }
}

/// How a successful invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated { field: Field, path: PathBuf },
    SetUp { config: Config, path: PathBuf },
    Loaded { name: String },
}

/// Route one invocation. `open_store` is only called once flag validation
/// has passed.
pub fn run<R, W, F>(
    args: &Args,
    console: &mut Console<R, W>,
    open_store: F,
) -> Result<Outcome, CliError>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> Result<ConfigStore, ConfigError>,
{
    if let Some(field) = args.field_selector() {
        let request = UpdateRequest::parse(field, args.value.as_deref())?;
        let store = open_store().map_err(UpdateError::from)?;
        apply_update(&request, &store, console)?;
        return Ok(Outcome::Updated {
            field: request.field,
            path: store.path().to_path_buf(),
        });
    }

    if args.value.is_some() {
        warn!("--value is ignored without --set");
    }

    let store = open_store().map_err(CliError::Load)?;
    match store.load().map_err(CliError::Load)? {
        Some(config) if config.is_complete() => {
            console.say(&format!("Loaded config for: {}", config.name))?;
            Ok(Outcome::Loaded { name: config.name })
        }
        existing => {
            debug!(found = existing.is_some(), "no usable config, running setup");
            let config = first_run_setup(&store, console)?;
            Ok(Outcome::SetUp {
                config,
                path: store.path().to_path_buf(),
            })
        }
    }
}

pub fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.log.as_deref()) {
        eprintln!("❌ Failed to open log file: {err}");
        return ExitCode::FAILURE;
    }

    let mut console = Console::stdio(Style::detect(args.no_color));
    match run(&args, &mut console, ConfigStore::open) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {err}");
            if err.shows_usage() {
                eprintln!("{}", Args::command().render_usage());
            }
            ExitCode::from(err.exit_code())
        }
    }
}
