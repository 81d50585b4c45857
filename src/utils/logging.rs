use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `tracing` filter directives, e.g. `OOPS_LOG=debug`.
pub const LOG_ENV: &str = "OOPS_LOG";

/// Install the global subscriber.
///
/// Diagnostics go to stderr at `warn` unless `log_file` is given, in which
/// case they are appended there at `info`. `OOPS_LOG` overrides the level
/// either way. If a subscriber is already installed it is kept and this call
/// only reports that through it.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let default_directive = if log_file.is_some() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    if let Err(err) = installed {
        tracing::debug!(error = %err, "tracing subscriber already installed, keeping it");
    }
    Ok(())
}
