//! oops keeps a display name and an API key in a per-user config file.
//!
//! The crate is split into a few small layers:
//! - [`core`] owns the config record and its on-disk store (directory
//!   resolution, tri-state load, atomic save).
//! - [`ui`] holds the console used for prompts and messages, along with the
//!   style value that is built once at startup.
//! - [`cli`] parses flags and routes between the update path, first-run setup
//!   and the plain "loaded" confirmation.
//! - [`utils`] provides line input and logging setup.
//!
//! The binary (`src/main.rs`) only calls [`cli::main`].

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
