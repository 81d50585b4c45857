//! Errors surfaced by the command router, labelled with the step that failed.

use crate::cli::update::UpdateError;
use crate::core::config::ConfigError;
use crate::utils::input::PromptError;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Update failed: {0}")]
    Update(#[from] UpdateError),

    #[error("Failed to load config: {0}")]
    Load(#[source] ConfigError),

    #[error("Failed to read name: {0}")]
    ReadName(#[source] PromptError),

    #[error("Failed to read API key: {0}")]
    ReadApiKey(#[source] PromptError),

    #[error("Failed to save config: {0}")]
    Save(#[source] ConfigError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Every failure exits with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Flag misuse is followed by the usage line.
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::Update(err) if err.is_validation())
    }
}
