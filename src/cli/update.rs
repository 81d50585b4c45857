//! The `--set`/`--value` path: validate, then overwrite one field.

use crate::cli::error::CliError;
use crate::core::config::data::{mask_secret, path_display, UnknownField};
use crate::core::config::{ConfigError, ConfigStore, Field};
use crate::ui::Console;
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("--value cannot be empty")]
    EmptyValue,

    #[error("unknown field {0:?} (use \"name\" or \"apiKey\")")]
    UnknownField(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl UpdateError {
    /// The flags themselves were wrong; storage was never touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, UpdateError::EmptyValue | UpdateError::UnknownField(_))
    }
}

/// A validated `--set FIELD --value VALUE` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub field: Field,
    pub value: String,
}

impl UpdateRequest {
    /// The value is checked before the field name, and both are trimmed.
    pub fn parse(field: &str, value: Option<&str>) -> Result<Self, UpdateError> {
        let value = value.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(UpdateError::EmptyValue);
        }
        let field = field
            .parse::<Field>()
            .map_err(|UnknownField(input)| UpdateError::UnknownField(input))?;
        Ok(Self {
            field,
            value: value.to_string(),
        })
    }

    /// What to show for the new value; API keys are masked.
    pub fn display_value(&self) -> String {
        match self.field {
            Field::Name => self.value.clone(),
            Field::ApiKey => mask_secret(&self.value),
        }
    }
}

/// Persist `request` and report where it was saved.
pub fn apply_update<R: BufRead, W: Write>(
    request: &UpdateRequest,
    store: &ConfigStore,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    store
        .update(request.field, &request.value)
        .map_err(UpdateError::from)?;
    info!(field = %request.field, "config field updated");

    console.say(&format!("{} set to {}", request.field, request.display_value()))?;
    console.say(&format!(
        "Config updated! Saved to: {}",
        path_display(store.path())
    ))?;
    Ok(())
}
