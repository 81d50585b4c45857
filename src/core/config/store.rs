use crate::core::config::data::{Config, Field};
use crate::core::config::error::ConfigError;
use crate::core::config::io::{default_config_dir, ensure_private_dir, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle on the config file at a resolved, existing location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Resolve the per-user location and make sure its directory exists.
    pub fn open() -> Result<Self, ConfigError> {
        Self::in_dir(default_config_dir()?)
    }

    /// Use `dir` as the config directory, creating it if needed.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let dir = dir.into();
        ensure_private_dir(&dir)?;
        let path = dir.join(CONFIG_FILE_NAME);
        debug!(path = %path.display(), "resolved config path");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Config>, ConfigError> {
        let loaded = Config::load_from_path(&self.path)?;
        debug!(found = loaded.is_some(), "loaded config");
        Ok(loaded)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.save_to_path(&self.path)?;
        info!(path = %self.path.display(), "saved config");
        Ok(())
    }

    /// Load (a missing file counts as a blank record), apply `mutator`, save.
    pub fn mutate<F>(&self, mutator: F) -> Result<Config, ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut working = self.load()?.unwrap_or_default();
        mutator(&mut working);
        self.save(&working)?;
        Ok(working)
    }

    /// Overwrite a single field and persist the result.
    pub fn update(&self, field: Field, value: &str) -> Result<Config, ConfigError> {
        debug!(%field, "updating config field");
        self.mutate(|config| config.set(field, value))
    }
}
