use crate::core::config::data::Config;
use crate::core::config::error::ConfigError;
use directories::BaseDirs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Subdirectory created under the platform config directory.
pub const APP_DIR_NAME: &str = "oops";
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Overrides the whole `<config dir>/oops` directory when set.
pub const CONFIG_DIR_ENV: &str = "OOPS_CONFIG_DIR";

/// The directory `config.json` lives in, before it is created.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Create `dir` and any missing parents, owner-only on Unix.
///
/// An existing directory is left as it is, permissions included.
pub fn ensure_private_dir(dir: &Path) -> Result<(), ConfigError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
        .create(dir)
        .map_err(|source| ConfigError::io("create config directory", dir, source))
}

impl Config {
    /// Read the record at `config_path`.
    ///
    /// A missing file is `Ok(None)`: that is how first-run setup is detected,
    /// not a failure. A file holding just `null` decodes as an empty record.
    pub fn load_from_path(config_path: &Path) -> Result<Option<Config>, ConfigError> {
        let contents = match fs::read(config_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ConfigError::io("read config at", config_path, source)),
        };
        serde_json::from_slice::<Option<Config>>(&contents)
            .map(|config| Some(config.unwrap_or_default()))
            .map_err(|source| ConfigError::Decode {
                path: config_path.to_path_buf(),
                source,
            })
    }

    /// Write the record as indented JSON, replacing `config_path` atomically.
    pub fn save_to_path(&self, config_path: &Path) -> Result<(), ConfigError> {
        let mut contents = serde_json::to_vec_pretty(self).map_err(ConfigError::Encode)?;
        contents.push(b'\n');
        write_atomic(config_path, |file| file.write_all(&contents))
    }
}

/// Fill a fresh temp file next to `path` with `write`, then rename it over
/// `path`.
///
/// The temp file is deleted when it is dropped, so every early return leaves
/// the directory as it was. Only a successful rename keeps it.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<(), ConfigError>
where
    F: FnOnce(&mut fs::File) -> io::Result<()>,
{
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp_file = tempfile::Builder::new()
        .prefix("config-")
        .suffix(".json")
        .tempfile_in(dir)
        .map_err(|source| ConfigError::io("create temporary file in", dir, source))?;
    let temp_path = temp_file.path().to_path_buf();

    restrict_permissions(temp_file.as_file())
        .map_err(|source| ConfigError::io("set permissions on", &temp_path, source))?;
    write(temp_file.as_file_mut())
        .and_then(|()| temp_file.as_file_mut().flush())
        .and_then(|()| temp_file.as_file().sync_all())
        .map_err(|source| ConfigError::io("write", &temp_path, source))?;

    debug!(from = %temp_path.display(), to = %path.display(), "replacing config file");
    temp_file
        .persist(path)
        .map_err(|err| ConfigError::io("replace", path, err.error))?;
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
