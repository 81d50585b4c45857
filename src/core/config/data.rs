use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The persisted user record: a display name and an API key.
///
/// Missing keys and `null` values decode as empty strings so that a
/// partially written file is treated as incomplete rather than as a decode
/// failure. Files written by hand often capitalise the keys, so the common
/// spellings are accepted on read; writes always use `name` and `apiKey`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default, alias = "Name", alias = "NAME", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(
        default,
        rename = "apiKey",
        alias = "apikey",
        alias = "ApiKey",
        alias = "APIKey",
        alias = "APIKEY",
        deserialize_with = "null_as_empty"
    )]
    pub api_key: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A field that can be overwritten through `--set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    ApiKey,
}

impl Field {
    /// The key this field is stored under in `config.json`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::ApiKey => "apiKey",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a field selector names neither `name` nor `apiKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Selectors are matched case-insensitively after trimming, so `apiKey`,
    /// `apikey` and `APIKEY` all select [`Field::ApiKey`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "apikey" => Ok(Field::ApiKey),
            _ => Err(UnknownField(input.to_string())),
        }
    }
}

impl Config {
    pub fn new(name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
        }
    }

    /// Both fields hold something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::ApiKey => &self.api_key,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::ApiKey => self.api_key = value,
        }
    }
}

/// Mask a secret so only its last four characters are shown.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}

/// Shorten a path for display, using `~` for the home directory on Unix.
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME").filter(|home| !home.is_empty()) {
            if let Ok(relative) = path.strip_prefix(PathBuf::from(home)) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
