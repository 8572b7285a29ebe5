//! Configuration discovery.
//!
//! Lookup order:
//! 1. Nearest `package.json` in the working directory or an ancestor
//! 2. Nearest `.czrc` in the working directory or an ancestor
//! 3. `~/.czrc`
//!
//! Every file stores its settings under `config["g-cz-emoji"]`. The first
//! source that yields settings wins; any failure along the way just means
//! "try the next one".

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{Config, ConfigOverride, MANIFEST_FIELD};
use crate::error::ConfigError;

pub const MANIFEST_FILE: &str = "package.json";
pub const DOTFILE: &str = ".czrc";

/// Where a configuration override may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource<'a> {
    /// `package.json` found by walking up from the directory.
    Manifest(&'a Path),
    /// `.czrc` found by walking up from the directory.
    ProjectDotfile(&'a Path),
    /// `.czrc` directly inside the home directory.
    HomeDotfile(Option<&'a Path>),
}

impl ConfigSource<'_> {
    /// Try to load an override from this source.
    pub fn load(&self) -> Result<ConfigOverride, ConfigError> {
        match *self {
            ConfigSource::Manifest(start) => load_upwards(start, MANIFEST_FILE),
            ConfigSource::ProjectDotfile(start) => load_upwards(start, DOTFILE),
            ConfigSource::HomeDotfile(home) => {
                let home = home.ok_or(ConfigError::NoHomeDir)?;
                load_config_file(&home.join(DOTFILE))
            }
        }
    }
}

/// Resolve the configuration for the current working directory and the
/// user's home directory.
pub fn resolve_config() -> Config {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = dirs::home_dir();
    resolve_config_from(&cwd, home.as_deref())
}

/// Resolve the configuration starting the ancestor search at `start` and
/// using `home` for the user-level dotfile.
pub fn resolve_config_from(start: &Path, home: Option<&Path>) -> Config {
    let sources = [
        ConfigSource::Manifest(start),
        ConfigSource::ProjectDotfile(start),
        ConfigSource::HomeDotfile(home),
    ];

    let overrides = sources.iter().find_map(|source| match source.load() {
        Ok(overrides) => {
            debug!("Using configuration from {:?}", source);
            Some(overrides)
        }
        Err(e) => {
            debug!("No configuration from {:?}: {}", source, e);
            None
        }
    });

    Config::default().merge(overrides.unwrap_or_default())
}

/// Find the nearest file called `file_name` in `start` or one of its ancestors.
pub fn find_up(start: &Path, file_name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}

fn load_upwards(start: &Path, file_name: &str) -> Result<ConfigOverride, ConfigError> {
    let path =
        find_up(start, file_name).ok_or_else(|| ConfigError::NotFound(file_name.to_string()))?;
    load_config_file(&path)
}

/// Read `path` as JSON and extract the czmoji settings from it.
pub fn load_config_file(path: &Path) -> Result<ConfigOverride, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let settings = document
        .get("config")
        .and_then(|config| config.get(MANIFEST_FIELD))
        .filter(|value| !value.is_null())
        .cloned()
        .ok_or_else(|| ConfigError::MissingField {
            path: path.to_path_buf(),
        })?;

    serde_json::from_value(settings).map_err(|source| ConfigError::ParseFailed {
        path: path.to_path_buf(),
        source,
    })
}
