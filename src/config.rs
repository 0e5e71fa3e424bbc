use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{GistError, Result};

const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Id of the viewing user, used for the `myGists` counter
    pub owner_id: Option<String>,

    /// JSON file holding the gist records to work on
    pub gists_file: Option<PathBuf>,

    /// Whether to style terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_id: None,
            gists_file: None,
            color: true,
        }
    }
}

impl Config {
    /// Default location of the configuration file, if the platform has a
    /// config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gistmarks")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration from `path`, or from [`Config::default_path`]
    /// when no path is given. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("No config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content).map_err(|e| GistError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| GistError::DirectoryError {
                path: parent.to_path_buf(),
            })?;
        }

        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// The owner id to count with: `cli` wins over the configured one,
    /// falling back to an empty id
    pub fn resolve_owner(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.owner_id.clone()).unwrap_or_default()
    }

    /// The gists file to read: `cli` wins over the configured one
    pub fn resolve_gists_file(&self, cli: Option<PathBuf>) -> Result<PathBuf> {
        cli.or_else(|| self.gists_file.clone())
            .ok_or_else(|| GistError::ConfigError {
                message: "no gists file given; pass --file or set gists_file".to_string(),
            })
    }
}
