//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/memo/memo.toml`
//! 3. Local config: `<working dir>/.memo.toml`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::DEFAULT_DATA_FILE;
use crate::application::ApplicationError;

/// Unified configuration for memo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// JSON file holding the notes (default: data.json in the working directory)
    pub data_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Get the XDG config directory for memo.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "memo").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("memo.toml"))
}

/// Get the path to the local config file in a working directory.
pub fn local_config_path(work_dir: &Path) -> PathBuf {
    work_dir.join(".memo.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `work_dir` - Directory holding the local `.memo.toml`; relative
    ///   `data_file` values are resolved against it.
    pub fn load(work_dir: &Path) -> Result<Self, ApplicationError> {
        Self::load_from(work_dir, global_config_path().as_deref())
    }

    /// Load settings with an explicit global config path.
    pub fn load_from(work_dir: &Path, global: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "data_file",
                defaults.data_file.to_string_lossy().to_string(),
            )
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("config: global {}", global_path.display());
                builder = builder.add_source(File::from(global_path).format(FileFormat::Toml));
            }
        }

        let local_path = local_config_path(work_dir);
        if local_path.exists() {
            debug!("config: local {}", local_path.display());
            builder = builder.add_source(File::from(local_path).format(FileFormat::Toml));
        }

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.expand_paths(work_dir);
        Ok(settings)
    }

    /// Expand `~` in `data_file` and anchor relative paths at `work_dir`.
    fn expand_paths(&mut self, work_dir: &Path) {
        let expanded = shellexpand::tilde(self.data_file.to_string_lossy().as_ref()).into_owned();
        let path = PathBuf::from(expanded);
        self.data_file = if path.is_absolute() {
            path
        } else {
            work_dir.join(path)
        };
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
