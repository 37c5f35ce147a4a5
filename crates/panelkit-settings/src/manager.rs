//! Settings Manager
//!
//! Locates the user config file and keeps the loaded [`Config`] together with
//! the path it is saved back to.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "panelkit";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration bound to its file
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
}

impl SettingsManager {
    /// Manager with default settings that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Platform config directory for PanelKit
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
            })
    }

    /// `<config_dir>/panelkit/config.toml`
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Creates the config directory if needed and returns it.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::new(path));
        }
        let config = Config::load_from_file(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }

    /// Loads the user config file. An unreadable or invalid file is reported
    /// and replaced by defaults.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::config_file_path()?;
        match Self::load_from_file(&path) {
            Ok(manager) => Ok(manager),
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Ok(Self::new(path))
            }
        }
    }

    pub fn save(&self) -> SettingsResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        self.config.save_to_file(&self.path)?;
        info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
