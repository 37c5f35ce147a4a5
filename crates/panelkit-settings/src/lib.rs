//! PanelKit Settings Crate
//!
//! Handles page and layout defaults, config file persistence and the mapping
//! onto the designer's editor settings.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, LayoutSettings, PageSettings, MAX_RECENT_FILES};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
