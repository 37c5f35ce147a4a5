//! Configuration and settings management for PanelKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Page settings (canvas size, margins, default template)
//! - Layout settings (gap detection, drag limits, undo depth)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use panelkit_core::{
    DEFAULT_ADJACENCY_THRESHOLD, DEFAULT_DRAG_THROTTLE_MS, DEFAULT_MIN_PANEL_SIZE,
};
use panelkit_designer::{EditorSettings, LayoutSpacing, LayoutTemplate, PageSize};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Number of entries kept in the recent files list.
pub const MAX_RECENT_FILES: usize = 10;

/// Page canvas defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Page width in layout units
    pub width: f64,
    /// Page height in layout units
    pub height: f64,
    /// Space between the page edge and the outer panels
    pub margin: f64,
    /// Space between neighbouring panels
    pub gutter: f64,
    /// Template used for new pages
    pub default_template: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 1200.0,
            margin: 20.0,
            gutter: 10.0,
            default_template: LayoutTemplate::FullPage.as_str().to_string(),
        }
    }
}

/// Gap detection and editing limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Maximum distance between facing edges for panels to share a gap
    pub adjacency_threshold: f64,
    /// Smallest width or height a drag may leave a panel with
    pub min_panel_size: f64,
    /// Minimum interval between re-layouts while dragging
    pub drag_throttle_ms: u64,
    /// Undo history length
    pub max_undo_depth: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            adjacency_threshold: DEFAULT_ADJACENCY_THRESHOLD,
            min_panel_size: DEFAULT_MIN_PANEL_SIZE,
            drag_throttle_ms: DEFAULT_DRAG_THROTTLE_MS,
            max_undo_depth: 100,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Page defaults
    pub page: PageSettings,
    /// Layout editing limits
    pub layout: LayoutSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("none").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let page = &self.page;
        if page.width <= 0.0 || page.height <= 0.0 {
            return Err(SettingsError::invalid("page", "width and height must be > 0"));
        }
        if page.margin < 0.0 {
            return Err(SettingsError::invalid("page.margin", "must not be negative"));
        }
        if page.gutter < 0.0 {
            return Err(SettingsError::invalid("page.gutter", "must not be negative"));
        }
        if 2.0 * page.margin >= page.width.min(page.height) {
            return Err(SettingsError::invalid(
                "page.margin",
                "leaves no room for panels",
            ));
        }
        self.default_template()?;

        let layout = &self.layout;
        if layout.adjacency_threshold <= 0.0 {
            return Err(SettingsError::invalid(
                "layout.adjacency_threshold",
                "must be > 0",
            ));
        }
        if layout.min_panel_size < 0.0 {
            return Err(SettingsError::invalid(
                "layout.min_panel_size",
                "must not be negative",
            ));
        }
        if layout.max_undo_depth == 0 {
            return Err(SettingsError::invalid("layout.max_undo_depth", "must be > 0"));
        }

        Ok(())
    }

    /// The configured default template.
    pub fn default_template(&self) -> SettingsResult<LayoutTemplate> {
        LayoutTemplate::parse(&self.page.default_template).ok_or_else(|| {
            SettingsError::invalid(
                "page.default_template",
                format!("unknown template '{}'", self.page.default_template),
            )
        })
    }

    /// Editor settings described by this config.
    pub fn editor_settings(&self) -> SettingsResult<EditorSettings> {
        self.validate()?;
        Ok(EditorSettings {
            page_size: PageSize::new(self.page.width, self.page.height),
            spacing: LayoutSpacing::new(self.page.margin, self.page.gutter),
            default_template: self.default_template()?,
            adjacency_threshold: self.layout.adjacency_threshold,
            min_panel_size: self.layout.min_panel_size,
            drag_throttle: Duration::from_millis(self.layout.drag_throttle_ms),
            max_undo_depth: self.layout.max_undo_depth,
        })
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
