//! # PanelKit
//!
//! A comic page layout engine:
//! - Page templates from a single full-bleed panel to six-panel grids
//! - Fit-preserving 90° rotation and left-right mirroring of whole pages
//! - Draggable gutters between neighbouring rectangular panels
//! - Image placement by drop point, JSON documents and SVG previews
//!
//! ## Architecture
//!
//! PanelKit is organized as a workspace with multiple crates:
//!
//! 1. **panelkit-core** - Error types and shared geometry constants
//! 2. **panelkit-designer** - Panel geometry, templates, book and editor state
//! 3. **panelkit-settings** - Config files and editor defaults
//! 4. **panelkit** - Command line binary that integrates all crates

pub mod cli;

pub use panelkit_designer as designer;

pub use panelkit_core::{Error, LayoutError, Result};

pub use panelkit_designer::{
    calculate_resize_gaps, mirror_panels, render_page_svg, rotate_panels, Book, BoundingBox,
    EditorSettings, EditorState, GapDragSession, LayoutFile, LayoutTemplate, Page, PageSize,
    Panel, PanelImage, Point, ResizeGap, SvgStyle,
};

pub use panelkit_settings::{Config, LayoutSettings, PageSettings, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to command results
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
