//! # PanelKit Designer
//!
//! Layout tools for comic pages: panels are polygons on a fixed page canvas,
//! created from templates and then rotated, mirrored and resized by dragging
//! the gutters between them.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Polygon utilities**: bounding boxes, path descriptors, even-odd hit test
//! - **Transforms**: fit-preserving 90° rotation and left-right mirror
//! - **Resize gaps**: adjacency detection between rectangular panels and
//!   edge shifting when a gap is dragged
//!
//! ### Document
//! - **Templates**: fixed generators for a page's initial panels
//! - **Book**: ordered, self-renumbering page collection
//! - **Editor state**: writes engine results back with undo/redo
//! - **Serialization**: JSON layout documents
//! - **SVG renderer**: standalone page previews
//!
//! ## Architecture
//!
//! ```text
//! EditorState (history, file I/O)
//!   └── Book
//!         └── Page
//!               └── Panel (points + cached drop zone + image)
//!
//! Engine (pure functions over &[Panel])
//!   ├── polygon
//!   ├── transforms
//!   └── resize_gaps ── drag (throttled sessions)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use panelkit_designer::{EditorState, LayoutTemplate};
//!
//! let mut editor = EditorState::default();
//! let page_id = editor.add_page(LayoutTemplate::Grid2x2)?;
//! editor.mirror_page(&page_id)?;
//! let gaps = editor.resize_gaps(&page_id)?;
//! editor.drag_gap(&page_id, &gaps[0], 25.0)?;
//! ```

pub mod book;
pub mod commands;
pub mod drag;
pub mod editor_state;
pub mod model;
pub mod polygon;
pub mod resize_gaps;
pub mod serialization;
pub mod svg_renderer;
pub mod templates;
pub mod transforms;

pub use book::Book;
pub use commands::EditorCommand;
pub use drag::GapDragSession;
pub use editor_state::{EditorSettings, EditorState};
pub use model::{BoundingBox, Page, PageSize, Panel, PanelImage, PanelShape, Point};
pub use polygon::{bounding_box, is_axis_aligned_rectangle, path_data, point_in_polygon, to_path};
pub use resize_gaps::{
    apply_gap_drag, calculate_resize_gaps, clamp_gap_delta, GapOrientation, GapPanel, PanelEdge,
    ResizeGap,
};
pub use serialization::{LayoutFile, LayoutMetadata, FILE_FORMAT_VERSION};
pub use svg_renderer::{render_page_svg, SvgStyle};
pub use templates::{LayoutSpacing, LayoutTemplate};
pub use transforms::{mirror_panels, rotate_panels};
