//! # PanelKit Core
//!
//! Core types shared by every PanelKit crate: the error taxonomy used by the
//! page collection and editor layers, and the geometric constants the layout
//! engine agrees on.

pub mod constants;
pub mod error;

pub use constants::{
    DEFAULT_ADJACENCY_THRESHOLD, DEFAULT_DRAG_THROTTLE_MS, DEFAULT_MIN_PANEL_SIZE, GEOMETRY_EPSILON,
};
pub use error::{Error, LayoutError, Result};
