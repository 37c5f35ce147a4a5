//! Error handling for PanelKit
//!
//! The geometry functions are total and never fail. Errors only arise at the
//! layers that look things up by identifier or index: the page collection and
//! the editor state.
//!
//! All error types use `thiserror`.

use thiserror::Error;

/// Layout error type
///
/// Raised when an operation names a page, panel, template or index that does
/// not exist, or receives page dimensions it cannot lay out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No page with the given identifier
    #[error("Page not found: {id}")]
    PageNotFound {
        /// The requested page identifier.
        id: String,
    },

    /// No panel with the given identifier on the page
    #[error("Panel {panel_id} not found on page {page_id}")]
    PanelNotFound {
        /// The page that was searched.
        page_id: String,
        /// The requested panel identifier.
        panel_id: String,
    },

    /// Page index outside the collection
    #[error("Page index {index} out of range (book has {len} pages)")]
    PageIndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// Number of pages in the collection.
        len: usize,
    },

    /// Template name that no generator answers to
    #[error("Unknown layout template: {name}")]
    UnknownTemplate {
        /// The unrecognised name.
        name: String,
    },

    /// Drop point that does not hit any panel
    #[error("No panel at ({x}, {y}) on page {page_id}")]
    NoPanelAtPoint {
        /// The page that was hit-tested.
        page_id: String,
        /// Drop x coordinate.
        x: f64,
        /// Drop y coordinate.
        y: f64,
    },

    /// Page dimensions that cannot hold a layout
    #[error("Invalid page size {width}x{height}")]
    InvalidPageSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// Main error type for PanelKit
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl Error {
    /// Check if this error reports a missing page or panel
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Layout(LayoutError::PageNotFound { .. })
                | Error::Layout(LayoutError::PanelNotFound { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
