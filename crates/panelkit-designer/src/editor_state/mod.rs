//! Editor state: the caller that stores what the layout engine computes.
//!
//! The geometry functions are pure; this state owns the book, writes their
//! results back into pages and records every edit for undo/redo.
//!
//! Split into submodules:
//! - `history`: Undo/redo
//! - `pages`: Page structure, templates, rotate and mirror
//! - `panels`: Resize gaps, gap dragging, hit testing and images
//! - `file_io`: Save/load operations

mod file_io;
mod history;
mod pages;
mod panels;

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};

use panelkit_core::{
    Result, DEFAULT_ADJACENCY_THRESHOLD, DEFAULT_DRAG_THROTTLE_MS, DEFAULT_MIN_PANEL_SIZE,
};

use crate::book::Book;
use crate::commands::{EditorCommand, ReplaceBook, ReplacePanels};
use crate::model::{PageSize, Panel};
use crate::templates::{LayoutSpacing, LayoutTemplate};

/// Layout parameters the editor applies to every operation.
#[derive(Clone, Debug)]
pub struct EditorSettings {
    pub page_size: PageSize,
    pub spacing: LayoutSpacing,
    pub default_template: LayoutTemplate,
    pub adjacency_threshold: f64,
    pub min_panel_size: f64,
    pub drag_throttle: Duration,
    pub max_undo_depth: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            spacing: LayoutSpacing::default(),
            default_template: LayoutTemplate::FullPage,
            adjacency_threshold: DEFAULT_ADJACENCY_THRESHOLD,
            min_panel_size: DEFAULT_MIN_PANEL_SIZE,
            drag_throttle: Duration::from_millis(DEFAULT_DRAG_THROTTLE_MS),
            max_undo_depth: 100,
        }
    }
}

/// Editor state for UI integration
#[derive(Clone, Debug)]
pub struct EditorState {
    pub(crate) book: Book,
    pub settings: EditorSettings,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub document_name: String,
    pub created_at: DateTime<Utc>,
    pub(crate) undo_stack: Vec<EditorCommand>,
    pub(crate) redo_stack: Vec<EditorCommand>,
}

impl EditorState {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            book: Book::new(settings.page_size),
            settings,
            current_file_path: None,
            is_modified: false,
            document_name: "Untitled".to_string(),
            created_at: Utc::now(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn page_size(&self) -> PageSize {
        self.book.page_size
    }

    /// Replaces a page's panels with `edit(current)` and records the change.
    /// Edits that leave the panels untouched are not recorded.
    pub(crate) fn edit_panels<F>(&mut self, page_id: &str, name: &'static str, edit: F) -> Result<()>
    where
        F: FnOnce(&[Panel]) -> Vec<Panel>,
    {
        let page = self.book.page_mut(page_id)?;
        let before = page.panels.clone();
        let after = edit(&before);
        if after == before {
            return Ok(());
        }
        page.panels = after.clone();

        self.push_command(EditorCommand::ReplacePanels(ReplacePanels {
            name,
            page_id: page_id.to_string(),
            before,
            after,
        }));
        Ok(())
    }

    /// Runs a structural edit on the book. On error the book is restored.
    pub(crate) fn edit_book<T, F>(&mut self, name: &'static str, edit: F) -> Result<T>
    where
        F: FnOnce(&mut Book) -> Result<T>,
    {
        let before = self.book.clone();
        match edit(&mut self.book) {
            Ok(value) => {
                let after = self.book.clone();
                self.push_command(EditorCommand::ReplaceBook(ReplaceBook {
                    name,
                    before,
                    after,
                }));
                Ok(value)
            }
            Err(e) => {
                self.book = before;
                Err(e)
            }
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
