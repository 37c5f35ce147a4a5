//! File I/O operations for EditorState.

use anyhow::Result;
use std::path::Path;

use super::{EditorSettings, EditorState};
use crate::serialization::LayoutFile;

impl EditorState {
    /// Saves the book to `path` and makes it the current file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        LayoutFile::from_book(&self.book, &self.document_name, self.created_at)
            .save_to_file(path)?;
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Saves to the current file, if there is one.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.current_file_path.clone() else {
            anyhow::bail!("No file path set for '{}'", self.document_name);
        };
        self.save_to_file(path)
    }

    /// Opens a layout file. The file's page size replaces the one in
    /// `settings`; history starts empty.
    pub fn load_from_file(path: impl AsRef<Path>, settings: EditorSettings) -> Result<Self> {
        let path = path.as_ref();
        let file = LayoutFile::load_from_file(path)?;
        let document_name = file.metadata.name.clone();
        let created_at = file.metadata.created;
        let book = file.into_book();

        let mut state = EditorState::new(EditorSettings {
            page_size: book.page_size,
            ..settings
        });
        state.book = book;
        state.document_name = document_name;
        state.created_at = created_at;
        state.current_file_path = Some(path.to_path_buf());
        Ok(state)
    }
}
