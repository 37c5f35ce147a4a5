//! Page structure, layout templates and page-wide transforms.

use tracing::info;

use panelkit_core::Result;

use super::EditorState;
use crate::model::Page;
use crate::templates::LayoutTemplate;
use crate::transforms::{mirror_panels, rotate_panels};

impl EditorState {
    /// Appends a page laid out with `template` and returns its id.
    pub fn add_page(&mut self, template: LayoutTemplate) -> Result<String> {
        let panels = template.generate(self.page_size(), self.settings.spacing)?;
        self.edit_book("Add Page", |book| Ok(book.add_page(panels)))
    }

    /// Appends a page with the configured default template.
    pub fn add_default_page(&mut self) -> Result<String> {
        self.add_page(self.settings.default_template)
    }

    pub fn insert_page(&mut self, index: usize, template: LayoutTemplate) -> Result<String> {
        let panels = template.generate(self.page_size(), self.settings.spacing)?;
        self.edit_book("Insert Page", |book| book.insert_page(index, panels))
    }

    pub fn remove_page(&mut self, page_id: &str) -> Result<Page> {
        self.edit_book("Remove Page", |book| book.remove_page(page_id))
    }

    pub fn move_page(&mut self, from: usize, to: usize) -> Result<()> {
        self.edit_book("Move Page", |book| book.move_page(from, to))
    }

    /// Replaces every panel on the page with a fresh template layout. Images
    /// are dropped with the old panels.
    pub fn apply_template(&mut self, page_id: &str, template: LayoutTemplate) -> Result<()> {
        let panels = template.generate(self.page_size(), self.settings.spacing)?;
        info!("Applying template {} to page {}", template, page_id);
        self.edit_panels(page_id, "Apply Template", move |_| panels)
    }

    pub fn rotate_page(&mut self, page_id: &str) -> Result<()> {
        let size = self.page_size();
        self.edit_panels(page_id, "Rotate Page", |panels| rotate_panels(panels, size))
    }

    pub fn mirror_page(&mut self, page_id: &str) -> Result<()> {
        let size = self.page_size();
        self.edit_panels(page_id, "Mirror Page", |panels| mirror_panels(panels, size))
    }
}
