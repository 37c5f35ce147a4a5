//! Ordered page collection.
//!
//! A page's number is its position in the book plus one. Every structural
//! change renumbers the pages so that invariant always holds.

use serde::{Deserialize, Serialize};
use tracing::info;

use panelkit_core::{LayoutError, Result};

use crate::model::{Page, PageSize, Panel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub page_size: PageSize,
    pages: Vec<Page>,
}

impl Book {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            pages: Vec::new(),
        }
    }

    /// Rebuilds a book from deserialised pages, renumbering them.
    pub fn from_pages(page_size: PageSize, pages: Vec<Page>) -> Self {
        let mut book = Self { page_size, pages };
        book.renumber();
        book
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Appends a page and returns its id.
    pub fn add_page(&mut self, panels: Vec<Panel>) -> String {
        let page = Page::new(self.pages.len() as u32 + 1, panels);
        let id = page.id.clone();
        self.pages.push(page);
        info!("Added page {} ({} pages)", id, self.pages.len());
        id
    }

    /// Inserts a page before `index` (`index == len` appends).
    pub fn insert_page(&mut self, index: usize, panels: Vec<Panel>) -> Result<String> {
        if index > self.pages.len() {
            return Err(LayoutError::PageIndexOutOfRange {
                index,
                len: self.pages.len(),
            }
            .into());
        }
        let page = Page::new(0, panels);
        let id = page.id.clone();
        self.pages.insert(index, page);
        self.renumber();
        Ok(id)
    }

    pub fn remove_page(&mut self, id: &str) -> Result<Page> {
        let index = self.index_of(id)?;
        let page = self.pages.remove(index);
        self.renumber();
        info!("Removed page {} ({} pages left)", id, self.pages.len());
        Ok(page)
    }

    /// Moves the page at `from` so that it ends up at index `to`.
    pub fn move_page(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.pages.len();
        for index in [from, to] {
            if index >= len {
                return Err(LayoutError::PageIndexOutOfRange { index, len }.into());
            }
        }
        let page = self.pages.remove(from);
        self.pages.insert(to, page);
        self.renumber();
        Ok(())
    }

    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.pages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| LayoutError::PageNotFound { id: id.to_string() }.into())
    }

    pub fn page(&self, id: &str) -> Result<&Page> {
        let index = self.index_of(id)?;
        Ok(&self.pages[index])
    }

    pub fn page_mut(&mut self, id: &str) -> Result<&mut Page> {
        let index = self.index_of(id)?;
        Ok(&mut self.pages[index])
    }

    pub fn page_at(&self, index: usize) -> Result<&Page> {
        self.pages.get(index).ok_or_else(|| {
            LayoutError::PageIndexOutOfRange {
                index,
                len: self.pages.len(),
            }
            .into()
        })
    }

    /// Page with the given 1-based number.
    pub fn page_by_number(&self, number: u32) -> Result<&Page> {
        match number.checked_sub(1) {
            Some(index) => self.page_at(index as usize),
            None => Err(LayoutError::PageIndexOutOfRange {
                index: 0,
                len: self.pages.len(),
            }
            .into()),
        }
    }

    fn renumber(&mut self) {
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.number = i as u32 + 1;
        }
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
