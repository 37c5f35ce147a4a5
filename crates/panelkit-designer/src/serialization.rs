//! Serialization and deserialization for layout documents.
//!
//! Implements save/load for `.panels.json` layout files: page size, pages,
//! panels and placed images, plus document metadata.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::book::Book;
use crate::model::{Page, PageSize};

/// Layout file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete layout file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub page_size: PageSize,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl LayoutFile {
    pub fn new(name: impl Into<String>, page_size: PageSize) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            page_size,
            pages: Vec::new(),
        }
    }

    /// Snapshot of a book, stamped as modified now.
    pub fn from_book(book: &Book, name: impl Into<String>, created: DateTime<Utc>) -> Self {
        let mut file = Self::new(name, book.page_size);
        file.metadata.created = created;
        file.pages = book.pages().to_vec();
        file
    }

    /// Rebuilds the book. Cached drop zones are recomputed from the points and
    /// pages are renumbered by position.
    pub fn into_book(self) -> Book {
        let mut pages = self.pages;
        for panel in pages.iter_mut().flat_map(|p| p.panels.iter_mut()) {
            panel.refresh_drop_zone();
        }
        Book::from_pages(self.page_size, pages)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write layout file {}", path.display()))?;
        info!("Saved layout '{}' to {}", self.metadata.name, path.display());
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file {}", path.display()))?;
        let file = Self::from_json(&content)
            .with_context(|| format!("Invalid layout file {}", path.display()))?;
        info!(
            "Loaded layout '{}' ({} pages) from {}",
            file.metadata.name,
            file.pages.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(content).context("Failed to parse layout JSON")?;
        let major = |v: &str| v.split('.').next().unwrap_or_default().to_string();
        if major(&file.version) != major(FILE_FORMAT_VERSION) {
            bail!(
                "Unsupported layout file version {} (expected {})",
                file.version,
                FILE_FORMAT_VERSION
            );
        }
        if !file.page_size.is_valid() {
            bail!(
                "Invalid page size {}x{}",
                file.page_size.width,
                file.page_size.height
            );
        }
        Ok(file)
    }
}
