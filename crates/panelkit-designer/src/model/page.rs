use serde::{Deserialize, Serialize};

use super::{Panel, Point};

/// An ordered collection of panels with a 1-based display number.
///
/// The number is owned by the [`Book`](crate::book::Book) holding the page and
/// is rewritten whenever pages are added, removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub number: u32,
    pub panels: Vec<Panel>,
}

impl Page {
    pub fn new(number: u32, panels: Vec<Panel>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            number,
            panels,
        }
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn panel_mut(&mut self, id: &str) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id == id)
    }

    /// Topmost panel under `point`. Later panels render above earlier ones,
    /// so the search runs back to front.
    pub fn panel_at(&self, point: &Point) -> Option<&Panel> {
        self.panels.iter().rev().find(|p| p.contains_point(point))
    }

    pub fn panel_ids(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.id.as_str()).collect()
    }
}
