use serde::{Deserialize, Serialize};

use panelkit_core::GEOMETRY_EPSILON;

mod page;
mod panel;

pub use page::Page;
pub use panel::{Panel, PanelImage, PanelShape};

/// A position in page space. The y axis grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates are within [`GEOMETRY_EPSILON`] of `other`.
    pub fn approx_eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < GEOMETRY_EPSILON && (self.y - other.y).abs() < GEOMETRY_EPSILON
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle enclosing a polygon, cached on every panel as its
/// drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Builds a box from its four edge coordinates.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Length of the shared x range; negative when the boxes are apart.
    pub fn horizontal_overlap(&self, other: &BoundingBox) -> f64 {
        self.right().min(other.right()) - self.left.max(other.left)
    }

    /// Length of the shared y range; negative when the boxes are apart.
    pub fn vertical_overlap(&self, other: &BoundingBox) -> f64 {
        self.bottom().min(other.bottom()) - self.top.max(other.top)
    }

    /// True when the boxes share a region of positive area. Boxes that only
    /// touch along an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.horizontal_overlap(other) > GEOMETRY_EPSILON
            && self.vertical_overlap(other) > GEOMETRY_EPSILON
    }

    pub fn approx_eq(&self, other: &BoundingBox) -> bool {
        (self.top - other.top).abs() < GEOMETRY_EPSILON
            && (self.left - other.left).abs() < GEOMETRY_EPSILON
            && (self.width - other.width).abs() < GEOMETRY_EPSILON
            && (self.height - other.height).abs() < GEOMETRY_EPSILON
    }
}

/// Fixed canvas every page of a book is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width, self.height)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::new(800.0, 1200.0)
    }
}
