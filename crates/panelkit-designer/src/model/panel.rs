use serde::{Deserialize, Serialize};

use super::{BoundingBox, Point};
use crate::polygon;

/// Shape tag carried by every panel. Only polygons exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelShape {
    #[default]
    Polygon,
}

/// Library image dropped into a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelImage {
    /// Library identifier or URL of the image.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl PanelImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// A polygonal region of a page that can hold one image.
///
/// `points` and `drop_zone` are private so the bounding box cannot drift from
/// the outline: every mutation goes through [`Panel::set_points`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    #[serde(default)]
    pub shape: PanelShape,
    points: Vec<Point>,
    drop_zone: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PanelImage>,
}

impl Panel {
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        let drop_zone = polygon::bounding_box(&points);
        Self {
            id: id.into(),
            shape: PanelShape::Polygon,
            points,
            drop_zone,
            image: None,
        }
    }

    /// Creates a panel with a fresh random identifier.
    pub fn with_generated_id(points: Vec<Point>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), points)
    }

    /// Axis-aligned rectangle panel in top-left, top-right, bottom-right,
    /// bottom-left vertex order.
    pub fn rectangle(id: impl Into<String>, bounds: BoundingBox) -> Self {
        Self::new(id, polygon::rectangle_points(&bounds))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn drop_zone(&self) -> BoundingBox {
        self.drop_zone
    }

    pub fn set_points(&mut self, points: Vec<Point>) {
        self.drop_zone = polygon::bounding_box(&points);
        self.points = points;
    }

    /// Copy of this panel (same id, shape and image) with a new outline.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        let mut panel = self.clone();
        panel.set_points(points);
        panel
    }

    /// Recomputes the cached drop zone, e.g. after deserialising.
    pub fn refresh_drop_zone(&mut self) {
        self.drop_zone = polygon::bounding_box(&self.points);
    }

    pub fn is_rectangle(&self) -> bool {
        polygon::is_axis_aligned_rectangle(&self.points)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.drop_zone.contains_point(p) && polygon::point_in_polygon(p, &self.points)
    }

    pub fn path_data(&self) -> String {
        polygon::path_data(&self.points)
    }
}
