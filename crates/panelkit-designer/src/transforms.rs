//! Page-level panel transforms: fit-preserving rotation and left-right mirror.
//!
//! Both transforms take the full panel list of a page and return a new list
//! with the same ids in the same order. Only outlines (and therefore drop
//! zones) change; images and shape tags are carried over untouched.
//!
//! Vertex order matters downstream: rectangle panels keep their top-left,
//! top-right, bottom-right, bottom-left sequence through both transforms, so
//! "the first two points are the top edge" stays true.

use tracing::debug;

use panelkit_core::GEOMETRY_EPSILON;

use crate::model::{PageSize, Panel, Point};
use crate::polygon;

/// Mirrors every panel about the page's vertical centre line.
///
/// `x' = width - x`. Reflection flips winding, so the outline is re-threaded
/// as `[m(p1), m(p0), m(pn-1), ..., m(p2)]`; applying the mirror twice gives
/// back the original sequence.
pub fn mirror_panels(panels: &[Panel], page: PageSize) -> Vec<Panel> {
    debug!("Mirroring {} panels across x = {}", panels.len(), page.width / 2.0);
    panels
        .iter()
        .map(|panel| panel.with_points(mirror_points(panel.points(), page)))
        .collect()
}

/// Rotates every panel 90° clockwise within the fixed page canvas.
///
/// The canvas keeps its dimensions, so the rotation is stretched to fit:
/// `x' = (height - y) * width / height`, `y' = x * height / width`. Four
/// rotations are the identity.
///
/// A page holding a single full-width panel that is wider than tall collapses
/// to the default full-page panel instead.
pub fn rotate_panels(panels: &[Panel], page: PageSize) -> Vec<Panel> {
    if let Some(collapsed) = collapse_wide_single_panel(panels, page) {
        return collapsed;
    }

    debug!("Rotating {} panels clockwise", panels.len());
    panels
        .iter()
        .map(|panel| panel.with_points(rotate_points(panel.points(), page)))
        .collect()
}

pub fn mirror_point(p: &Point, page: PageSize) -> Point {
    Point::new(page.width - p.x, p.y)
}

pub fn rotate_point(p: &Point, page: PageSize) -> Point {
    Point::new(
        (page.height - p.y) * page.width / page.height,
        p.x * page.height / page.width,
    )
}

fn mirror_points(points: &[Point], page: PageSize) -> Vec<Point> {
    let mapped: Vec<Point> = points.iter().map(|p| mirror_point(p, page)).collect();
    if mapped.len() < 2 {
        return mapped;
    }

    let mut out = Vec::with_capacity(mapped.len());
    out.push(mapped[1]);
    out.push(mapped[0]);
    out.extend(mapped[2..].iter().rev());
    out
}

fn rotate_points(points: &[Point], page: PageSize) -> Vec<Point> {
    let mut mapped: Vec<Point> = points.iter().map(|p| rotate_point(p, page)).collect();
    // The old bottom-left corner lands top-left.
    if polygon::is_axis_aligned_rectangle(&mapped) {
        mapped.rotate_right(1);
    }
    mapped
}

fn collapse_wide_single_panel(panels: &[Panel], page: PageSize) -> Option<Vec<Panel>> {
    let [panel] = panels else {
        return None;
    };

    let bounds = panel.drop_zone();
    let full_width = bounds.left.abs() < GEOMETRY_EPSILON
        && (bounds.width - page.width).abs() < GEOMETRY_EPSILON;
    if !full_width || bounds.width <= bounds.height {
        return None;
    }

    debug!(
        "Panel {} spans the page width; rotation collapses to the full-page layout",
        panel.id
    );
    Some(vec![
        panel.with_points(polygon::rectangle_points(&page.bounds()))
    ])
}
