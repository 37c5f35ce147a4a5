//! Polygon utilities shared by every layout operation.
//!
//! Bounding boxes, path descriptors for renderers, the even-odd hit test and
//! the rectangle classifier used by the resize-gap detector. Callers must pass
//! non-empty point lists; panels built by the layout templates always satisfy
//! that.

use lyon::math::point;
use lyon::path::Path;

use panelkit_core::GEOMETRY_EPSILON;

use crate::model::{BoundingBox, Point};

/// Axis-aligned box enclosing `points`. An empty slice yields the zero box.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let Some(first) = points.first() else {
        return BoundingBox::default();
    };

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    BoundingBox::from_edges(min_x, min_y, max_x, max_y)
}

/// Corners of `bounds` in top-left, top-right, bottom-right, bottom-left order.
pub fn rectangle_points(bounds: &BoundingBox) -> Vec<Point> {
    vec![
        Point::new(bounds.left, bounds.top),
        Point::new(bounds.right(), bounds.top),
        Point::new(bounds.right(), bounds.bottom()),
        Point::new(bounds.left, bounds.bottom()),
    ]
}

/// SVG path descriptor: move to the first point, line to each following
/// point, close.
pub fn path_data(points: &[Point]) -> String {
    let mut data = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        data.push_str(&format!("{} {} {} ", cmd, p.x, p.y));
    }
    data.push('Z');
    data
}

/// The polygon outline as a closed lyon path.
pub fn to_path(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        builder.begin(point(first.x as f32, first.y as f32));
        for p in iter {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.close();
    }
    builder.build()
}

/// Even-odd ray casting: counts crossings of a horizontal ray from `p`.
pub fn point_in_polygon(p: &Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (&polygon[i], &polygon[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// True for four vertices that sit on the corners of their bounding box and
/// are joined by alternating horizontal and vertical edges.
pub fn is_axis_aligned_rectangle(points: &[Point]) -> bool {
    if points.len() != 4 {
        return false;
    }

    let bounds = bounding_box(points);
    if bounds.width <= GEOMETRY_EPSILON || bounds.height <= GEOMETRY_EPSILON {
        return false;
    }

    let near = |a: f64, b: f64| (a - b).abs() < GEOMETRY_EPSILON;
    let on_corner = points.iter().all(|p| {
        (near(p.x, bounds.left) || near(p.x, bounds.right()))
            && (near(p.y, bounds.top) || near(p.y, bounds.bottom()))
    });
    if !on_corner {
        return false;
    }

    let mut previous_horizontal = None;
    for i in 0..4 {
        let (a, b) = (&points[i], &points[(i + 1) % 4]);
        let horizontal = near(a.y, b.y) && !near(a.x, b.x);
        let vertical = near(a.x, b.x) && !near(a.y, b.y);
        if !(horizontal || vertical) {
            return false;
        }
        if previous_horizontal == Some(horizontal) {
            return false;
        }
        previous_horizontal = Some(horizontal);
    }
    true
}
