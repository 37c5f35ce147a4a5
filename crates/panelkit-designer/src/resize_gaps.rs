//! Adjacency detection and draggable gutters between rectangular panels.
//!
//! A [`ResizeGap`] is derived from the current panels on every interaction
//! frame and never stored. Only axis-aligned rectangles take part; slanted or
//! irregular panels are ignored by both detection and dragging.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use panelkit_core::GEOMETRY_EPSILON;

use crate::model::{BoundingBox, Panel, Point};

/// Which side of a panel a gap drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl PanelEdge {
    /// Orientation of a gap that moves this edge.
    pub fn orientation(&self) -> GapOrientation {
        match self {
            PanelEdge::Left | PanelEdge::Right => GapOrientation::Vertical,
            PanelEdge::Top | PanelEdge::Bottom => GapOrientation::Horizontal,
        }
    }

    pub fn opposite(&self) -> PanelEdge {
        match self {
            PanelEdge::Top => PanelEdge::Bottom,
            PanelEdge::Right => PanelEdge::Left,
            PanelEdge::Bottom => PanelEdge::Top,
            PanelEdge::Left => PanelEdge::Right,
        }
    }

    fn coordinate(&self, bounds: &BoundingBox) -> f64 {
        match self {
            PanelEdge::Top => bounds.top,
            PanelEdge::Right => bounds.right(),
            PanelEdge::Bottom => bounds.bottom(),
            PanelEdge::Left => bounds.left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapOrientation {
    /// Seam runs top to bottom and drags along x.
    Vertical,
    /// Seam runs left to right and drags along y.
    Horizontal,
}

/// A panel touched by a gap and the edge the gap moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapPanel {
    pub panel_id: String,
    pub edge: PanelEdge,
}

impl GapPanel {
    pub fn new(panel_id: impl Into<String>, edge: PanelEdge) -> Self {
        Self {
            panel_id: panel_id.into(),
            edge,
        }
    }
}

/// Draggable seam between adjacent panels.
///
/// `(x1, y1)`-`(x2, y2)` is the handle: for a vertical gap `x1 == x2` is the
/// midpoint between the two edges and `y1..y2` is the span both panels share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeGap {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub orientation: GapOrientation,
    pub panels: SmallVec<[GapPanel; 2]>,
}

impl ResizeGap {
    pub fn is_vertical(&self) -> bool {
        self.orientation == GapOrientation::Vertical
    }

    /// Seam coordinate along the drag axis.
    pub fn position(&self) -> f64 {
        match self.orientation {
            GapOrientation::Vertical => self.x1,
            GapOrientation::Horizontal => self.y1,
        }
    }

    pub fn length(&self) -> f64 {
        Point::new(self.x1, self.y1).distance_to(&Point::new(self.x2, self.y2))
    }

    pub fn involves(&self, panel_id: &str) -> bool {
        self.panels.iter().any(|p| p.panel_id == panel_id)
    }

    /// The handle after being dragged by `delta` along its axis.
    pub fn dragged(&self, delta: f64) -> Self {
        let mut gap = self.clone();
        match self.orientation {
            GapOrientation::Vertical => {
                gap.x1 += delta;
                gap.x2 += delta;
            }
            GapOrientation::Horizontal => {
                gap.y1 += delta;
                gap.y2 += delta;
            }
        }
        gap
    }
}

/// Finds every pair of rectangular panels whose facing edges are closer than
/// `threshold` and that share a stretch of the perpendicular axis.
///
/// Pairs are visited once, in list order. Overlapping panels never produce a
/// gap.
pub fn calculate_resize_gaps(panels: &[Panel], threshold: f64) -> Vec<ResizeGap> {
    let rects: Vec<(&Panel, BoundingBox)> = panels
        .iter()
        .filter(|p| p.is_rectangle())
        .map(|p| (p, p.drop_zone()))
        .collect();

    let mut gaps = Vec::new();
    for (i, (a, a_box)) in rects.iter().enumerate() {
        for (b, b_box) in &rects[i + 1..] {
            if a_box.intersects(b_box) {
                continue;
            }
            if let Some(gap) = neighbour_gap(a, a_box, b, b_box, threshold) {
                gaps.push(gap);
            }
        }
    }

    debug!(
        "Found {} resize gaps among {} rectangular panels",
        gaps.len(),
        rects.len()
    );
    gaps
}

fn neighbour_gap(
    a: &Panel,
    a_box: &BoundingBox,
    b: &Panel,
    b_box: &BoundingBox,
    threshold: f64,
) -> Option<ResizeGap> {
    let (a_mid, b_mid) = (a_box.center(), b_box.center());
    let mut best: Option<(f64, ResizeGap)> = None;

    // Only edges that face each other are candidates; the closest pair wins.
    if a_box.vertical_overlap(b_box) > GEOMETRY_EPSILON && a_mid.x != b_mid.x {
        let (left, right) = if a_mid.x < b_mid.x {
            ((a, a_box), (b, b_box))
        } else {
            ((b, b_box), (a, a_box))
        };
        let distance = (left.1.right() - right.1.left).abs();
        if distance < threshold {
            best = Some((distance, vertical_gap(left, right)));
        }
    }
    if a_box.horizontal_overlap(b_box) > GEOMETRY_EPSILON && a_mid.y != b_mid.y {
        let (upper, lower) = if a_mid.y < b_mid.y {
            ((a, a_box), (b, b_box))
        } else {
            ((b, b_box), (a, a_box))
        };
        let distance = (upper.1.bottom() - lower.1.top).abs();
        if distance < threshold && best.as_ref().map_or(true, |(d, _)| distance < *d) {
            best = Some((distance, horizontal_gap(upper, lower)));
        }
    }

    best.map(|(_, gap)| gap)
}

fn vertical_gap(left: (&Panel, &BoundingBox), right: (&Panel, &BoundingBox)) -> ResizeGap {
    let (left_panel, l) = left;
    let (right_panel, r) = right;
    let x = (l.right() + r.left) / 2.0;
    ResizeGap {
        x1: x,
        y1: l.top.max(r.top),
        x2: x,
        y2: l.bottom().min(r.bottom()),
        orientation: GapOrientation::Vertical,
        panels: smallvec![
            GapPanel::new(left_panel.id.clone(), PanelEdge::Right),
            GapPanel::new(right_panel.id.clone(), PanelEdge::Left),
        ],
    }
}

fn horizontal_gap(upper: (&Panel, &BoundingBox), lower: (&Panel, &BoundingBox)) -> ResizeGap {
    let (upper_panel, u) = upper;
    let (lower_panel, l) = lower;
    let y = (u.bottom() + l.top) / 2.0;
    ResizeGap {
        x1: u.left.max(l.left),
        y1: y,
        x2: u.right().min(l.right()),
        y2: y,
        orientation: GapOrientation::Horizontal,
        panels: smallvec![
            GapPanel::new(upper_panel.id.clone(), PanelEdge::Bottom),
            GapPanel::new(lower_panel.id.clone(), PanelEdge::Top),
        ],
    }
}

/// Moves the edges a gap declares by `delta`.
///
/// Vertices of each listed panel that lie on its declared edge shift along
/// the gap's axis; the other coordinate and every other vertex stay put.
/// Panels the gap does not list are returned unchanged.
pub fn apply_gap_drag(panels: &[Panel], gap: &ResizeGap, delta: f64) -> Vec<Panel> {
    panels
        .iter()
        .map(|panel| {
            let edges: SmallVec<[PanelEdge; 2]> = gap
                .panels
                .iter()
                .filter(|gp| gp.panel_id == panel.id)
                .map(|gp| gp.edge)
                .collect();
            if edges.is_empty() {
                return panel.clone();
            }

            let bounds = panel.drop_zone();
            let points = panel
                .points()
                .iter()
                .map(|p| shift_vertex(p, &edges, &bounds, delta))
                .collect();
            panel.with_points(points)
        })
        .collect()
}

fn shift_vertex(p: &Point, edges: &[PanelEdge], bounds: &BoundingBox, delta: f64) -> Point {
    let mut moved = *p;
    for edge in edges {
        let on_edge = match edge.orientation() {
            GapOrientation::Vertical => (p.x - edge.coordinate(bounds)).abs() < GEOMETRY_EPSILON,
            GapOrientation::Horizontal => (p.y - edge.coordinate(bounds)).abs() < GEOMETRY_EPSILON,
        };
        if !on_edge {
            continue;
        }
        match edge.orientation() {
            GapOrientation::Vertical => moved.x = p.x + delta,
            GapOrientation::Horizontal => moved.y = p.y + delta,
        }
    }
    moved
}

/// Limits `delta` so no panel the gap touches ends up narrower (or shorter)
/// than `min_size`. A panel already below the minimum may grow but not shrink.
pub fn clamp_gap_delta(panels: &[Panel], gap: &ResizeGap, delta: f64, min_size: f64) -> f64 {
    let mut lo = f64::NEG_INFINITY;
    let mut hi = f64::INFINITY;

    for gp in &gap.panels {
        let Some(panel) = panels.iter().find(|p| p.id == gp.panel_id) else {
            continue;
        };
        let b = panel.drop_zone();
        match gp.edge {
            PanelEdge::Right => lo = lo.max((min_size - b.width).min(0.0)),
            PanelEdge::Left => hi = hi.min((b.width - min_size).max(0.0)),
            PanelEdge::Bottom => lo = lo.max((min_size - b.height).min(0.0)),
            PanelEdge::Top => hi = hi.min((b.height - min_size).max(0.0)),
        }
    }

    delta.max(lo).min(hi)
}
