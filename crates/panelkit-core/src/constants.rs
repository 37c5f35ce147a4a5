//! Geometric constants shared by the layout engine.

/// Tolerance for coordinate comparisons.
///
/// Two coordinates closer than this are treated as equal when deciding
/// whether an edge is horizontal/vertical or whether a vertex lies on a
/// bounding-box edge.
pub const GEOMETRY_EPSILON: f64 = 1e-6;

/// Maximum distance between two panel edges for them to count as adjacent.
pub const DEFAULT_ADJACENCY_THRESHOLD: f64 = 20.0;

/// Smallest extent a panel may be dragged down to along either axis.
pub const DEFAULT_MIN_PANEL_SIZE: f64 = 40.0;

/// Minimum interval between recomputations while a gap is being dragged.
pub const DEFAULT_DRAG_THROTTLE_MS: u64 = 30;
