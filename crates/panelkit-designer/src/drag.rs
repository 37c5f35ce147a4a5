//! Throttled gap dragging for pointer handlers.
//!
//! Pointer-move events arrive far more often than a page needs re-laying
//! out. A [`GapDragSession`] captures the panels at drag start and only
//! recomputes when the throttle interval has passed since the last frame it
//! produced. Every frame is computed from the captured panels with the total
//! pointer offset, so skipped frames lose nothing.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::Panel;
use crate::resize_gaps::{apply_gap_drag, clamp_gap_delta, ResizeGap};

#[derive(Debug, Clone)]
pub struct GapDragSession {
    gap: ResizeGap,
    origin: Vec<Panel>,
    throttle: Duration,
    min_panel_size: f64,
    last_frame: Option<Instant>,
    applied_delta: f64,
}

impl GapDragSession {
    pub fn new(panels: &[Panel], gap: ResizeGap, throttle: Duration, min_panel_size: f64) -> Self {
        Self {
            gap,
            origin: panels.to_vec(),
            throttle,
            min_panel_size,
            last_frame: None,
            applied_delta: 0.0,
        }
    }

    pub fn gap(&self) -> &ResizeGap {
        &self.gap
    }

    /// Panels as they were when the drag started.
    pub fn origin(&self) -> &[Panel] {
        &self.origin
    }

    /// Clamped delta of the most recently produced frame.
    pub fn applied_delta(&self) -> f64 {
        self.applied_delta
    }

    /// The gap handle at the last produced frame.
    pub fn current_gap(&self) -> ResizeGap {
        self.gap.dragged(self.applied_delta)
    }

    /// Feeds a pointer offset measured from the drag start.
    ///
    /// Returns the re-laid-out panels, or `None` while throttled.
    pub fn update(&mut self, total_delta: f64, now: Instant) -> Option<Vec<Panel>> {
        if let Some(last) = self.last_frame {
            if now.saturating_duration_since(last) < self.throttle {
                return None;
            }
        }
        self.last_frame = Some(now);
        Some(self.frame(total_delta))
    }

    /// Ends the drag, always producing the final layout.
    pub fn finish(mut self, total_delta: f64) -> Vec<Panel> {
        let panels = self.frame(total_delta);
        debug!(
            "Gap drag finished at delta {} (requested {})",
            self.applied_delta, total_delta
        );
        panels
    }

    fn frame(&mut self, total_delta: f64) -> Vec<Panel> {
        self.applied_delta =
            clamp_gap_delta(&self.origin, &self.gap, total_delta, self.min_panel_size);
        apply_gap_drag(&self.origin, &self.gap, self.applied_delta)
    }
}
