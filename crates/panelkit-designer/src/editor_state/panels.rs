//! Resize gaps, gap dragging, hit testing and image placement.

use tracing::{debug, warn};

use panelkit_core::{LayoutError, Result};

use super::EditorState;
use crate::drag::GapDragSession;
use crate::model::{Panel, PanelImage, Point};
use crate::resize_gaps::{apply_gap_drag, calculate_resize_gaps, clamp_gap_delta, ResizeGap};

impl EditorState {
    /// Current draggable gaps of a page.
    pub fn resize_gaps(&self, page_id: &str) -> Result<Vec<ResizeGap>> {
        let page = self.book.page(page_id)?;
        Ok(calculate_resize_gaps(
            &page.panels,
            self.settings.adjacency_threshold,
        ))
    }

    /// Drags a gap in one step. The delta is clamped to the minimum panel
    /// size; the applied delta is returned.
    pub fn drag_gap(&mut self, page_id: &str, gap: &ResizeGap, delta: f64) -> Result<f64> {
        let min_size = self.settings.min_panel_size;
        let current = &self.book.page(page_id)?.panels;
        let applied = clamp_gap_delta(current, gap, delta, min_size);
        if applied != delta {
            debug!("Gap drag clamped from {} to {}", delta, applied);
        }
        self.edit_panels(page_id, "Resize Panels", |panels| {
            apply_gap_drag(panels, gap, applied)
        })?;
        Ok(applied)
    }

    /// Starts a throttled drag over the page's current panels.
    pub fn begin_gap_drag(&self, page_id: &str, gap: ResizeGap) -> Result<GapDragSession> {
        let page = self.book.page(page_id)?;
        Ok(GapDragSession::new(
            &page.panels,
            gap,
            self.settings.drag_throttle,
            self.settings.min_panel_size,
        ))
    }

    /// Writes the final frame of a drag session back as one undoable edit.
    pub fn commit_gap_drag(
        &mut self,
        page_id: &str,
        session: GapDragSession,
        total_delta: f64,
    ) -> Result<()> {
        let panels = session.finish(total_delta);
        self.edit_panels(page_id, "Resize Panels", move |_| panels)
    }

    pub fn panel_at(&self, page_id: &str, point: &Point) -> Result<Option<&Panel>> {
        Ok(self.book.page(page_id)?.panel_at(point))
    }

    /// Drops an image onto whichever panel lies under `point`; returns that
    /// panel's id.
    pub fn assign_image_at(
        &mut self,
        page_id: &str,
        point: &Point,
        image: PanelImage,
    ) -> Result<String> {
        let Some(panel) = self.book.page(page_id)?.panel_at(point) else {
            warn!("Image {} dropped outside every panel", image.source);
            return Err(LayoutError::NoPanelAtPoint {
                page_id: page_id.to_string(),
                x: point.x,
                y: point.y,
            }
            .into());
        };
        let panel_id = panel.id.clone();
        self.assign_image(page_id, &panel_id, image)?;
        Ok(panel_id)
    }

    /// Places an image in a panel, returning the image it replaced.
    pub fn assign_image(
        &mut self,
        page_id: &str,
        panel_id: &str,
        image: PanelImage,
    ) -> Result<Option<PanelImage>> {
        self.set_panel_image(page_id, panel_id, Some(image), "Assign Image")
    }

    pub fn clear_image(&mut self, page_id: &str, panel_id: &str) -> Result<Option<PanelImage>> {
        self.set_panel_image(page_id, panel_id, None, "Clear Image")
    }

    fn set_panel_image(
        &mut self,
        page_id: &str,
        panel_id: &str,
        image: Option<PanelImage>,
        name: &'static str,
    ) -> Result<Option<PanelImage>> {
        let previous = self
            .book
            .page(page_id)?
            .panel(panel_id)
            .ok_or_else(|| LayoutError::PanelNotFound {
                page_id: page_id.to_string(),
                panel_id: panel_id.to_string(),
            })?
            .image
            .clone();

        self.edit_panels(page_id, name, |panels| {
            panels
                .iter()
                .map(|p| {
                    let mut p = p.clone();
                    if p.id == panel_id {
                        p.image = image.clone();
                    }
                    p
                })
                .collect()
        })?;
        Ok(previous)
    }
}
