//! Pointer interaction: point dragging and the connect-points workflow.
//!
//! A press on a point selects its shape and starts dragging that point; a
//! press on empty space clears the selection. Drag moves are applied live
//! and the whole drag is recorded as one snapshot on release.

use polykit_core::{DesignError, Point};
use tracing::{debug, warn};

use super::DesignerState;
use crate::scene::PointRef;

impl DesignerState {
    /// Handles a press at `position`. Returns the point hit, if any.
    pub fn press_at(&mut self, position: Point) -> Result<Option<PointRef>, DesignError> {
        let hit = self.hit_tester.find_nearest(position, self.scene.shapes());
        self.scene.select(hit.map(|r| r.shape))?;
        self.drag = hit;
        Ok(hit)
    }

    /// Moves the dragged point to `position`. Does nothing when no drag is
    /// in progress.
    pub fn drag_to(&mut self, position: Point) -> Result<(), DesignError> {
        let Some(at) = self.drag else {
            return Ok(());
        };
        if !position.is_finite() {
            return Err(DesignError::format("drag position has a non-finite coordinate"));
        }
        self.scene
            .set_point_position(at.shape, at.point, position.x, position.y)
    }

    /// Ends a drag. Returns `true` and records a snapshot when a drag was
    /// in progress.
    pub fn release(&mut self) -> Result<bool, DesignError> {
        if self.drag.take().is_none() {
            return Ok(false);
        }
        self.history.push(&self.scene)?;
        self.is_modified = true;
        Ok(true)
    }

    /// Marks the point at `position` for connection. Returns the marked
    /// point, or `None` when nothing was hit or the point was already marked.
    pub fn mark_at(&mut self, position: Point) -> Result<Option<PointRef>, DesignError> {
        let Some(hit) = self.hit_tester.find_nearest(position, self.scene.shapes()) else {
            return Ok(None);
        };
        if self.scene.mark_point_pending(hit)? {
            debug!(shape = hit.shape, point = hit.point, "marked point");
            Ok(Some(hit))
        } else {
            Ok(None)
        }
    }

    /// Joins the pending points into a new polygon and returns its index.
    /// Returns `None` when fewer than two points are pending.
    pub fn connect_pending(&mut self) -> Result<Option<usize>, DesignError> {
        if self.scene.pending_points().len() < 2 {
            warn!(
                pending = self.scene.pending_points().len(),
                "connect needs at least two marked points"
            );
            return Ok(None);
        }
        self.commit(|scene| {
            scene.connect_pending();
            Ok(Some(scene.len() - 1))
        })
    }

    /// Abandons the connect workflow, unmarking every pending point.
    /// Returns how many points were unmarked.
    pub fn cancel_connect(&mut self) -> usize {
        let count = self.scene.pending_points().len();
        self.scene.clear_pending();
        if count > 0 {
            debug!(count, "cancelled connect");
        }
        count
    }
}
