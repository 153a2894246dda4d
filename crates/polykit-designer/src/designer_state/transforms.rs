//! Transforms of the selected shape.
//!
//! Scale and rotate pivot on the shape's own centroid.

use polykit_core::DesignError;
use tracing::debug;

use super::DesignerState;

impl DesignerState {
    fn selected_or_err(&self) -> Result<usize, DesignError> {
        self.scene.selected_index().ok_or(DesignError::NoSelection)
    }

    /// Moves the selected shape by `(dx, dy)`.
    pub fn translate_selected(&mut self, dx: f64, dy: f64) -> Result<(), DesignError> {
        let index = self.selected_or_err()?;
        debug!(index, dx, dy, "translate");
        self.commit(|scene| scene.translate_shape(index, dx, dy))
    }

    /// Scales the selected shape about its centroid.
    pub fn scale_selected(&mut self, sx: f64, sy: f64) -> Result<(), DesignError> {
        let index = self.selected_or_err()?;
        debug!(index, sx, sy, "scale");
        self.commit(|scene| {
            let center = scene
                .shape(index)
                .ok_or_else(|| DesignError::shape_index(index, scene.len()))?
                .centroid();
            scene.scale_shape(index, sx, sy, center)
        })
    }

    /// Rotates the selected shape about its centroid by `angle_deg` degrees.
    pub fn rotate_selected(&mut self, angle_deg: f64) -> Result<(), DesignError> {
        let index = self.selected_or_err()?;
        debug!(index, angle_deg, "rotate");
        self.commit(|scene| {
            let center = scene
                .shape(index)
                .ok_or_else(|| DesignError::shape_index(index, scene.len()))?
                .centroid();
            scene.rotate_shape(index, angle_deg, center)
        })
    }
}
