//! Undo for designer state.

use polykit_core::DesignError;

use super::DesignerState;

impl DesignerState {
    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Restores the previous snapshot. The restored scene has no selection
    /// and no pending points.
    pub fn undo(&mut self) -> Result<(), DesignError> {
        let scene = self.history.undo()?;
        self.replace_scene(scene);
        self.is_modified = true;
        Ok(())
    }
}
