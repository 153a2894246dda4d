//! File I/O operations (save, load, import) for designer state.

use std::path::Path;
use tracing::{info, warn};

use super::DesignerState;
use crate::serialization;

impl DesignerState {
    /// Save the scene to a JSON file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> polykit_core::Result<()> {
        let path = path.as_ref();
        let json = if self.pretty_json {
            serialization::serialize_scene_pretty(&self.scene)
        } else {
            serialization::serialize_scene(&self.scene)
        }?;

        std::fs::write(path, json)?;

        info!(path = %path.display(), shapes = self.scene.len(), "saved scene");
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load a scene from a JSON file, replacing the current one.
    ///
    /// The loaded scene is recorded in the history. On failure the session
    /// is unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> polykit_core::Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let scene = serialization::deserialize_scene(&content).inspect_err(|e| {
            warn!(path = %path.display(), "rejected scene file: {}", e);
        })?;

        self.history.push(&scene)?;
        info!(path = %path.display(), shapes = scene.len(), "loaded scene");
        self.replace_scene(scene);
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Append the shapes of a JSON file to the scene as polygons.
    /// Returns the number of shapes imported.
    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> polykit_core::Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let count = self.commit(|scene| serialization::import_merge(&content, scene))?;
        info!(path = %path.display(), count, "imported shapes");
        Ok(count)
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.design_name)
        } else {
            &self.design_name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
