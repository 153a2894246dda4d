//! Designer session state for UI integration.
//! Owns the scene and its undo history and sequences user commands.
//!
//! This module is split into submodules for better organization:
//! - `history`: Undo
//! - `shapes`: Shape creation, deletion, selection
//! - `transforms`: Translate, scale, rotate of the selected shape
//! - `interaction`: Point dragging and the connect-points workflow
//! - `file_io`: Save/load/import operations

mod file_io;
mod history;
mod interaction;
mod shapes;
mod transforms;

use polykit_core::DesignError;

use crate::hit_test::{HitTester, DEFAULT_HIT_RADIUS};
use crate::history::{History, DEFAULT_HISTORY_CAPACITY};
use crate::scene::{PointRef, Scene};

/// Designer state for UI integration.
///
/// Every mutating command works on a copy of the scene and only replaces the
/// live scene once the new state has been recorded in the history, so a
/// failed command leaves both untouched.
#[derive(Debug, Clone)]
pub struct DesignerState {
    scene: Scene,
    history: History,
    hit_tester: HitTester,
    drag: Option<PointRef>,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    /// Write scene files indented rather than compact.
    pub pretty_json: bool,
}

impl DesignerState {
    /// Creates a new designer state with the default history capacity and
    /// pick radius.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_HISTORY_CAPACITY, DEFAULT_HIT_RADIUS)
    }

    /// Creates a designer state and records the empty scene as the first
    /// snapshot.
    pub fn with_limits(history_capacity: usize, hit_radius: f64) -> Self {
        let scene = Scene::new();
        let mut history = History::with_capacity(history_capacity);
        if let Err(e) = history.push(&scene) {
            tracing::error!("Failed to record initial snapshot: {}", e);
        }
        Self {
            scene,
            history,
            hit_tester: HitTester::new(hit_radius),
            drag: None,
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
            pretty_json: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn hit_tester(&self) -> &HitTester {
        &self.hit_tester
    }

    /// The point being dragged, if a drag is in progress.
    pub fn dragging(&self) -> Option<PointRef> {
        self.drag
    }

    /// Applies `f` to a copy of the scene, records the result and makes it
    /// the live scene.
    pub(crate) fn commit<T>(
        &mut self,
        f: impl FnOnce(&mut Scene) -> Result<T, DesignError>,
    ) -> Result<T, DesignError> {
        let mut next = self.scene.clone();
        let out = f(&mut next)?;
        self.history.push(&next)?;
        self.scene = next;
        self.is_modified = true;
        Ok(out)
    }

    /// Replaces the live scene without recording a snapshot.
    pub(crate) fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.drag = None;
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
