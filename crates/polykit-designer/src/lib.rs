//! # PolyKit Designer
//!
//! The geometry and scene-state engine behind the PolyKit editor. A UI calls
//! into it to create, select, drag and transform shapes, and re-reads the
//! scene to render it.
//!
//! ## Core Components
//!
//! - **Shapes**: Point, polygon, circle and square, stored as kind-tagged point lists
//! - **Scene**: Ordered shapes, the current selection and points pending connection
//! - **Hit testing**: First point within a pick radius, earliest shape first
//! - **History**: Bounded stack of serialized scene snapshots for undo
//! - **Serialization**: JSON scene files and the polygon import path
//! - **Designer state**: The session that ties commands, history and file I/O together
//!
//! ## Usage
//!
//! ```rust
//! use polykit_designer::DesignerState;
//!
//! let mut state = DesignerState::new();
//! let index = state.add_polygon().unwrap();
//! state.select(Some(index)).unwrap();
//! state.translate_selected(10.0, -5.0).unwrap();
//! state.undo().unwrap();
//! ```

pub mod designer_state;
pub mod history;
pub mod scene;
pub mod serialization;
pub mod shapes;

pub use designer_state::DesignerState;
pub use hit_test::{find_nearest, HitTester, DEFAULT_HIT_RADIUS};
pub use history::{History, DEFAULT_HISTORY_CAPACITY};
pub use polykit_core::{DesignError, Point};
pub use scene::{PointRef, Scene};
pub use serialization::{
    deserialize_scene, import_merge, serialize_scene, serialize_scene_pretty, ShapeData,
};
pub use shapes::{Shape, ShapeKind};
