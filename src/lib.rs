//! # PolyKit
//!
//! Geometry and scene-state engine for an interactive 2D shape editor:
//! points, polygons, circles and squares that can be selected, dragged and
//! translated, scaled or rotated, with undo and JSON persistence.
//!
//! ## Architecture
//!
//! PolyKit is organized as a workspace with multiple crates:
//!
//! 1. **polykit-core** - Point math and the error taxonomy
//! 2. **polykit-designer** - Shapes, scene, hit-testing, history, JSON codec, session state
//! 3. **polykit-settings** - Persisted configuration
//! 4. **polykit** - This crate: re-exports, logging setup and a headless binary
//!
//! Rendering and input handling belong to the UI that embeds these crates.

pub use polykit_core::{DesignError, Error, Point, Result};
pub use polykit_designer as designer;
pub use polykit_designer::{
    DesignerState, HitTester, History, PointRef, Scene, Shape, ShapeKind,
};
pub use polykit_settings::{Config, DesignerSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a designer session using the configured limits.
pub fn session_from_config(config: &Config) -> DesignerState {
    let settings = &config.designer;
    let mut state = DesignerState::with_limits(settings.history_capacity, settings.hit_radius);
    state.pretty_json = settings.pretty_json;
    state
}

/// One summary line per shape: `index: label (n points) centroid=(x, y)`.
pub fn describe_scene(scene: &Scene) -> Vec<String> {
    scene
        .shapes()
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let c = shape.centroid();
            format!(
                "{}: {} ({} points) centroid=({:.2}, {:.2})",
                i,
                shape.label(),
                shape.len(),
                c.x,
                c.y
            )
        })
        .collect()
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
