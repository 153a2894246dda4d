//! # PolyKit Core
//!
//! Core types and the error taxonomy shared by the PolyKit crates.
//! Provides the [`Point`] value with its in-place affine operations
//! (translate, scale, rotate) and the [`DesignError`] failures that
//! scene commands report back to the UI.

pub mod error;
pub mod types;

pub use error::{DesignError, Error, Result};
pub use types::Point;
