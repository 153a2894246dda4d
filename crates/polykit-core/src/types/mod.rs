//! Geometric value types.
//!
//! ## Modules
//!
//! - [`point`]: The mutable 2D [`Point`] and its in-place affine operations.

pub mod point;

pub use point::Point;
