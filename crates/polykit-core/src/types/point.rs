//! Mutable 2D point with in-place affine operations.
//!
//! All operations are total: degenerate factors (zero or negative scale) are
//! applied as given and produce mirrored or collapsed geometry.

use serde::{Deserialize, Serialize};

/// A 2D coordinate.
///
/// Serializes as `{"x": .., "y": ..}`, which is also the persisted point format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Moves the point by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Scales the point's offset from `center` by `(sx, sy)`.
    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.x = center.x + sx * (self.x - center.x);
        self.y = center.y + sy * (self.y - center.y);
    }

    /// Rotates the point about `center` by `angle_deg` degrees.
    ///
    /// Positive angles are counter-clockwise in a y-up frame. A renderer using
    /// y-down screen coordinates shows the same rotation as clockwise.
    pub fn rotate(&mut self, angle_deg: f64, center: Point) {
        let (s, c) = angle_deg.to_radians().sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        self.x = center.x + dx * c - dy * s;
        self.y = center.y + dx * s + dy * c;
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
