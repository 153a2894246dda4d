//! Shape model: an ordered point list tagged with a [`ShapeKind`].
//!
//! The kind decides how the points are read:
//! - `Point`: a single point
//! - `Polygon`: any number of vertices, closed into a loop from 3 upwards
//! - `Circle`: `[center, edge point]`
//! - `Square`: `[corner A, corner B]`, axis aligned, side `max(|dx|, |dy|)`

use polykit_core::{DesignError, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interpretation of a shape's point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Point,
    #[default]
    Polygon,
    Circle,
    Square,
}

impl ShapeKind {
    /// Persisted tag, as written in scene files.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Polygon => "polygon",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    /// List-view label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Polygon => "Polygon",
            Self::Circle => "Circle",
            Self::Square => "Square",
        }
    }

    /// Maps a persisted tag to a kind. Unknown tags fall back to `Polygon`,
    /// which is how files written before kinds existed are read.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    fn check_count(&self, found: usize) -> Result<(), DesignError> {
        let expected = match self {
            Self::Point if found != 1 => "exactly 1",
            Self::Circle | Self::Square if found != 2 => "exactly 2",
            _ => return Ok(()),
        };
        Err(DesignError::InvalidShape {
            kind: self.tag(),
            expected,
            found,
        })
    }
}

impl FromStr for ShapeKind {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" => Ok(Self::Point),
            "polygon" => Ok(Self::Polygon),
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            other => Err(DesignError::format(format!("unknown shape type '{other}'"))),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A kind-tagged, ordered list of points.
///
/// Point order is significant: it defines polygon edges and which point is
/// the circle center or the square's anchor corner. Every constructor checks
/// the point count against the kind, and no method changes the count, so a
/// `Shape` always satisfies its kind's invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    points: Vec<Point>,
}

impl Shape {
    /// Builds a shape, rejecting point counts the kind does not allow.
    pub fn new(kind: ShapeKind, points: Vec<Point>) -> Result<Self, DesignError> {
        kind.check_count(points.len())?;
        Ok(Self { kind, points })
    }

    pub fn point(at: Point) -> Self {
        Self {
            kind: ShapeKind::Point,
            points: vec![at],
        }
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Self {
            kind: ShapeKind::Polygon,
            points,
        }
    }

    pub fn circle(center: Point, edge: Point) -> Self {
        Self {
            kind: ShapeKind::Circle,
            points: vec![center, edge],
        }
    }

    pub fn square(corner_a: Point, corner_b: Point) -> Self {
        Self {
            kind: ShapeKind::Square,
            points: vec![corner_a, corner_b],
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True for polygons the renderer should close into a loop.
    pub fn is_closed(&self) -> bool {
        self.kind == ShapeKind::Polygon && self.points.len() >= 3
    }

    /// Moves one point, as done while dragging.
    pub fn set_point(&mut self, index: usize, to: Point) -> Result<(), DesignError> {
        let len = self.points.len();
        let p = self
            .points
            .get_mut(index)
            .ok_or_else(|| DesignError::point_index(index, len))?;
        *p = to;
        Ok(())
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.translate(dx, dy);
        }
    }

    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        for p in &mut self.points {
            p.scale(sx, sy, center);
        }
    }

    pub fn rotate(&mut self, angle_deg: f64, center: Point) {
        for p in &mut self.points {
            p.rotate(angle_deg, center);
        }
    }

    /// Arithmetic mean of all points; the origin for an empty shape.
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::ORIGIN;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Circle radius: distance from center to edge point.
    pub fn radius(&self) -> Option<f64> {
        match (self.kind, self.points.as_slice()) {
            (ShapeKind::Circle, [center, edge]) => Some(center.distance_to(edge)),
            _ => None,
        }
    }

    /// Square side vector, rooted at corner A.
    ///
    /// Both components have magnitude `max(|dx|, |dy|)` and keep the sign of
    /// the corresponding delta, so the square grows toward corner B's quadrant.
    pub fn side_vector(&self) -> Option<Point> {
        match (self.kind, self.points.as_slice()) {
            (ShapeKind::Square, [a, b]) => {
                let dx = b.x - a.x;
                let dy = b.y - a.y;
                let side = dx.abs().max(dy.abs());
                Some(Point::new(side.copysign(dx), side.copysign(dy)))
            }
            _ => None,
        }
    }
}
