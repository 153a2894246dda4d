//! Scene: the ordered shape list, the current selection and the points
//! pending connection.
//!
//! Pending points are held as [`PointRef`] indices rather than borrows, so a
//! shape can be deleted while the connect workflow is in progress. Deleting
//! drops references into the removed shape and shifts references into later
//! shapes down by one, keeping every remaining reference on its original point.

use polykit_core::{DesignError, Point};
use tracing::debug;

use crate::shapes::Shape;

/// Address of one point inside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub shape: usize,
    pub point: usize,
}

impl PointRef {
    pub fn new(shape: usize, point: usize) -> Self {
        Self { shape, point }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<usize>,
    pending: Vec<PointRef>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scene from already validated shapes, with nothing selected.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            selected: None,
            pending: Vec::new(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    pub fn pending_points(&self) -> &[PointRef] {
        &self.pending
    }

    /// Resolves a reference to the point it addresses.
    pub fn point_at(&self, at: PointRef) -> Result<Point, DesignError> {
        let shape = self.shape_checked(at.shape)?;
        shape
            .points()
            .get(at.point)
            .copied()
            .ok_or_else(|| DesignError::point_index(at.point, shape.len()))
    }

    /// Appends a shape and returns its index.
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        debug!(kind = %shape.kind(), points = shape.len(), "adding shape");
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Appends several shapes in order.
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Removes the shape at `index`. An invalid index is ignored; the
    /// selection is cleared either way.
    pub fn delete_shape(&mut self, index: usize) -> Option<Shape> {
        self.selected = None;
        if index >= self.shapes.len() {
            return None;
        }
        let removed = self.shapes.remove(index);
        self.pending.retain_mut(|r| {
            if r.shape == index {
                return false;
            }
            if r.shape > index {
                r.shape -= 1;
            }
            true
        });
        debug!(index, remaining = self.shapes.len(), "deleted shape");
        Some(removed)
    }

    /// Sets or clears the selection.
    pub fn select(&mut self, index: Option<usize>) -> Result<(), DesignError> {
        if let Some(i) = index {
            self.shape_checked(i)?;
        }
        self.selected = index;
        Ok(())
    }

    /// Moves one point to `(x, y)`.
    pub fn set_point_position(
        &mut self,
        shape_index: usize,
        point_index: usize,
        x: f64,
        y: f64,
    ) -> Result<(), DesignError> {
        self.shape_checked_mut(shape_index)?
            .set_point(point_index, Point::new(x, y))
    }

    pub fn translate_shape(&mut self, index: usize, dx: f64, dy: f64) -> Result<(), DesignError> {
        self.shape_checked_mut(index)?.translate(dx, dy);
        Ok(())
    }

    pub fn scale_shape(
        &mut self,
        index: usize,
        sx: f64,
        sy: f64,
        center: Point,
    ) -> Result<(), DesignError> {
        self.shape_checked_mut(index)?.scale(sx, sy, center);
        Ok(())
    }

    pub fn rotate_shape(
        &mut self,
        index: usize,
        angle_deg: f64,
        center: Point,
    ) -> Result<(), DesignError> {
        self.shape_checked_mut(index)?.rotate(angle_deg, center);
        Ok(())
    }

    /// Marks a point for connection. Returns `false` when that same point is
    /// already pending; a different point at the same coordinates is added.
    pub fn mark_point_pending(&mut self, at: PointRef) -> Result<bool, DesignError> {
        self.point_at(at)?;
        if self.pending.contains(&at) {
            return Ok(false);
        }
        self.pending.push(at);
        Ok(true)
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Joins the pending points, in marking order, into a new polygon.
    ///
    /// The polygon owns copies of the points. With fewer than two pending
    /// points nothing is created and the pending list is left as is.
    pub fn connect_pending(&mut self) -> Option<&Shape> {
        if self.pending.len() < 2 {
            return None;
        }
        let points: Vec<Point> = self
            .pending
            .iter()
            .filter_map(|r| self.point_at(*r).ok())
            .collect();
        self.pending.clear();
        let index = self.add_shape(Shape::polygon(points));
        self.shapes.get(index)
    }

    fn shape_checked(&self, index: usize) -> Result<&Shape, DesignError> {
        let len = self.shapes.len();
        self.shapes
            .get(index)
            .ok_or_else(|| DesignError::shape_index(index, len))
    }

    fn shape_checked_mut(&mut self, index: usize) -> Result<&mut Shape, DesignError> {
        let len = self.shapes.len();
        self.shapes
            .get_mut(index)
            .ok_or_else(|| DesignError::shape_index(index, len))
    }
}
