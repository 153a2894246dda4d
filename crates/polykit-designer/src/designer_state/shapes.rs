//! Shape operations (add, delete, select) for designer state.

use polykit_core::{DesignError, Point};
use tracing::debug;

use super::DesignerState;
use crate::shapes::Shape;

const POINT_TEMPLATE: Point = Point { x: 100.0, y: 100.0 };
const TRIANGLE_TEMPLATE: [Point; 3] = [
    Point { x: 200.0, y: 200.0 },
    Point { x: 250.0, y: 200.0 },
    Point { x: 225.0, y: 150.0 },
];
const CIRCLE_TEMPLATE: [Point; 2] = [Point { x: 300.0, y: 300.0 }, Point { x: 350.0, y: 300.0 }];
const SQUARE_TEMPLATE: [Point; 2] = [Point { x: 400.0, y: 100.0 }, Point { x: 450.0, y: 150.0 }];

impl DesignerState {
    /// Appends a shape and returns its index.
    pub fn add_shape(&mut self, shape: Shape) -> Result<usize, DesignError> {
        self.commit(|scene| Ok(scene.add_shape(shape)))
    }

    /// Adds a single point at (100, 100).
    pub fn add_point(&mut self) -> Result<usize, DesignError> {
        self.add_shape(Shape::point(POINT_TEMPLATE))
    }

    /// Adds the default triangle.
    pub fn add_polygon(&mut self) -> Result<usize, DesignError> {
        self.add_shape(Shape::polygon(TRIANGLE_TEMPLATE.to_vec()))
    }

    /// Adds a circle of radius 50 centered at (300, 300).
    pub fn add_circle(&mut self) -> Result<usize, DesignError> {
        let [center, edge] = CIRCLE_TEMPLATE;
        self.add_shape(Shape::circle(center, edge))
    }

    /// Adds a 50x50 square anchored at (400, 100).
    pub fn add_square(&mut self) -> Result<usize, DesignError> {
        let [a, b] = SQUARE_TEMPLATE;
        self.add_shape(Shape::square(a, b))
    }

    /// Deletes the selected shape. Returns `false` when nothing was selected.
    pub fn delete_selected(&mut self) -> Result<bool, DesignError> {
        let Some(index) = self.scene.selected_index() else {
            debug!("delete requested with no selection");
            return Ok(false);
        };
        self.drag = None;
        self.commit(|scene| Ok(scene.delete_shape(index).is_some()))
    }

    /// Sets or clears the selection. Not recorded in the history.
    pub fn select(&mut self, index: Option<usize>) -> Result<(), DesignError> {
        self.scene.select(index)
    }

    /// Labels for a shape list view, in scene order.
    pub fn shape_labels(&self) -> Vec<&'static str> {
        self.scene.shapes().iter().map(Shape::label).collect()
    }
}
