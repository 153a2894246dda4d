use polykit_designer::{DesignError, Point, PointRef, Scene, Shape, ShapeKind};

fn scene_with(n: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..n {
        let x = i as f64 * 10.0;
        scene.add_shape(Shape::polygon(vec![Point::new(x, 0.0), Point::new(x, 5.0)]));
    }
    scene
}

#[test]
fn test_add_returns_index() {
    let mut scene = Scene::new();
    assert_eq!(scene.add_shape(Shape::point(Point::ORIGIN)), 0);
    assert_eq!(scene.add_shape(Shape::point(Point::ORIGIN)), 1);
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_delete_clears_selection() {
    let mut scene = scene_with(3);
    scene.select(Some(2)).unwrap();
    assert!(scene.delete_shape(0).is_some());
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selected_index(), None);
}

#[test]
fn test_delete_invalid_index_is_noop() {
    let mut scene = scene_with(2);
    scene.select(Some(1)).unwrap();
    assert!(scene.delete_shape(5).is_none());
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.selected_index(), None);
}

#[test]
fn test_select_rejects_bad_index() {
    let mut scene = scene_with(1);
    assert_eq!(scene.select(Some(3)), Err(DesignError::shape_index(3, 1)));
    assert!(scene.select(None).is_ok());
    assert!(scene.select(Some(0)).is_ok());
    assert!(scene.selected_shape().is_some());
}

#[test]
fn test_set_point_position() {
    let mut scene = scene_with(1);
    scene.set_point_position(0, 1, 42.0, 24.0).unwrap();
    assert_eq!(scene.shapes()[0].points()[1], Point::new(42.0, 24.0));

    assert_eq!(
        scene.set_point_position(1, 0, 0.0, 0.0),
        Err(DesignError::shape_index(1, 1))
    );
    assert_eq!(
        scene.set_point_position(0, 2, 0.0, 0.0),
        Err(DesignError::point_index(2, 2))
    );
    assert_eq!(scene.shapes()[0].points()[1], Point::new(42.0, 24.0));
}

#[test]
fn test_indexed_transforms() {
    let mut scene = scene_with(2);
    scene.translate_shape(1, 1.0, 1.0).unwrap();
    assert_eq!(scene.shapes()[1].points()[0], Point::new(11.0, 1.0));
    assert!(scene.rotate_shape(9, 90.0, Point::ORIGIN).is_err());
    assert!(scene.scale_shape(9, 2.0, 2.0, Point::ORIGIN).is_err());
}

#[test]
fn test_pending_membership_is_by_reference() {
    let mut scene = Scene::new();
    scene.add_shape(Shape::point(Point::new(5.0, 5.0)));
    scene.add_shape(Shape::point(Point::new(5.0, 5.0)));

    assert_eq!(scene.mark_point_pending(PointRef::new(0, 0)), Ok(true));
    assert_eq!(scene.mark_point_pending(PointRef::new(0, 0)), Ok(false));
    // Coincident but distinct point.
    assert_eq!(scene.mark_point_pending(PointRef::new(1, 0)), Ok(true));
    assert_eq!(scene.pending_points().len(), 2);

    assert!(scene.mark_point_pending(PointRef::new(0, 1)).is_err());
    assert!(scene.mark_point_pending(PointRef::new(2, 0)).is_err());
}

#[test]
fn test_connect_pending_builds_polygon_in_mark_order() {
    let mut scene = scene_with(3);
    scene.mark_point_pending(PointRef::new(2, 1)).unwrap();
    scene.mark_point_pending(PointRef::new(0, 0)).unwrap();
    scene.mark_point_pending(PointRef::new(1, 1)).unwrap();

    let shape = scene.connect_pending().cloned().unwrap();
    assert_eq!(shape.kind(), ShapeKind::Polygon);
    assert_eq!(
        shape.points(),
        &[Point::new(20.0, 5.0), Point::new(0.0, 0.0), Point::new(10.0, 5.0)]
    );
    assert_eq!(scene.len(), 4);
    assert!(scene.pending_points().is_empty());
}

#[test]
fn test_connected_points_are_copies() {
    let mut scene = scene_with(1);
    scene.mark_point_pending(PointRef::new(0, 0)).unwrap();
    scene.mark_point_pending(PointRef::new(0, 1)).unwrap();
    scene.connect_pending();

    scene.translate_shape(0, 100.0, 0.0).unwrap();
    assert_eq!(scene.shapes()[1].points()[0], Point::new(0.0, 0.0));
}

#[test]
fn test_connect_with_one_pending_creates_nothing() {
    let mut scene = scene_with(1);
    scene.mark_point_pending(PointRef::new(0, 0)).unwrap();
    assert!(scene.connect_pending().is_none());
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.pending_points(), &[PointRef::new(0, 0)]);
}

#[test]
fn test_delete_drops_and_reindexes_pending() {
    let mut scene = scene_with(3);
    scene.mark_point_pending(PointRef::new(0, 0)).unwrap();
    scene.mark_point_pending(PointRef::new(1, 1)).unwrap();
    scene.mark_point_pending(PointRef::new(2, 0)).unwrap();

    scene.delete_shape(1);
    assert_eq!(
        scene.pending_points(),
        &[PointRef::new(0, 0), PointRef::new(1, 0)]
    );
    assert_eq!(
        scene.point_at(scene.pending_points()[1]),
        Ok(Point::new(20.0, 0.0))
    );
}
