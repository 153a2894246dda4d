use polykit_designer::{Point, Shape, ShapeKind};

fn assert_close(a: Point, b: Point) {
    assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
    assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
}

fn triangle() -> Shape {
    Shape::polygon(vec![
        Point::new(200.0, 200.0),
        Point::new(250.0, 200.0),
        Point::new(225.0, 150.0),
    ])
}

#[test]
fn test_translate_triangle() {
    let mut shape = triangle();
    shape.translate(10.0, -5.0);
    assert_eq!(
        shape.points(),
        &[
            Point::new(210.0, 195.0),
            Point::new(260.0, 195.0),
            Point::new(235.0, 145.0),
        ]
    );
}

#[test]
fn test_centroid() {
    let shape = Shape::polygon(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ]);
    assert_eq!(shape.centroid(), Point::new(2.0, 2.0));
}

#[test]
fn test_scale_about_centroid_keeps_centroid() {
    let mut shape = triangle();
    let c = shape.centroid();
    shape.scale(2.0, 3.0, c);
    assert_close(shape.centroid(), c);
    assert_close(shape.points()[0], Point::new(c.x + 2.0 * (200.0 - c.x), c.y + 3.0 * (200.0 - c.y)));
}

#[test]
fn test_rotate_half_turn() {
    let mut shape = Shape::polygon(vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
    shape.rotate(180.0, Point::ORIGIN);
    assert_close(shape.points()[0], Point::new(-1.0, 0.0));
    assert_close(shape.points()[1], Point::new(0.0, -1.0));
}

#[test]
fn test_circle_radius() {
    let circle = Shape::circle(Point::new(300.0, 300.0), Point::new(350.0, 300.0));
    assert_eq!(circle.kind(), ShapeKind::Circle);
    assert_eq!(circle.radius(), Some(50.0));
    assert_eq!(triangle().radius(), None);
}

#[test]
fn test_square_side_vector() {
    let square = Shape::square(Point::new(400.0, 100.0), Point::new(450.0, 150.0));
    assert_eq!(square.side_vector(), Some(Point::new(50.0, 50.0)));

    // Longer axis wins, signs follow corner B.
    let square = Shape::square(Point::new(0.0, 0.0), Point::new(-10.0, 3.0));
    assert_eq!(square.side_vector(), Some(Point::new(-10.0, 10.0)));
}

#[test]
fn test_circle_keeps_radius_under_rotation() {
    let mut circle = Shape::circle(Point::new(300.0, 300.0), Point::new(350.0, 300.0));
    circle.rotate(37.0, Point::new(12.0, -4.0));
    assert!((circle.radius().unwrap() - 50.0).abs() < 1e-9);
}

#[test]
fn test_closed_polygon() {
    assert!(triangle().is_closed());
    assert!(!Shape::polygon(vec![Point::ORIGIN, Point::new(1.0, 1.0)]).is_closed());
    assert!(!Shape::square(Point::ORIGIN, Point::new(1.0, 1.0)).is_closed());
}

#[test]
fn test_labels() {
    assert_eq!(Shape::point(Point::ORIGIN).label(), "Point");
    assert_eq!(triangle().label(), "Polygon");
    assert_eq!(Shape::circle(Point::ORIGIN, Point::ORIGIN).label(), "Circle");
    assert_eq!(Shape::square(Point::ORIGIN, Point::ORIGIN).label(), "Square");
}
