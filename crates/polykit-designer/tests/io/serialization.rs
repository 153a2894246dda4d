use polykit_designer::{
    deserialize_scene, import_merge, serialize_scene, serialize_scene_pretty, DesignError, Point,
    Scene, Shape, ShapeKind,
};

fn mixed_scene() -> Scene {
    Scene::from_shapes(vec![
        Shape::point(Point::new(100.0, 100.0)),
        Shape::polygon(vec![
            Point::new(200.0, 200.0),
            Point::new(250.0, 200.0),
            Point::new(225.0, 150.0),
        ]),
        Shape::circle(Point::new(300.0, 300.0), Point::new(350.0, 300.0)),
        Shape::square(Point::new(400.0, 100.0), Point::new(450.0, 150.0)),
        Shape::polygon(vec![]),
    ])
}

#[test]
fn test_round_trip_all_kinds() {
    let scene = mixed_scene();
    let json = serialize_scene(&scene).unwrap();
    assert_eq!(deserialize_scene(&json).unwrap(), scene);

    let pretty = serialize_scene_pretty(&scene).unwrap();
    assert!(pretty.contains("\n  {"));
    assert_eq!(deserialize_scene(&pretty).unwrap(), scene);
}

#[test]
fn test_round_trip_awkward_floats() {
    let scene = Scene::from_shapes(vec![Shape::polygon(vec![
        Point::new(0.1 + 0.2, -1.0 / 3.0),
        Point::new(1e-300, 123456789.123456789),
    ])]);
    let json = serialize_scene(&scene).unwrap();
    assert_eq!(deserialize_scene(&json).unwrap(), scene);
}

#[test]
fn test_kind_written_as_type() {
    let json = serialize_scene(&mixed_scene()).unwrap();
    assert!(json.contains(r#""type":"circle""#));
    assert!(json.contains(r#""type":"square""#));
    assert!(json.contains(r#""type":"polygon""#));
}

#[test]
fn test_missing_type_defaults_to_polygon() {
    let scene = deserialize_scene(r#"[{"points":[{"x":1,"y":2},{"x":3,"y":4}]}]"#).unwrap();
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.shapes()[0].kind(), ShapeKind::Polygon);
    assert_eq!(scene.shapes()[0].points()[1], Point::new(3.0, 4.0));
}

#[test]
fn test_unknown_type_defaults_to_polygon() {
    let scene = deserialize_scene(r#"[{"points":[],"type":"hexagon"}]"#).unwrap();
    assert_eq!(scene.shapes()[0].kind(), ShapeKind::Polygon);
}

#[test]
fn test_deserialize_rejects_malformed() {
    let cases = [
        r#"{"points":[]}"#,
        r#"[{"type":"polygon"}]"#,
        r#"[{"points":{"x":1,"y":2}}]"#,
        r#"[{"points":[{"x":"1","y":2}]}]"#,
        r#"[{"points":[{"x":1}]}]"#,
        r#"[{"points":[{"x":1,"y":1}],"type":"circle"}]"#,
        "not json",
    ];
    for case in cases {
        let result = deserialize_scene(case);
        assert!(
            matches!(result, Err(DesignError::Format { .. })),
            "expected format error for {case}, got {result:?}"
        );
    }
}

#[test]
fn test_import_merge_appends_polygons() {
    let mut scene = Scene::from_shapes(vec![Shape::point(Point::new(1.0, 1.0))]);
    let text = r#"[
        {"points":[{"x":0,"y":0},{"x":10,"y":0}],"type":"circle"},
        {"points":[{"x":5,"y":5}]}
    ]"#;

    assert_eq!(import_merge(text, &mut scene), Ok(2));
    assert_eq!(scene.len(), 3);
    assert_eq!(scene.shapes()[0].kind(), ShapeKind::Point);
    assert_eq!(scene.shapes()[1].kind(), ShapeKind::Polygon);
    assert_eq!(scene.shapes()[2].kind(), ShapeKind::Polygon);
    assert_eq!(scene.shapes()[2].points(), &[Point::new(5.0, 5.0)]);
}

#[test]
fn test_import_is_all_or_nothing() {
    let mut scene = mixed_scene();
    let before = scene.clone();
    let text = r#"[{"points":[{"x":0,"y":0}]},{"type":"square"}]"#;

    assert!(matches!(
        import_merge(text, &mut scene),
        Err(DesignError::Format { .. })
    ));
    assert_eq!(scene, before);

    assert!(import_merge(r#"{"points":[]}"#, &mut scene).is_err());
    assert_eq!(scene, before);
}
