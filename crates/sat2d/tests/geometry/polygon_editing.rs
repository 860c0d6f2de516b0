use na::{Point2, Vector2};
use sat2d::query::QueryError;
use sat2d::shape::{Polygon, PolygonData, Winding};

fn pentagon() -> Polygon {
    Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(3.0, 1.0),
        Point2::new(1.0, 3.0),
        Point2::new(-1.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn editing_keeps_polygon_valid() {
    let mut poly = pentagon();
    assert!(poly.is_convex());

    // Pushing a vertex inward makes the polygon concave.
    poly.set_vertex(3, Point2::new(1.0, 0.5)).unwrap();
    assert!(!poly.is_convex());

    assert_eq!(poly.remove_vertex(3), Ok(Point2::new(1.0, 0.5)));
    assert!(poly.is_convex());
    assert_eq!(poly.vertices().len(), 4);

    poly.insert_vertex(None, Point2::new(-0.5, 0.25)).unwrap();
    assert_eq!(poly.vertices().last(), Some(&Point2::new(-0.5, 0.25)));

    assert_eq!(
        poly.remove_vertex(9),
        Err(QueryError::VertexOutOfBounds { index: 9, len: 5 })
    );
}

#[test]
fn reversing_vertices_flips_winding() {
    let mut poly = pentagon();
    assert_eq!(poly.winding(), Winding::Ccw);

    let mut reversed = poly.vertices().to_vec();
    reversed.reverse();
    poly.set_vertices(reversed).unwrap();
    assert_eq!(poly.winding(), Winding::Cw);
    assert!(poly.is_convex());
}

#[test]
fn plain_data_conversions() {
    let poly = pentagon()
        .with_position(Vector2::new(1.0, -1.0))
        .with_velocity(Vector2::new(0.0, 2.0))
        .with_tag("red");

    let data = poly.to_data();
    assert_eq!(data.tag, "red");
    assert_eq!(Polygon::from_data(data.clone()), Ok(poly));

    let invalid = PolygonData {
        vertices: data.vertices[..2].to_vec(),
        ..data
    };
    assert_eq!(
        Polygon::try_from(invalid),
        Err(QueryError::NotEnoughVertices { count: 2 })
    );
}

#[cfg(feature = "serde-serialize")]
#[test]
fn serde_roundtrip_validates() {
    use sat2d::query::CollisionQuery;

    let poly = pentagon().with_tag("blue");
    let json = serde_json::to_string(&poly).unwrap();
    let back: Polygon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, poly);

    let segment = r#"{"position":[0.0,0.0],"vertices":[[0.0,0.0],[1.0,0.0]]}"#;
    assert!(serde_json::from_str::<Polygon>(segment).is_err());

    let query: CollisionQuery = serde_json::from_str(r#""mtv""#).unwrap();
    assert_eq!(query, CollisionQuery::Static);
    let query: CollisionQuery = serde_json::from_str(r#""doubleSweep""#).unwrap();
    assert_eq!(query, CollisionQuery::DoubleSweep);
}
