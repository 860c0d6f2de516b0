use na::{Point2, Vector2};
use sat2d::math::Real;
use sat2d::query::sat::sat_polygon_polygon;
use sat2d::query::QueryError;
use sat2d::shape::Polygon;

fn square(x: Real, y: Real) -> Polygon {
    Polygon::rectangle(Vector2::new(0.5, 0.5))
        .unwrap()
        .with_position(Vector2::new(x, y))
}

/// A convex polygon with `n` vertices on an ellipse, slightly rotated.
fn random_convex(rng: &mut oorandom::Rand32) -> Polygon {
    let n = 3 + rng.rand_range(0..6) as usize;
    let rx = 0.5 + rng.rand_float() as Real * 2.0;
    let ry = 0.5 + rng.rand_float() as Real * 2.0;
    let phase = rng.rand_float() as Real;
    let vertices = (0..n)
        .map(|i| {
            let angle = phase + i as Real * core::f64::consts::TAU as Real / n as Real;
            Point2::new(rx * angle.cos(), ry * angle.sin())
        })
        .collect();
    let position = Vector2::new(
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
    );

    Polygon::new(vertices).unwrap().with_position(position)
}

#[test]
fn unit_squares_apart_do_not_collide() {
    let res = sat_polygon_polygon(&square(0.0, 0.0), &square(1.5, 0.0)).unwrap();
    assert!(!res.collide);
    // The x axis separates both squares.
    assert!(res.axes.iter().any(|axis| axis.normal.x.abs() == 1.0
        && !axis.proj1.intersects(&axis.proj2)));
}

#[test]
fn unit_squares_overlapping_on_x() {
    let res = sat_polygon_polygon(&square(0.0, 0.0), &square(0.5, 0.0)).unwrap();
    assert!(res.collide);

    let contact = res.contact_axis.unwrap();
    assert_relative_eq!(contact.normal.into_inner(), Vector2::x());
    assert_relative_eq!(contact.depth, 0.5);
    assert_eq!(res.contacts().len(), 2);

    for pt in res.contacts() {
        assert_relative_eq!(pt.x, 0.0);
        assert_relative_eq!(pt.y.abs(), 0.5);
    }
}

#[test]
fn clockwise_polygons_give_the_same_contact() {
    let cw = Polygon::new(vec![
        Point2::new(-0.5, 0.5),
        Point2::new(0.5, 0.5),
        Point2::new(0.5, -0.5),
        Point2::new(-0.5, -0.5),
    ])
    .unwrap()
    .with_position(Vector2::new(0.5, 0.0));

    let ccw = sat_polygon_polygon(&square(0.0, 0.0), &square(0.5, 0.0)).unwrap();
    let res = sat_polygon_polygon(&square(0.0, 0.0), &cw).unwrap();
    assert!(res.collide);
    assert_eq!(res.contact_axis.map(|c| c.depth), Some(0.5));
    assert_eq!(
        res.contact_axis.map(|c| c.normal),
        ccw.contact_axis.map(|c| c.normal)
    );
}

#[test]
fn degenerate_polygons_are_rejected() {
    let flat = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(2.0, 0.0),
    ]);
    assert_eq!(flat, Err(QueryError::DegenerateWinding));

    let duplicate = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
    ]);
    assert_eq!(duplicate, Err(QueryError::DegenerateEdge { index: 0 }));
}

#[test]
fn intersects_is_symmetric() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let a = random_convex(&mut rng);
        let b = random_convex(&mut rng);
        let res = sat_polygon_polygon(&a, &b).unwrap();

        for axis in &res.axes {
            assert_eq!(
                axis.proj1.intersects(&axis.proj2),
                axis.proj2.intersects(&axis.proj1)
            );
        }

        assert_eq!(res.collide, sat_polygon_polygon(&b, &a).unwrap().collide);
    }
}

#[test]
fn mtv_separates_polygons() {
    let mut rng = oorandom::Rand32::new(1234);
    let mut num_collisions = 0;

    for _ in 0..200 {
        let a = random_convex(&mut rng);
        let b = random_convex(&mut rng);
        let res = sat_polygon_polygon(&a, &b).unwrap();

        if !res.collide {
            continue;
        }

        num_collisions += 1;
        let contact = res.contact_axis.unwrap();
        let moved = b.translated(&contact.translation());
        let after = sat_polygon_polygon(&a, &moved).unwrap();

        // Moving by the MTV leaves the polygons touching at most.
        if let Some(remaining) = after.contact_axis {
            assert!(remaining.depth < 1.0e-3, "{}", remaining.depth);
        }

        // Moving slightly further separates them.
        let moved_again = moved.translated(&(contact.normal.into_inner() * 1.0e-2));
        assert!(!sat_polygon_polygon(&a, &moved_again).unwrap().collide);
    }

    assert!(num_collisions > 0);
}
