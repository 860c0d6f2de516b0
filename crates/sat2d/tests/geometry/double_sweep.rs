use na::Vector2;
use sat2d::math::Real;
use sat2d::query::sat::sat_polygon_polygon;
use sat2d::query::sweep::double_sweep_polygon_polygon;
use sat2d::query::{collide, CollisionQuery};
use sat2d::shape::Polygon;

fn square(x: Real, y: Real) -> Polygon {
    Polygon::rectangle(Vector2::new(0.5, 0.5))
        .unwrap()
        .with_position(Vector2::new(x, y))
}

#[test]
fn head_on() {
    let a = square(0.0, 0.0).with_velocity(Vector2::new(2.0, 0.0));
    let b = square(3.0, 0.0).with_velocity(Vector2::new(-2.0, 0.0));
    let res = collide(CollisionQuery::DoubleSweep, &a, &b).unwrap();

    assert!(res.collide);
    assert_relative_eq!(res.time_of_impact.unwrap(), 0.5);
    assert_relative_eq!(res.time_of_exit.unwrap(), 1.0);
    assert_relative_eq!(res.contact_axis.unwrap().normal.into_inner(), Vector2::x());
    assert_relative_eq!(res.preview_position(&a), Vector2::new(1.0, 0.0));
    assert_relative_eq!(res.preview_position(&b), Vector2::new(2.0, 0.0));

    let reference = res.reference_face().unwrap();
    let incident = res.incident_face().unwrap();
    assert_relative_eq!(reference.segment.a.x, 1.501, epsilon = 1.0e-5);
    assert_relative_eq!(incident.segment.a.x, 1.499, epsilon = 1.0e-5);
}

#[test]
fn chasing_a_slower_polygon() {
    let a = square(0.0, 0.0);
    let b = square(2.0, 0.0);
    let res = double_sweep_polygon_polygon(
        &a,
        &b,
        Some(&Vector2::new(5.0, 0.0)),
        Some(&Vector2::new(3.0, 0.0)),
    )
    .unwrap();

    assert!(res.collide);
    assert_relative_eq!(res.time_of_impact.unwrap(), 0.5);
}

#[test]
fn moving_apart() {
    let a = square(0.0, 0.0);
    let b = square(2.0, 0.0);
    let res = double_sweep_polygon_polygon(
        &a,
        &b,
        Some(&Vector2::new(-1.0, 0.0)),
        Some(&Vector2::new(1.0, 0.0)),
    )
    .unwrap();

    assert!(!res.collide);
    assert_eq!(res.time_of_impact, Some(1.0));
}

#[test]
fn separating_while_touching() {
    let a = square(0.0, 0.0);
    let b = square(1.0, 0.0);
    let res = double_sweep_polygon_polygon(&a, &b, None, Some(&Vector2::new(1.0, 0.0))).unwrap();
    assert!(!res.collide);

    let res = double_sweep_polygon_polygon(&a, &b, None, Some(&Vector2::new(-1.0, 0.0))).unwrap();
    assert!(res.collide);
    assert_eq!(res.time_of_impact, Some(0.0));
}

#[test]
fn zero_velocities_degenerate_to_static_query() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..100 {
        let a = square(0.0, 0.0);
        let b = square(
            rng.rand_float() as Real * 3.0 - 1.5,
            rng.rand_float() as Real * 3.0 - 1.5,
        );

        let fixed = sat_polygon_polygon(&a, &b).unwrap();
        let swept = double_sweep_polygon_polygon(&a, &b, None, Some(&Vector2::zeros())).unwrap();

        assert_eq!(swept.collide, fixed.collide);
        assert_eq!(swept.contact_axis, fixed.contact_axis);
        assert_eq!(swept.contacts(), fixed.contacts());
    }
}
