use na::{Point2, Vector2};
use sat2d::math::Real;
use sat2d::query::sat::{sat_polygon_polygon, AxisSource};
use sat2d::query::sweep::{
    sweep_polygon_polygon, sweep_polygon_polygon_with_options, SweepOptions,
};
use sat2d::shape::Polygon;

fn square(x: Real, y: Real) -> Polygon {
    Polygon::rectangle(Vector2::new(0.5, 0.5))
        .unwrap()
        .with_position(Vector2::new(x, y))
}

#[test]
fn square_approaching_square() {
    let moving = square(0.0, 0.0);
    let target = square(3.0, 0.0);
    let res = sweep_polygon_polygon(&moving, &target, &Vector2::new(4.0, 0.0)).unwrap();

    assert!(res.collide);
    assert_relative_eq!(res.time_of_impact.unwrap(), 0.5);
    assert_eq!(res.axes.last().map(|axis| axis.source), Some(AxisSource::Velocity));
    assert_eq!(res.contacts().len(), 2);

    for pt in res.contacts() {
        assert_relative_eq!(pt.x, 2.5, epsilon = 1.0e-2);
    }

    let reference = res.reference_face().unwrap();
    assert_relative_eq!(reference.segment.a.x, 2.502, epsilon = 1.0e-5);
}

#[test]
fn diagonal_approach() {
    let moving = square(0.0, 0.0);
    let target = square(3.0, 3.0);
    let res = sweep_polygon_polygon(&moving, &target, &Vector2::new(4.0, 4.0)).unwrap();

    assert!(res.collide);
    assert_relative_eq!(res.time_of_impact.unwrap(), 0.5);
    // The corners overlap slightly after the overshoot.
    assert_eq!(res.contacts().len(), 2);
    for pt in res.contacts() {
        assert_relative_eq!(*pt, Point2::new(2.5, 2.5), epsilon = 1.0e-2);
    }
}

#[test]
fn missing_the_target() {
    let moving = square(0.0, 0.0);
    let target = square(3.0, 0.0);
    let res = sweep_polygon_polygon(&moving, &target, &Vector2::new(4.0, 3.0)).unwrap();

    assert!(!res.collide);
    assert_eq!(res.time_of_impact, Some(1.0));
    assert!(res.contact_axis.is_none());
    assert_eq!(
        res.preview_position(&moving.with_velocity(Vector2::new(4.0, 3.0))),
        Vector2::new(4.0, 3.0)
    );
}

#[test]
fn zero_velocity_degenerates_to_static_query() {
    let cases = [
        (square(0.0, 0.0), square(1.5, 0.0)),
        (square(0.0, 0.0), square(0.5, 0.25)),
        (
            square(0.0, 0.0),
            Polygon::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ])
            .unwrap()
            .with_position(Vector2::new(0.25, 0.25)),
        ),
    ];

    for (a, b) in &cases {
        let fixed = sat_polygon_polygon(a, b).unwrap();
        let swept = sweep_polygon_polygon(a, b, &Vector2::zeros()).unwrap();

        assert_eq!(swept.collide, fixed.collide);
        assert_eq!(swept.axes.len(), fixed.axes.len());
        let expected_toi = if fixed.collide { 0.0 } else { 1.0 };
        assert_eq!(swept.time_of_impact, Some(expected_toi));
        assert_eq!(swept.contact_axis, fixed.contact_axis);
    }
}

#[test]
fn custom_overshoot() {
    let moving = square(0.0, 0.0);
    let target = square(3.0, 0.0);
    let options = SweepOptions::with_overshoot(1.1);
    let res =
        sweep_polygon_polygon_with_options(&moving, &target, &Vector2::new(4.0, 0.0), options)
            .unwrap();

    assert_relative_eq!(res.time_of_impact.unwrap(), 0.5);
    let reference = res.reference_face().unwrap();
    assert_relative_eq!(reference.segment.a.x, 2.7, epsilon = 1.0e-5);
}
