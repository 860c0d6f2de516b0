extern crate nalgebra as na;

use na::Vector2;
use sat2d::query::{collide, CollisionQuery};
use sat2d::shape::Polygon;

fn main() {
    let square = Polygon::rectangle(Vector2::new(0.5, 0.5)).unwrap();

    let bullet = square
        .clone()
        .with_position(Vector2::new(-3.0, 0.25))
        .with_velocity(Vector2::new(6.0, 0.0));
    let wall = Polygon::rectangle(Vector2::new(0.25, 2.0))
        .unwrap()
        .with_velocity(Vector2::new(-1.0, 0.0));
    let far_away = square.with_position(Vector2::new(0.0, 5.0));

    let res_static = collide(CollisionQuery::Static, &bullet, &wall).unwrap();
    let res_will_touch = collide(CollisionQuery::Sweep, &bullet, &wall).unwrap();
    let res_both_moving = collide(CollisionQuery::DoubleSweep, &bullet, &wall).unwrap();
    let res_wont_touch = collide(CollisionQuery::Sweep, &bullet, &far_away).unwrap();

    assert!(!res_static.collide);
    assert!(res_will_touch.collide);
    assert!(res_both_moving.collide);
    assert!(!res_wont_touch.collide);

    println!(
        "Single sweep: toi {:?}, ghost at {:?}, contacts {:?}",
        res_will_touch.time_of_impact,
        res_will_touch.preview_position(&bullet),
        res_will_touch.contacts()
    );
    println!(
        "Double sweep: toi {:?}, separation at {:?}, contacts {:?}",
        res_both_moving.time_of_impact,
        res_both_moving.time_of_exit,
        res_both_moving.contacts()
    );
    assert!(res_both_moving.time_of_impact < res_will_touch.time_of_impact);
}
