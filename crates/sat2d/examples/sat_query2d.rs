extern crate nalgebra as na;

use na::{Point2, Vector2};
use sat2d::query::sat::sat_polygon_polygon;
use sat2d::shape::Polygon;

fn main() {
    let square = Polygon::rectangle(Vector2::new(1.0, 1.0)).unwrap();
    let triangle = Polygon::new(vec![
        Point2::new(0.0, 1.0),
        Point2::new(-1.0, -1.0),
        Point2::new(1.0, -1.0),
    ])
    .unwrap();

    let triangle_intersecting = triangle.clone().with_position(Vector2::new(1.5, 0.5));
    let triangle_disjoint = triangle.with_position(Vector2::new(4.0, 0.0));

    let res_intersecting = sat_polygon_polygon(&square, &triangle_intersecting).unwrap();
    let res_disjoint = sat_polygon_polygon(&square, &triangle_disjoint).unwrap();

    assert!(res_intersecting.collide);
    assert!(!res_disjoint.collide);

    if let Some(contact) = res_intersecting.contact_axis {
        println!(
            "Penetration depth: {}, normal: {:?}, translation: {:?}",
            contact.depth,
            contact.normal,
            contact.translation()
        );
    }

    if let Some(axis) = res_intersecting.contact_separating_axis() {
        println!(
            "Contact axis from {:?}, projections {:?} and {:?}",
            axis.source, axis.proj1, axis.proj2
        );
    }

    println!("Contact points: {:?}", res_intersecting.contacts());

    for axis in &res_disjoint.axes {
        println!(
            "Axis {:?}: {:?} vs {:?}, separating: {}",
            axis.source,
            axis.proj1,
            axis.proj2,
            axis.is_separating()
        );
    }
}
