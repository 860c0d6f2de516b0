//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! The **Separating Axis Theorem (SAT)** states that two convex shapes do **not** intersect
//! if and only if there exists an axis onto which the projections of the two shapes do not
//! overlap.
//!
//! For two polygons, it is sufficient to test the normals of the edges of both polygons:
//!
//! 1. **Select candidate axes**: the outward normal of every edge of both polygons, see
//!    [`polygon_pair_axes`].
//! 2. **Project both polygons onto each axis**: the dot product of every vertex with the axis
//!    gives an [`Interval`](crate::utils::Interval), see [`project_polygon`].
//! 3. **Check for overlap**: if the projections don't overlap on any axis, the polygons don't
//!    collide.
//! 4. **Find the minimum penetration**: if all the projections overlap, the axis with the
//!    smallest penetration gives the minimum translation that separates both polygons.
//!
//! The swept queries of [`crate::query::sweep`] reuse the same axes, plus one axis perpendicular
//! to the relative velocity of the polygons.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use sat2d::na::Vector2;
//! use sat2d::query::sat::sat_polygon_polygon;
//! use sat2d::shape::Polygon;
//!
//! let square1 = Polygon::rectangle(Vector2::new(0.5, 0.5)).unwrap();
//! let square2 = square1.clone().with_position(Vector2::new(0.5, 0.0));
//!
//! let result = sat_polygon_polygon(&square1, &square2).unwrap();
//! let contact = result.contact_axis.unwrap();
//! assert!(result.collide);
//! assert_eq!(contact.depth, 0.5);
//! # }
//! ```
//!
//! Note that only convex polygons are handled correctly.

pub use self::sat_axis::{
    polygon_axes, polygon_pair_axes, project_polygon, AxisSource, SeparatingAxis,
};
pub use self::sat_polygon_polygon::sat_polygon_polygon;
pub(crate) use self::sat_polygon_polygon::resolve_penetration;

mod sat_axis;
mod sat_polygon_polygon;
