/*!
sat2d
========

**sat2d** is a 2-dimensional polygon collision-detection library written with
the rust programming language.

It implements the Separating Axis Theorem for a pair of polygons, two swept
variants of it (only the first polygon moving, or both polygons moving), and
the extraction of a clipped contact manifold shared by all three queries.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "serde-serialize"), deny(unused_qualifications))]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate arrayvec;
pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}
