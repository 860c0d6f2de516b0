//! Swept collision queries between moving polygons.
//!
//! The polygons move linearly during one time unit, starting at their current positions.
//! Both queries return the time of impact in `[0, 1]` and the contact manifold of the
//! polygons advanced to that time.

pub use self::double_sweep_polygon_polygon::{
    double_sweep_polygon_polygon, double_sweep_polygon_polygon_with_options,
};
pub use self::sweep_options::SweepOptions;
pub use self::sweep_polygon_polygon::{sweep_polygon_polygon, sweep_polygon_polygon_with_options};

mod double_sweep_polygon_polygon;
mod sweep_options;
mod sweep_polygon_polygon;
