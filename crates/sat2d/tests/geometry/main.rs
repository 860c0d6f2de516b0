#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod double_sweep;
mod polygon_editing;
mod sat_polygon_polygon;
mod sweep;
