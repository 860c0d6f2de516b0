//! Shapes supported by sat2d.

pub use self::polygon::{Polygon, PolygonData};
pub use self::segment::Segment;
pub use self::winding::{signed_area, Winding};

mod polygon;
mod segment;
mod winding;
