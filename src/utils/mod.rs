//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::{ccw_face_normal, outward_face_normal};
pub(crate) use self::consts::*;
pub use self::interval::Interval;
pub use self::point_cloud_support_point::point_cloud_support_point_id;
pub use self::wops::WPerp;

mod ccw_face_normal;
mod consts;
mod interval;
mod point_cloud_support_point;
mod wops;
