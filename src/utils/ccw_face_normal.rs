use crate::math::*;
use crate::shape::Winding;

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// This is the outward normal of an edge of a counter-clockwise polygon.
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(ab[1], -ab[0]);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}

/// Computes the outward normal of the edge `pts[0] -> pts[1]` of a polygon with the given winding.
///
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn outward_face_normal(pts: [&Point<Real>; 2], winding: Winding) -> Option<UnitVector<Real>> {
    let normal = ccw_face_normal(pts)?;

    match winding {
        Winding::Ccw => Some(normal),
        Winding::Cw => Some(-normal),
    }
}
