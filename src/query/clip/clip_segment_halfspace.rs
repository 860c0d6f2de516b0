use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use arrayvec::ArrayVec;

/// Clips the segment `seg` by the half-plane `{ p | normal · p >= offset }`.
///
/// Endpoints inside of the half-plane are kept, in order. If the segment crosses the
/// boundary line, the crossing point is added after them. Returns at most two points.
pub fn clip_segment_halfspace(
    seg: &Segment,
    normal: &Vector<Real>,
    offset: Real,
) -> ArrayVec<Point<Real>, 2> {
    let d1 = normal.dot(&seg.a.coords) - offset;
    let d2 = normal.dot(&seg.b.coords) - offset;
    let mut result = ArrayVec::new();

    if d1 >= 0.0 {
        result.push(seg.a);
    }

    if d2 >= 0.0 {
        result.push(seg.b);
    }

    // NOTE: exactly one of the endpoints was pushed if this is true.
    if d1 * d2 < 0.0 {
        result.push(seg.point_at(d1 / (d1 - d2)));
    }

    result
}
