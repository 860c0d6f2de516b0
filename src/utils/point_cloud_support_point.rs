use crate::math::{Point, Real, Vector};

/// The index of the point of `points` that is the farthest along `dir`.
///
/// The first one is selected if several points are equally far. Returns 0 if `points`
/// is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    let mut best = 0;
    let mut best_dot = -Real::MAX;

    for (i, pt) in points.iter().enumerate() {
        let dot = pt.coords.dot(dir);

        if dot > best_dot {
            best = i;
            best_dot = dot;
        }
    }

    best
}
