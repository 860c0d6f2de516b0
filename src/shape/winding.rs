use crate::math::{Point, Real, DEFAULT_EPSILON};

/// The order in which the vertices of a polygon are listed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Counter-clockwise (positive signed area, with the `y` axis pointing up).
    Ccw,
    /// Clockwise (negative signed area, with the `y` axis pointing up).
    Cw,
}

impl Winding {
    /// The winding of the closed polyline `vertices`.
    ///
    /// Returns `None` if the signed area of the polyline is (close to) zero, in which
    /// case no winding can be determined.
    pub fn of_polyline(vertices: &[Point<Real>]) -> Option<Self> {
        Self::from_signed_value(signed_area(vertices))
    }

    /// The direction of the turn made at `p2` when following `p1 -> p2 -> p3`.
    ///
    /// Counter-clockwise example:
    ///     o p3
    ///     .
    ///     .
    /// o . o p2
    /// p1
    ///
    /// Returns `None` if the three points are aligned.
    pub fn of_corner(p1: &Point<Real>, p2: &Point<Real>, p3: &Point<Real>) -> Option<Self> {
        let cross = (p2 - p1).perp(&(p3 - p2));
        Self::from_signed_value(cross)
    }

    fn from_signed_value(value: Real) -> Option<Self> {
        if value > DEFAULT_EPSILON {
            Some(Winding::Ccw)
        } else if value < -DEFAULT_EPSILON {
            Some(Winding::Cw)
        } else {
            None
        }
    }
}

/// The signed area enclosed by the closed polyline `vertices`.
///
/// Positive for counter-clockwise polylines.
pub fn signed_area(vertices: &[Point<Real>]) -> Real {
    let mut twice_area = 0.0;

    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        twice_area += a.coords.perp(&b.coords);
    }

    twice_area / 2.0
}
