//! Definition of the segment shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` if both points are equal.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        UnitVector::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// The point `self.a + (self.b - self.a) * t`.
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}
