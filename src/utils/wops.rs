//! Miscellaneous operations on 2D vectors.

use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::QueryError;

/// Vector operations missing from nalgebra, or named differently there.
pub trait WPerp: Sized {
    /// This vector rotated by 90 degrees counter-clockwise.
    fn perpendicular(&self) -> Self;

    /// Normalizes this vector.
    ///
    /// Fails with [`QueryError::ZeroLengthVector`] instead of producing NaNs if the
    /// norm of `self` is not greater than [`DEFAULT_EPSILON`].
    fn try_unit(&self) -> Result<UnitVector<Real>, QueryError>;

    /// The angle, in radians, between the `x` axis and this vector.
    fn heading(&self) -> Real;
}

impl WPerp for Vector<Real> {
    #[inline]
    fn perpendicular(&self) -> Self {
        Vector::new(-self.y, self.x)
    }

    #[inline]
    fn try_unit(&self) -> Result<UnitVector<Real>, QueryError> {
        UnitVector::try_new(*self, DEFAULT_EPSILON).ok_or(QueryError::ZeroLengthVector)
    }

    #[inline]
    fn heading(&self) -> Real {
        self.y.atan2(self.x)
    }
}
