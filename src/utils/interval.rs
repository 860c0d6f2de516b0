use na::RealField;

/// A closed interval `[self.0, self.1]`, typically the projection of a shape on an axis.
///
/// The first endpoint is expected to be smaller or equal to the second one.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval<T>(pub T, pub T);

impl<T> Interval<T> {
    /// Create the interval `[e, e]` (single value).
    #[must_use]
    pub fn splat(e: T) -> Self
    where
        T: Clone,
    {
        Self(e.clone(), e)
    }

    /// Computes a new interval that contains both `self` and `t`.
    #[must_use]
    pub fn enclose(self, t: T) -> Self
    where
        T: PartialOrd,
    {
        if t < self.0 {
            Interval(t, self.1)
        } else if t > self.1 {
            Interval(self.0, t)
        } else {
            self
        }
    }

    /// The interval covered by `self` while it is translated by `delta`.
    ///
    /// This is the union of `self` and `self + delta`.
    #[must_use]
    pub fn swept(self, delta: T) -> Self
    where
        T: RealField + Copy,
    {
        if delta >= T::zero() {
            Interval(self.0, self.1 + delta)
        } else {
            Interval(self.0 + delta, self.1)
        }
    }

    /// Do `self` and `other` share at least one value?
    ///
    /// Intervals touching at a single endpoint are considered overlapping.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        !(self.0 > other.1 || other.0 > self.1)
    }

    /// Signed penetration depth of `other` into `self`.
    ///
    /// This is the smallest displacement of `other` along the axis that makes both
    /// intervals stop overlapping (they end up touching). A positive value means `other`
    /// must be pushed toward `+∞`, a negative value means it must be pushed toward `-∞`.
    /// When both pushes have the same length, the push toward `-∞` is selected.
    ///
    /// Returns zero if the intervals don't overlap. Note that touching intervals yield
    /// a signed zero whose sign still tells the push direction.
    #[must_use]
    pub fn penetration(&self, other: &Self) -> T
    where
        T: RealField + Copy,
    {
        if !self.intersects(other) {
            return T::zero();
        }

        // Moves `other` toward `+∞`, or toward `-∞`.
        let push_up = self.1 - other.0;
        let push_down = other.1 - self.0;
        let smallest_push = || {
            if push_up < push_down {
                push_up
            } else {
                -push_down
            }
        };

        if self.0 < other.0 {
            if self.1 < other.1 {
                // `self` starts and ends first: `other` straddles its upper end.
                push_up
            } else {
                // `self` contains `other`.
                smallest_push()
            }
        } else if self.1 > other.1 {
            // `other` starts and ends first: `other` straddles the lower end of `self`.
            -push_down
        } else {
            // `other` contains `self`.
            smallest_push()
        }
    }

    /// Signed distance between two intervals.
    ///
    /// Returns zero if the intervals overlap, and the negated length of the gap
    /// separating them otherwise.
    #[must_use]
    pub fn distance(&self, other: &Self) -> T
    where
        T: RealField + Copy,
    {
        if self.intersects(other) {
            T::zero()
        } else if self.1 < other.0 {
            -(other.0 - self.1)
        } else {
            -(self.0 - other.1)
        }
    }
}
