use crate::math::Real;
use crate::utils::IMPACT_OVERSHOOT;

/// Configuration for controlling the behavior of swept collision queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepOptions {
    /// The factor applied to the displacement of the polygons advanced to their time of
    /// impact before computing their contact manifold.
    ///
    /// Slightly greater than 1 so that the advanced polygons overlap instead of only
    /// touching. Must not be smaller than 1.
    pub overshoot: Real,
}

impl SweepOptions {
    /// Creates a [`SweepOptions`] with the given overshoot factor.
    pub fn with_overshoot(overshoot: Real) -> Self {
        debug_assert!(overshoot >= 1.0, "The sweep overshoot must be at least 1.");
        Self { overshoot }
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            overshoot: IMPACT_OVERSHOOT,
        }
    }
}
