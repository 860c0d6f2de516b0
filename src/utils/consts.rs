use crate::math::Real;

/// Scales the displacement of a polygon advanced to its time of impact so that the
/// advanced polygon measurably overlaps the other one.
pub(crate) const IMPACT_OVERSHOOT: Real = 1.001;
