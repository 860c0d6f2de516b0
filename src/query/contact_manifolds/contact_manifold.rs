use crate::math::{Point, Real, UnitVector};
use crate::shape::Segment;
use arrayvec::ArrayVec;

/// The edge of a polygon that faces the other polygon of a contact.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactFace {
    /// The world-space vertex of the polygon farthest along the contact normal.
    pub support: Point<Real>,
    /// The world-space edge adjacent to `support` that is the most perpendicular to the
    /// contact normal, running against the vertex order of its polygon.
    pub segment: Segment,
}

impl ContactFace {
    /// The unit direction of this face's segment.
    ///
    /// Returns `None` if the segment is degenerate.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        self.segment.direction()
    }
}

/// The contact geometry between two polygons.
///
/// The contact points lie on the incident face and were clipped by the side planes of
/// the reference face. Both faces are reported even if clipping left no contact point.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContactManifold {
    /// The world-space contact points (zero, one or two).
    pub points: ArrayVec<Point<Real>, 2>,
    /// The face, more perpendicular to the contact normal, the incident face is clipped against.
    pub reference_face: Option<ContactFace>,
    /// The face whose clipped endpoints form the contact points.
    pub incident_face: Option<ContactFace>,
    /// Is the reference face on the second polygon?
    pub flipped: bool,
}

impl ContactManifold {
    /// An empty contact manifold, without any face.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does this manifold contain no contact point?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
